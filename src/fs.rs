//! The mounted file system: inode allocation, the block allocator, and
//! the direct/indirect addressing used by `read` and `write`.

use crate::disk::Disk;
use crate::error::Error;
use crate::layout::{
    IndirectBlock, Inode, SuperBlock, BLOCK_SIZE, INODES_PER_BLOCK, MAX_FILE_SIZE,
    POINTERS_PER_BLOCK, POINTERS_PER_INODE,
};

/// The global identity of an inode: `(blk_index - 1) * 128 + slot_index`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InodeNumber(u32);

impl InodeNumber {
    /// Wraps a raw inumber, e.g. one previously returned by `create` or
    /// read back from a `debug` dump.
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    /// The raw inumber.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn split(self) -> (u32, u32) {
        (self.0 / INODES_PER_BLOCK, self.0 % INODES_PER_BLOCK)
    }
}

/// A mounted Simple File System.
///
/// Produced only by [`SimpleFs::mount`], which borrows the backing
/// [`Disk`] for `'d`. The in-memory free-block bitmap and per-inode-block
/// occupancy census live here, not on the `Disk`, matching the "single
/// mount at a time, no internal locking" resource model: nothing about
/// this type is `Sync`, so sharing one across threads needs the caller's
/// own synchronization.
pub struct SimpleFs<'d, D: Disk> {
    disk: &'d D,
    metadata: SuperBlock,
    free_block_bitmap: Vec<bool>,
    inode_counter: Vec<u32>,
}

impl<'d, D: Disk> SimpleFs<'d, D> {
    /// Writes a fresh superblock and zeroes every other block. Refuses a
    /// disk that is already mounted; never preserves prior content.
    pub fn format(disk: &D) -> bool {
        if disk.mounted() {
            return false;
        }
        let blocks = disk.size();
        let inode_blocks = SuperBlock::expected_inode_blocks(blocks);
        let sb = SuperBlock {
            magic: crate::layout::MAGIC_NUMBER,
            blocks,
            inode_blocks,
            inodes: inode_blocks * INODES_PER_BLOCK,
        };
        disk.write(0, &sb.encode());
        let zero = [0u8; BLOCK_SIZE];
        for i in 1..blocks {
            disk.write(i, &zero);
        }
        true
    }

    /// Validates the superblock, then scans every inode block to
    /// reconstruct the free-block bitmap and per-inode-block census.
    ///
    /// On any failure no in-memory state is retained and the `Disk` is
    /// left unmounted, including when a corrupt pointer is discovered
    /// partway through the scan: the scan is treated as part of
    /// validation, not as a side effect to keep around on failure.
    pub fn mount(disk: &'d D) -> Result<Self, Error> {
        if disk.mounted() {
            return Err(Error::AlreadyMounted);
        }

        let mut block = [0u8; BLOCK_SIZE];
        disk.read(0, &mut block);
        let metadata = SuperBlock::decode(&block);
        if metadata.magic != crate::layout::MAGIC_NUMBER {
            log::warn!(
                "mount: bad magic number {:#010x}, expected {:#010x}",
                metadata.magic,
                crate::layout::MAGIC_NUMBER
            );
            return Err(Error::BadSuperblock);
        }
        if metadata.inode_blocks != SuperBlock::expected_inode_blocks(metadata.blocks)
            || metadata.inodes != metadata.inode_blocks * INODES_PER_BLOCK
        {
            log::warn!("mount: superblock fields are inconsistent: {metadata:?}");
            return Err(Error::BadSuperblock);
        }

        let mut free_block_bitmap = vec![false; metadata.blocks as usize];
        free_block_bitmap[0] = true;
        let mut inode_counter = vec![0u32; metadata.inode_blocks as usize];

        for i in 1..=metadata.inode_blocks {
            disk.read(i, &mut block);
            for j in 0..INODES_PER_BLOCK {
                let inode = Inode::decode(&block, j as usize);
                if !inode.valid {
                    continue;
                }
                inode_counter[(i - 1) as usize] += 1;
                free_block_bitmap[i as usize] = true;

                for &d in inode.direct.iter() {
                    if d == 0 {
                        continue;
                    }
                    if d >= metadata.blocks {
                        log::warn!("mount: direct pointer {d} is out of range");
                        return Err(Error::CorruptPointer);
                    }
                    free_block_bitmap[d as usize] = true;
                }

                if inode.indirect == 0 {
                    continue;
                }
                if inode.indirect >= metadata.blocks {
                    log::warn!("mount: indirect pointer {} is out of range", inode.indirect);
                    return Err(Error::CorruptPointer);
                }
                free_block_bitmap[inode.indirect as usize] = true;

                let mut ib = [0u8; BLOCK_SIZE];
                disk.read(inode.indirect, &mut ib);
                for &p in IndirectBlock::decode(&ib).pointers.iter() {
                    if p == 0 {
                        continue;
                    }
                    if p >= metadata.blocks {
                        log::warn!("mount: indirect-block pointer {p} is out of range");
                        return Err(Error::CorruptPointer);
                    }
                    free_block_bitmap[p as usize] = true;
                }
            }
        }

        disk.mount();
        log::debug!(
            "mounted: {} blocks, {} inode blocks, {} inodes",
            metadata.blocks,
            metadata.inode_blocks,
            metadata.inodes
        );
        Ok(Self {
            disk,
            metadata,
            free_block_bitmap,
            inode_counter,
        })
    }

    /// Finds the first free inode slot, initializes it, and returns its
    /// global inumber. `None` if every inode slot is in use.
    pub fn create(&mut self) -> Option<InodeNumber> {
        for i in 1..=self.metadata.inode_blocks {
            if self.inode_counter[(i - 1) as usize] == INODES_PER_BLOCK {
                continue;
            }
            let mut block = [0u8; BLOCK_SIZE];
            self.disk.read(i, &mut block);
            for j in 0..INODES_PER_BLOCK {
                if Inode::decode(&block, j as usize).valid {
                    continue;
                }
                let fresh = Inode {
                    valid: true,
                    size: 0,
                    direct: [0; POINTERS_PER_INODE as usize],
                    indirect: 0,
                };
                fresh.encode_into(&mut block, j as usize);
                self.inode_counter[(i - 1) as usize] += 1;
                self.free_block_bitmap[i as usize] = true;
                self.disk.write(i, &block);
                return Some(InodeNumber((i - 1) * INODES_PER_BLOCK + j));
            }
        }
        None
    }

    /// Invalidates an inode and releases its data blocks. `false` if the
    /// inumber does not name a live inode.
    ///
    /// Zero direct-pointer slots are skipped when releasing blocks, so
    /// the superblock's bit (index 0) is never spuriously cleared; see
    /// `DESIGN.md` for why this departs from the literal original.
    pub fn remove(&mut self, inumber: InodeNumber) -> bool {
        let mut inode = match self.load_inode(inumber) {
            Some(inode) => inode,
            None => return false,
        };
        let (i, j) = inumber.split();

        inode.valid = false;
        inode.size = 0;

        self.inode_counter[i as usize] -= 1;
        if self.inode_counter[i as usize] == 0 {
            self.free_block_bitmap[(i + 1) as usize] = false;
        }

        for d in inode.direct.iter_mut() {
            if *d != 0 {
                self.free_block_bitmap[*d as usize] = false;
            }
            *d = 0;
        }

        if inode.indirect != 0 {
            let indirect = self.load_indirect(inode.indirect);
            self.free_block_bitmap[inode.indirect as usize] = false;
            inode.indirect = 0;
            for &p in indirect.pointers.iter() {
                if p != 0 {
                    self.free_block_bitmap[p as usize] = false;
                }
            }
        }

        let mut block = [0u8; BLOCK_SIZE];
        self.disk.read(i + 1, &mut block);
        inode.encode_into(&mut block, j as usize);
        self.disk.write(i + 1, &block);
        true
    }

    /// The inode's size in bytes, or `None` if the inumber does not name
    /// a live inode.
    pub fn stat(&self, inumber: InodeNumber) -> Option<u32> {
        self.load_inode(inumber).map(|inode| inode.size)
    }

    /// Copies up to `length` bytes starting at `offset` into `buf`,
    /// returning the number of bytes copied.
    ///
    /// `buf` must be large enough to hold `length` rounded up to the
    /// final whole block touched by the read: the last block copied
    /// always writes a full `BLOCK_SIZE - (offset % BLOCK_SIZE)` bytes
    /// into `buf` regardless of how few were actually requested. This is
    /// a documented, intentional contract, not a bug — see `DESIGN.md`.
    pub fn read(&self, inumber: InodeNumber, buf: &mut [u8], length: usize, offset: usize) -> usize {
        let size = match self.stat(inumber) {
            Some(size) => size as usize,
            None => return 0,
        };
        if offset >= size {
            return 0;
        }
        let requested = length.min(size - offset);
        let mut remaining = requested;
        let inode = self
            .load_inode(inumber)
            .expect("stat succeeded above, so the inode is live");

        let mut pos = 0usize;
        if offset < POINTERS_PER_INODE as usize * BLOCK_SIZE {
            let mut d = offset / BLOCK_SIZE;
            let block_offset = offset % BLOCK_SIZE;

            if inode.direct[d] == 0 {
                return 0;
            }
            let n = BLOCK_SIZE - block_offset;
            self.copy_from_block(inode.direct[d], block_offset, &mut buf[pos..pos + n]);
            pos += n;
            remaining = remaining.saturating_sub(n);
            d += 1;

            while remaining > 0 && d < POINTERS_PER_INODE as usize && inode.direct[d] != 0 {
                self.copy_from_block(inode.direct[d], 0, &mut buf[pos..pos + BLOCK_SIZE]);
                pos += BLOCK_SIZE;
                remaining = remaining.saturating_sub(BLOCK_SIZE);
                d += 1;
            }
            if remaining == 0 {
                return requested;
            }
            if d != POINTERS_PER_INODE as usize || inode.indirect == 0 {
                return pos;
            }

            let indirect = self.load_indirect(inode.indirect);
            for &p in indirect.pointers.iter() {
                if p == 0 || remaining == 0 {
                    break;
                }
                self.copy_from_block(p, 0, &mut buf[pos..pos + BLOCK_SIZE]);
                pos += BLOCK_SIZE;
                remaining = remaining.saturating_sub(BLOCK_SIZE);
            }
            if remaining == 0 {
                requested
            } else {
                pos
            }
        } else {
            if inode.indirect == 0 {
                return 0;
            }
            let offset = offset - POINTERS_PER_INODE as usize * BLOCK_SIZE;
            let mut p_idx = offset / BLOCK_SIZE;
            let block_offset = offset % BLOCK_SIZE;
            let indirect = self.load_indirect(inode.indirect);

            if indirect.pointers[p_idx] != 0 && remaining > 0 {
                let n = BLOCK_SIZE - block_offset;
                self.copy_from_block(indirect.pointers[p_idx], block_offset, &mut buf[pos..pos + n]);
                pos += n;
                remaining = remaining.saturating_sub(n);
                p_idx += 1;
            }
            while p_idx < POINTERS_PER_BLOCK as usize {
                if indirect.pointers[p_idx] == 0 || remaining == 0 {
                    break;
                }
                self.copy_from_block(indirect.pointers[p_idx], 0, &mut buf[pos..pos + BLOCK_SIZE]);
                pos += BLOCK_SIZE;
                remaining = remaining.saturating_sub(BLOCK_SIZE);
                p_idx += 1;
            }
            if remaining == 0 {
                requested
            } else {
                pos
            }
        }
    }

    /// Writes `length` bytes of `data` at `offset`, lazily allocating
    /// data blocks (and the indirect block) as it advances.
    ///
    /// On allocator exhaustion, partial progress is persisted (the
    /// inode and, if touched, the indirect block are written back with
    /// whatever was copied so far) and `Ok(bytes_copied)` is returned —
    /// this is not an error per the system's error model, only `write`'s
    /// own `offset + length` exceeding the addressable maximum is.
    pub fn write(
        &mut self,
        inumber: InodeNumber,
        data: &[u8],
        length: usize,
        offset: usize,
    ) -> Result<usize, Error> {
        let max_size = offset as u64 + length as u64;
        if max_size > MAX_FILE_SIZE {
            return Err(Error::TooLarge);
        }
        let max_size = max_size as u32;
        let old_offset = offset as u32;

        let (mut inode, old_size) = match self.load_inode(inumber) {
            Some(existing) => {
                let old_size = existing.size;
                let mut inode = existing;
                inode.size = inode.size.max(max_size);
                (inode, old_size)
            }
            None => {
                let (i, _) = inumber.split();
                self.inode_counter[i as usize] += 1;
                self.free_block_bitmap[(i + 1) as usize] = true;
                (
                    Inode {
                        valid: true,
                        size: max_size,
                        direct: [0; POINTERS_PER_INODE as usize],
                        indirect: 0,
                    },
                    0,
                )
            }
        };

        let mut num_bytes = 0usize;

        if offset < POINTERS_PER_INODE as usize * BLOCK_SIZE {
            let mut d = offset / BLOCK_SIZE;
            let block_offset = offset % BLOCK_SIZE;

            let block = match self.allocate_block(inode.direct[d]) {
                Some(b) => {
                    inode.direct[d] = b;
                    b
                }
                None => {
                    inode.size = old_size;
                    self.write_inode(inumber, &inode);
                    return Ok(num_bytes);
                }
            };
            self.write_data_block(block, block_offset, data, length, &mut num_bytes);
            d += 1;
            if num_bytes == length {
                self.write_inode(inumber, &inode);
                return Ok(length);
            }

            while d < POINTERS_PER_INODE as usize {
                let block = match self.allocate_block(inode.direct[d]) {
                    Some(b) => {
                        inode.direct[d] = b;
                        b
                    }
                    None => {
                        inode.size = old_offset + num_bytes as u32;
                        self.write_inode(inumber, &inode);
                        return Ok(num_bytes);
                    }
                };
                self.write_data_block(block, 0, data, length, &mut num_bytes);
                d += 1;
                if num_bytes == length {
                    self.write_inode(inumber, &inode);
                    return Ok(length);
                }
            }

            let mut indirect = if inode.indirect != 0 {
                self.load_indirect(inode.indirect)
            } else {
                match self.allocate_block(inode.indirect) {
                    Some(b) => inode.indirect = b,
                    None => {
                        inode.size = old_offset + num_bytes as u32;
                        self.write_inode(inumber, &inode);
                        return Ok(num_bytes);
                    }
                }
                IndirectBlock::default()
            };

            for slot in indirect.pointers.iter_mut() {
                let block = match self.allocate_block(*slot) {
                    Some(b) => {
                        *slot = b;
                        b
                    }
                    None => {
                        inode.size = old_offset + num_bytes as u32;
                        self.disk.write(inode.indirect, &indirect.encode());
                        self.write_inode(inumber, &inode);
                        return Ok(num_bytes);
                    }
                };
                self.write_data_block(block, 0, data, length, &mut num_bytes);
                if num_bytes == length {
                    self.disk.write(inode.indirect, &indirect.encode());
                    self.write_inode(inumber, &inode);
                    return Ok(length);
                }
            }

            self.disk.write(inode.indirect, &indirect.encode());
            self.write_inode(inumber, &inode);
            Ok(num_bytes)
        } else {
            let offset = offset - POINTERS_PER_INODE as usize * BLOCK_SIZE;
            let mut p_idx = offset / BLOCK_SIZE;
            let block_offset = offset % BLOCK_SIZE;

            let mut indirect = if inode.indirect != 0 {
                self.load_indirect(inode.indirect)
            } else {
                match self.allocate_block(inode.indirect) {
                    Some(b) => inode.indirect = b,
                    None => {
                        inode.size = old_size;
                        self.write_inode(inumber, &inode);
                        return Ok(num_bytes);
                    }
                }
                IndirectBlock::default()
            };

            let block = match self.allocate_block(indirect.pointers[p_idx]) {
                Some(b) => {
                    indirect.pointers[p_idx] = b;
                    b
                }
                None => {
                    inode.size = old_size;
                    self.disk.write(inode.indirect, &indirect.encode());
                    self.write_inode(inumber, &inode);
                    return Ok(num_bytes);
                }
            };
            self.write_data_block(block, block_offset, data, length, &mut num_bytes);
            p_idx += 1;
            if num_bytes == length {
                self.disk.write(inode.indirect, &indirect.encode());
                self.write_inode(inumber, &inode);
                return Ok(length);
            }

            while p_idx < POINTERS_PER_BLOCK as usize {
                let block = match self.allocate_block(indirect.pointers[p_idx]) {
                    Some(b) => {
                        indirect.pointers[p_idx] = b;
                        b
                    }
                    None => {
                        inode.size = old_offset + num_bytes as u32;
                        self.disk.write(inode.indirect, &indirect.encode());
                        self.write_inode(inumber, &inode);
                        return Ok(num_bytes);
                    }
                };
                self.write_data_block(block, 0, data, length, &mut num_bytes);
                p_idx += 1;
                if num_bytes == length {
                    self.disk.write(inode.indirect, &indirect.encode());
                    self.write_inode(inumber, &inode);
                    return Ok(length);
                }
            }

            self.disk.write(inode.indirect, &indirect.encode());
            self.write_inode(inumber, &inode);
            Ok(num_bytes)
        }
    }

    /// Linear first-fit over the free-block bitmap, excluding the
    /// superblock and inode-block region. A no-op success if `slot` is
    /// already non-zero.
    fn allocate_block(&mut self, slot: u32) -> Option<u32> {
        if slot != 0 {
            return Some(slot);
        }
        let start = self.metadata.inode_blocks + 1;
        for i in start..self.metadata.blocks {
            if !self.free_block_bitmap[i as usize] {
                self.free_block_bitmap[i as usize] = true;
                log::trace!("allocated block {i}");
                return Some(i);
            }
        }
        log::warn!("no free blocks left past block {start}");
        None
    }

    fn load_inode(&self, inumber: InodeNumber) -> Option<Inode> {
        let (i, j) = inumber.split();
        if self.inode_counter[i as usize] == 0 {
            return None;
        }
        let mut block = [0u8; BLOCK_SIZE];
        self.disk.read(i + 1, &mut block);
        let inode = Inode::decode(&block, j as usize);
        inode.valid.then_some(inode)
    }

    fn write_inode(&self, inumber: InodeNumber, inode: &Inode) {
        let (i, j) = inumber.split();
        let mut block = [0u8; BLOCK_SIZE];
        self.disk.read(i + 1, &mut block);
        inode.encode_into(&mut block, j as usize);
        self.disk.write(i + 1, &block);
    }

    fn load_indirect(&self, block_number: u32) -> IndirectBlock {
        let mut block = [0u8; BLOCK_SIZE];
        self.disk.read(block_number, &mut block);
        IndirectBlock::decode(&block)
    }

    /// Copies `dst.len()` bytes out of `block` starting at `src_offset`.
    fn copy_from_block(&self, block: u32, src_offset: usize, dst: &mut [u8]) {
        let mut buf = [0u8; BLOCK_SIZE];
        self.disk.read(block, &mut buf);
        dst.copy_from_slice(&buf[src_offset..src_offset + dst.len()]);
    }

    /// Reads `block` into a scratch buffer, overwrites
    /// `[offset, min(BLOCK_SIZE, offset + remaining))` with the next
    /// unwritten bytes of `data`, and writes it back, preserving
    /// whatever tail bytes were already in the block.
    fn write_data_block(
        &self,
        block: u32,
        offset: usize,
        data: &[u8],
        length: usize,
        num_bytes: &mut usize,
    ) {
        let mut buf = [0u8; BLOCK_SIZE];
        self.disk.read(block, &mut buf);
        let n = (BLOCK_SIZE - offset).min(length - *num_bytes);
        buf[offset..offset + n].copy_from_slice(&data[*num_bytes..*num_bytes + n]);
        *num_bytes += n;
        self.disk.write(block, &buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::MemoryDisk;

    fn mounted(blocks: u32) -> (MemoryDisk, ()) {
        let disk = MemoryDisk::new(blocks);
        assert!(SimpleFs::format(&disk));
        (disk, ())
    }

    #[test]
    fn tiny_device_round_trip() {
        let (disk, _) = mounted(10);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        assert_eq!(n.as_u32(), 0);
        assert_eq!(fs.write(n, b"hello", 5, 0).unwrap(), 5);
        assert_eq!(fs.stat(n), Some(5));
        // `read` overshoots to the end of the block it touches regardless
        // of the requested length, so the destination must cover a whole
        // block even for a 5-byte file.
        let mut buf = [0u8; BLOCK_SIZE];
        assert_eq!(fs.read(n, &mut buf, 5, 0), 5);
        assert_eq!(&buf[..5], b"hello");
    }

    #[test]
    fn cross_block_direct_write() {
        let (disk, _) = mounted(200);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        assert_eq!(fs.write(n, &data, 5000, 0).unwrap(), 5000);
        assert_eq!(fs.stat(n), Some(5000));
        // The read crosses from the first direct block into the second,
        // so the buffer must cover the second block's full overshoot copy.
        let mut buf = [0u8; 2 * BLOCK_SIZE];
        assert_eq!(fs.read(n, &mut buf, 1000, 4000), 1000);
        assert_eq!(&buf[..1000], &data[4000..5000]);
    }

    #[test]
    fn remove_then_recreate_reuses_inumber() {
        let (disk, _) = mounted(2000);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        let data = vec![0x42u8; 5 * BLOCK_SIZE + 100];
        fs.write(n, &data, data.len(), 0).unwrap();
        assert!(fs.remove(n));
        assert!(!fs.remove(n));
        let n2 = fs.create().unwrap();
        assert_eq!(n, n2);
    }

    #[test]
    fn write_beyond_max_size_fails_without_state_change() {
        let (disk, _) = mounted(2000);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        let data = vec![0u8; 10];
        let err = fs
            .write(n, &data, data.len(), MAX_FILE_SIZE as usize)
            .unwrap_err();
        assert_eq!(err, Error::TooLarge);
        assert_eq!(fs.stat(n), Some(0));
    }

    #[test]
    fn write_at_max_size_succeeds_one_more_byte_fails() {
        let (disk, _) = mounted(2000);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        let data = vec![0u8; MAX_FILE_SIZE as usize];
        assert_eq!(fs.write(n, &data, data.len(), 0).unwrap(), data.len());
        assert_eq!(
            fs.write(n, &[0u8], 1, MAX_FILE_SIZE as usize),
            Err(Error::TooLarge)
        );
    }

    #[test]
    fn write_exhausts_disk_and_persists_partial_progress() {
        let (disk, _) = mounted(30);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        let data = vec![0x7fu8; BLOCK_SIZE * 100];
        let k = fs.write(n, &data, data.len(), 0).unwrap();
        assert!(k > 0 && k < data.len());
        assert_eq!(fs.stat(n), Some(k as u32));
        // Pad past the final block boundary touched, per the read
        // overshoot contract.
        let mut out = vec![0u8; (k / BLOCK_SIZE + 1) * BLOCK_SIZE];
        assert_eq!(fs.read(n, &mut out, k, 0), k);
        assert_eq!(&out[..k], &data[..k]);
    }

    #[test]
    fn write_auto_creates_missing_inode() {
        let (disk, _) = mounted(200);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = InodeNumber::new(5);
        assert_eq!(fs.stat(n), None);
        assert_eq!(fs.write(n, b"hi", 2, 0).unwrap(), 2);
        assert_eq!(fs.stat(n), Some(2));
    }

    #[test]
    fn read_past_eof_returns_zero() {
        let (disk, _) = mounted(20);
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        fs.write(n, b"abc", 3, 0).unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(fs.read(n, &mut buf, 8, 3), 0);
    }

    #[test]
    fn stat_and_read_on_invalid_inode_are_not_errors() {
        let (disk, _) = mounted(20);
        let fs = SimpleFs::mount(&disk).unwrap();
        let n = InodeNumber::new(999);
        assert_eq!(fs.stat(n), None);
        let mut buf = [0u8; 4096];
        assert_eq!(fs.read(n, &mut buf, 10, 0), 0);
    }

    #[test]
    fn mount_rejects_bad_magic() {
        let disk = MemoryDisk::new(10);
        assert!(SimpleFs::format(&disk));
        let mut block = [0u8; BLOCK_SIZE];
        disk.read(0, &mut block);
        block[0] = 0x00;
        disk.write(0, &block);
        assert!(SimpleFs::mount(&disk).is_err());
        assert!(!disk.mounted());
    }

    #[test]
    fn mount_twice_is_rejected() {
        let disk = MemoryDisk::new(10);
        assert!(SimpleFs::format(&disk));
        let _fs = SimpleFs::mount(&disk).unwrap();
        assert_eq!(SimpleFs::mount(&disk), Err(Error::AlreadyMounted));
    }

    #[test]
    fn format_refuses_mounted_disk() {
        let disk = MemoryDisk::new(10);
        assert!(SimpleFs::format(&disk));
        let _fs = SimpleFs::mount(&disk).unwrap();
        assert!(!SimpleFs::format(&disk));
    }
}
