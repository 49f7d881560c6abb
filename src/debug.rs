//! Human-readable dump of a (possibly unmounted) disk's metadata, for
//! diagnosing images without going through `SimpleFs::mount`.

use crate::disk::Disk;
use crate::layout::{IndirectBlock, Inode, SuperBlock, BLOCK_SIZE, INODES_PER_BLOCK, MAGIC_NUMBER};
use std::io::{self, Write};

/// Writes a superblock summary and one section per live inode to `out`.
///
/// A bad magic number is reported and the dump stops there — this
/// mirrors a corrupt image, not a crate bug, so it returns `Ok(())`
/// rather than an `io::Error`.
pub fn dump<D: Disk, W: Write>(disk: &D, mut out: W) -> io::Result<()> {
    let mut block = [0u8; BLOCK_SIZE];
    disk.read(0, &mut block);
    let sb = SuperBlock::decode(&block);

    writeln!(out, "SuperBlock:")?;
    if sb.magic != MAGIC_NUMBER {
        writeln!(out, "    magic number is invalid")?;
        writeln!(out, "    exiting...")?;
        return Ok(());
    }
    writeln!(out, "    magic number is valid")?;
    writeln!(out, "    {} blocks", sb.blocks)?;
    writeln!(out, "    {} inode blocks", sb.inode_blocks)?;
    writeln!(out, "    {} inodes", sb.inodes)?;

    let mut inumber = 0u32;
    for i in 1..=sb.inode_blocks {
        disk.read(i, &mut block);
        for j in 0..INODES_PER_BLOCK {
            let inode = Inode::decode(&block, j as usize);
            let n = inumber;
            inumber += 1;
            if !inode.valid {
                continue;
            }
            dump_inode(disk, &mut out, n, &inode)?;
        }
    }
    Ok(())
}

fn dump_inode<D: Disk, W: Write>(disk: &D, out: &mut W, inumber: u32, inode: &Inode) -> io::Result<()> {
    writeln!(out, "Inode {inumber}:")?;
    writeln!(out, "    size: {} bytes", inode.size)?;
    write!(out, "    direct blocks:")?;
    for &d in inode.direct.iter() {
        if d != 0 {
            write!(out, " {d}")?;
        }
    }
    writeln!(out)?;

    if inode.indirect == 0 {
        return Ok(());
    }
    writeln!(out, "    indirect block: {}", inode.indirect)?;
    write!(out, "    indirect data blocks:")?;
    let mut ib = [0u8; BLOCK_SIZE];
    disk.read(inode.indirect, &mut ib);
    for &p in IndirectBlock::decode(&ib).pointers.iter() {
        if p != 0 {
            write!(out, " {p}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Convenience wrapper that dumps straight to stdout.
pub fn dump_to_stdout<D: Disk>(disk: &D) -> io::Result<()> {
    dump(disk, io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::MemoryDisk;
    use crate::fs::SimpleFs;

    #[test]
    fn dump_reports_bad_magic_without_panicking() {
        let disk = MemoryDisk::new(5);
        let mut out = Vec::new();
        dump(&disk, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("magic number is invalid"));
    }

    #[test]
    fn dump_lists_live_inodes_and_their_blocks() {
        let disk = MemoryDisk::new(200);
        assert!(SimpleFs::format(&disk));
        let mut fs = SimpleFs::mount(&disk).unwrap();
        let n = fs.create().unwrap();
        fs.write(n, b"hello", 5, 0).unwrap();

        let mut out = Vec::new();
        dump(&disk, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("magic number is valid"));
        assert!(text.contains(&format!("Inode {}:", n.as_u32())));
        assert!(text.contains("size: 5 bytes"));
        assert!(text.contains("direct blocks:"));
    }
}
