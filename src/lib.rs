//! A userspace implementation of a small Unix-v6-style inode file system
//! over a fixed-size array of disk blocks.
//!
//! A [`Disk`] provides `BLOCK_SIZE`-byte storage; [`SimpleFs::format`]
//! lays down a fresh superblock and [`SimpleFs::mount`] validates it and
//! reconstructs the in-memory free-block bitmap, after which
//! [`SimpleFs::create`], [`remove`](SimpleFs::remove),
//! [`stat`](SimpleFs::stat), [`read`](SimpleFs::read) and
//! [`write`](SimpleFs::write) operate on individual inodes by number.

pub mod debug;
pub mod disk;
pub mod error;
pub mod fs;
pub mod layout;

pub use disk::{Disk, MemoryDisk};
pub use error::Error;
pub use fs::{InodeNumber, SimpleFs};
pub use layout::{BLOCK_SIZE, INODES_PER_BLOCK, MAGIC_NUMBER, MAX_FILE_SIZE, POINTERS_PER_BLOCK, POINTERS_PER_INODE};
