//! Error kinds surfaced by the fallible core operations.
//!
//! Several failure modes described by the system (an invalid inode, a
//! short read, allocator exhaustion mid-write) are not errors in this
//! crate's API: they are data outcomes (`None`, a short byte count,
//! `false`) returned from the ordinary success path, matching "no error
//! is propagated as an exception" from the system's error handling
//! design. `Error` only carries the kinds that are true failures.

/// Failure kinds returned by `SimpleFs::mount` and `SimpleFs::write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `format`/`mount` attempted against a `Disk` that is already mounted.
    #[error("disk is already mounted")]
    AlreadyMounted,
    /// The superblock's magic number, or its derived inode-block/inode
    /// counts, do not match what `mount` expects.
    #[error("superblock is invalid or inconsistent")]
    BadSuperblock,
    /// A block number stored in an inode or indirect block at mount time
    /// points outside the data region.
    #[error("a stored block pointer is out of range")]
    CorruptPointer,
    /// `write`'s `offset + length` exceeds the maximum addressable file
    /// size.
    #[error("write would exceed the maximum file size")]
    TooLarge,
}
