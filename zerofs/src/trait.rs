//! File system capability traits
//!
//! A file system is anything that can [`open`](FileSystem::open) a name. The
//! other capabilities are optional extensions layered on top, so consumers
//! can ask for exactly what they use:
//!
//! - [`StatFs`]: metadata for a name without opening it
//! - [`ReadDirFs`]: list a directory by name
//! - [`ReadFileFs`]: read a whole file by name
//!
//! Opened handles follow the same split: [`File`] for the handle itself,
//! [`FileInfo`] for the metadata it describes, [`ReadDirFile`] for handles
//! that can list directory entries.

use crate::dir_entry::{DirBatch, DirEntry};
use crate::error::FsResult;
use crate::mode::FileMode;
use std::any::Any;
use std::time::SystemTime;
use std::vec::Vec;

/// Core file system trait
///
/// Names are slash-separated and unrooted; `"."` names the root.
pub trait FileSystem: Send + Sync {
    /// Handle type returned by `open`
    type File: File;

    /// Open the named file or directory
    ///
    /// # Returns
    /// An open handle, or `FsError::NotFound` if nothing has that name
    fn open(&self, name: &str) -> FsResult<Self::File>;
}

/// File systems that can describe a name without opening it
pub trait StatFs: FileSystem {
    /// Metadata type returned by `stat`
    type Info: FileInfo;

    /// Get metadata for the named file or directory
    fn stat(&self, name: &str) -> FsResult<Self::Info>;
}

/// File systems that can list a directory by name
pub trait ReadDirFs: FileSystem {
    /// Read the named directory
    ///
    /// # Returns
    /// Entries sorted by name
    fn read_dir(&self, name: &str) -> FsResult<Vec<DirEntry>>;
}

/// File systems that can read a whole file by name
pub trait ReadFileFs: FileSystem {
    /// Read the named file
    ///
    /// # Returns
    /// File contents as bytes, `FsError::NotFound` for unknown names, or
    /// `FsError::IsADirectory` if the name is a directory
    fn read_file(&self, name: &str) -> FsResult<Vec<u8>>;
}

/// An open file or directory
pub trait File {
    /// Metadata type returned by `stat`
    type Info: FileInfo;

    /// Get metadata for this handle
    fn stat(&self) -> FsResult<Self::Info>;

    /// Read up to `buf.len()` bytes
    ///
    /// # Returns
    /// Number of bytes read; 0 at end of file
    fn read(&mut self, buf: &mut [u8]) -> FsResult<usize>;

    /// Close the handle
    fn close(self) -> FsResult<()>
    where
        Self: Sized;
}

/// Metadata describing a file or directory
pub trait FileInfo {
    /// Base name of the entry
    fn name(&self) -> &str;

    /// Size in bytes (0 for directories)
    fn size(&self) -> u64;

    /// Type and permission bits
    fn mode(&self) -> FileMode;

    /// Last modification time
    fn modified(&self) -> SystemTime;

    /// Returns true if this is a directory
    fn is_dir(&self) -> bool {
        self.mode().is_dir()
    }

    /// Backend-specific data, `None` when there is no underlying OS object
    fn sys(&self) -> Option<&dyn Any>;
}

/// An open directory that can list its entries
pub trait ReadDirFile: File {
    /// Read the next batch of entries
    ///
    /// With `count > 0` at most `count` entries are returned. With
    /// `count <= 0` all remaining entries are returned. When nothing is left
    /// the batch is empty and `is_end()` is true.
    fn read_dir(&mut self, count: isize) -> FsResult<DirBatch>;
}
