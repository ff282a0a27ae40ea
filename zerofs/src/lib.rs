//! Zero File System
//!
//! A read-only virtual file system with nothing in it but its own root
//! directory. Hand it to code that needs a file system when no real one is
//! configured: lookups fail cleanly with `NotFound`, the root lists no
//! entries, and there is no state to set up or tear down.
//!
//! # Capabilities
//! - [`FileSystem`]: open a name
//! - [`StatFs`], [`ReadDirFs`], [`ReadFileFs`]: optional extensions
//! - [`File`], [`FileInfo`], [`ReadDirFile`]: open handles and their metadata
//!
//! # Usage
//! ```rust
//! use zerofs::{FileInfo, FileSystem, ReadDirFs, ReadFileFs, ROOT};
//! use std::io;
//!
//! let fs = zerofs::empty_fs();
//! let root = fs.open(ROOT).unwrap();
//! assert_eq!(root.mode().to_string(), "dr-xr-xr-x");
//! assert!(fs.read_dir(ROOT).unwrap().is_empty());
//!
//! let err: io::Error = fs.read_file("config.toml").unwrap_err().into();
//! assert_eq!(err.kind(), io::ErrorKind::NotFound);
//! ```

mod dir_entry;
mod empty;
mod error;
mod logged;
mod mode;
mod r#trait;
pub mod walk;

pub use dir_entry::{DirBatch, DirEntry};
pub use empty::{EmptyFs, RootDir, ROOT, ROOT_MODE};
pub use error::{FsError, FsResult, Op};
pub use logged::{LoggedFs, LOG_TARGET};
pub use mode::FileMode;
pub use r#trait::{File, FileInfo, FileSystem, ReadDirFile, ReadDirFs, ReadFileFs, StatFs};
pub use walk::{collect_paths, walk_dir, WalkControl};

/// Create a new empty file system.
pub fn empty_fs() -> EmptyFs {
    EmptyFs::new()
}
