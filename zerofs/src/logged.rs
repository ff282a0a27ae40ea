//! Logging wrapper for file system operations

use crate::dir_entry::DirEntry;
use crate::error::FsResult;
use crate::r#trait::{FileSystem, ReadDirFs, ReadFileFs, StatFs};
use std::vec::Vec;
use tracing::debug;

/// Log target for every event emitted by [`LoggedFs`].
pub const LOG_TARGET: &str = "zerofs::vfs";

/// Wraps a file system and traces every call made through it.
///
/// Results are returned unchanged; the wrapper implements exactly the
/// capabilities the inner file system does.
///
/// # Example
/// ```
/// use zerofs::{EmptyFs, FileSystem, LoggedFs, ROOT};
///
/// let fs = LoggedFs::new(EmptyFs::new());
/// assert!(fs.open(ROOT).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggedFs<F> {
    inner: F,
}

impl<F> LoggedFs<F> {
    /// Wrap `inner`
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

fn traced<T>(op: &'static str, name: &str, result: FsResult<T>) -> FsResult<T> {
    if let Err(e) = &result {
        debug!(target: LOG_TARGET, op, path = name, error = %e, "failed");
    }
    result
}

impl<F: FileSystem> FileSystem for LoggedFs<F> {
    type File = F::File;

    fn open(&self, name: &str) -> FsResult<F::File> {
        debug!(target: LOG_TARGET, op = "open", path = name);
        traced("open", name, self.inner.open(name))
    }
}

impl<F: StatFs> StatFs for LoggedFs<F> {
    type Info = F::Info;

    fn stat(&self, name: &str) -> FsResult<F::Info> {
        debug!(target: LOG_TARGET, op = "stat", path = name);
        traced("stat", name, self.inner.stat(name))
    }
}

impl<F: ReadDirFs> ReadDirFs for LoggedFs<F> {
    fn read_dir(&self, name: &str) -> FsResult<Vec<DirEntry>> {
        debug!(target: LOG_TARGET, op = "read_dir", path = name);
        let result = self.inner.read_dir(name);
        if let Ok(entries) = &result {
            debug!(target: LOG_TARGET, op = "read_dir", path = name, count = entries.len(), "ok");
        }
        traced("read_dir", name, result)
    }
}

impl<F: ReadFileFs> ReadFileFs for LoggedFs<F> {
    fn read_file(&self, name: &str) -> FsResult<Vec<u8>> {
        debug!(target: LOG_TARGET, op = "read_file", path = name);
        let result = self.inner.read_file(name);
        if let Ok(content) = &result {
            debug!(target: LOG_TARGET, op = "read_file", path = name, bytes = content.len(), "ok");
        }
        traced("read_file", name, result)
    }
}
