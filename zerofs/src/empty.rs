//! Empty file system implementation

use crate::dir_entry::{DirBatch, DirEntry};
use crate::error::{FsError, FsResult, Op};
use crate::mode::FileMode;
use crate::r#trait::{File, FileInfo, FileSystem, ReadDirFile, ReadDirFs, ReadFileFs, StatFs};
use std::any::Any;
use std::time::SystemTime;
use std::vec::Vec;

/// Name of the root directory, the only name an [`EmptyFs`] knows.
pub const ROOT: &str = ".";

/// Mode reported for the root: a directory, read and traverse for everyone.
pub const ROOT_MODE: FileMode = FileMode::from_bits(FileMode::DIR.bits() | 0o555);

/// A read-only file system containing nothing but its own root directory.
///
/// Useful wherever a file system is required but none is configured: every
/// lookup other than [`ROOT`] fails with `NotFound`, and the root lists no
/// entries.
///
/// # Example
/// ```
/// use zerofs::{EmptyFs, FileInfo, FileSystem, ReadDirFs, ROOT};
///
/// let fs = EmptyFs::new();
/// let root = fs.open(ROOT).unwrap();
/// assert!(root.is_dir());
/// assert!(fs.read_dir(ROOT).unwrap().is_empty());
/// assert!(fs.open("anything").unwrap_err().is_not_found());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyFs;

impl EmptyFs {
    /// Create a new empty file system.
    pub const fn new() -> Self {
        EmptyFs
    }

    fn check_root(name: &str) -> FsResult<()> {
        if name == ROOT {
            Ok(())
        } else {
            Err(FsError::not_found(Op::Open, name))
        }
    }
}

impl FileSystem for EmptyFs {
    type File = RootDir;

    fn open(&self, name: &str) -> FsResult<RootDir> {
        Self::check_root(name)?;
        Ok(RootDir)
    }
}

impl StatFs for EmptyFs {
    type Info = RootDir;

    fn stat(&self, name: &str) -> FsResult<RootDir> {
        Self::check_root(name)?;
        Ok(RootDir)
    }
}

impl ReadDirFs for EmptyFs {
    fn read_dir(&self, name: &str) -> FsResult<Vec<DirEntry>> {
        Self::check_root(name)?;
        Ok(Vec::new())
    }
}

impl ReadFileFs for EmptyFs {
    fn read_file(&self, name: &str) -> FsResult<Vec<u8>> {
        Self::check_root(name)?;
        Err(FsError::is_a_directory(Op::Read, name))
    }
}

/// Open handle to the root of an [`EmptyFs`].
///
/// Serves as its own metadata: `stat()` returns the handle itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RootDir;

impl File for RootDir {
    type Info = RootDir;

    fn stat(&self) -> FsResult<RootDir> {
        Ok(*self)
    }

    fn read(&mut self, _buf: &mut [u8]) -> FsResult<usize> {
        Err(FsError::is_a_directory(Op::Read, ROOT))
    }

    fn close(self) -> FsResult<()> {
        Ok(())
    }
}

impl FileInfo for RootDir {
    fn name(&self) -> &str {
        ROOT
    }

    fn size(&self) -> u64 {
        0
    }

    fn mode(&self) -> FileMode {
        ROOT_MODE
    }

    fn modified(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH
    }

    fn is_dir(&self) -> bool {
        true
    }

    fn sys(&self) -> Option<&dyn Any> {
        None
    }
}

impl ReadDirFile for RootDir {
    fn read_dir(&mut self, _count: isize) -> FsResult<DirBatch> {
        Ok(DirBatch::end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_fs<T: FileSystem + StatFs + ReadDirFs + ReadFileFs>() {}
    fn assert_handle<T: File + FileInfo + ReadDirFile>() {}
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_capabilities() {
        assert_fs::<EmptyFs>();
        assert_handle::<RootDir>();
        assert_send_sync::<EmptyFs>();
        assert_send_sync::<RootDir>();
    }

    #[test]
    fn test_open_root() {
        let fs = EmptyFs::new();
        let dir = fs.open(ROOT).unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir.size(), 0);
        assert_eq!(dir.name(), ".");
    }

    #[test]
    fn test_open_empty_name() {
        let fs = EmptyFs::new();
        let err = fs.open("").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), "");
    }

    #[test]
    fn test_root_aliases_are_not_found() {
        let fs = EmptyFs::new();
        for name in ["/", "./", "./.", "..", " .", ". "] {
            let err = fs.open(name).unwrap_err();
            assert!(matches!(err, FsError::NotFound { op: Op::Open, .. }), "{name:?}");
            assert_eq!(err.path(), name);
        }
    }

    #[test]
    fn test_root_mode() {
        let dir = RootDir;
        assert_eq!(dir.mode(), FileMode::DIR | 0o555);
        assert_eq!(dir.mode().perm(), 0o555);
        assert_eq!(dir.mode().to_string(), "dr-xr-xr-x");
    }

    #[test]
    fn test_root_metadata() {
        let dir = RootDir;
        assert_eq!(dir.modified(), SystemTime::UNIX_EPOCH);
        assert!(dir.sys().is_none());
        assert_eq!(dir.stat().unwrap(), dir);
    }

    #[test]
    fn test_read_is_a_directory() {
        let mut dir = RootDir;
        let mut buf = [0u8; 16];
        let err = dir.read(&mut buf).unwrap_err();
        assert_eq!(err, FsError::is_a_directory(Op::Read, ROOT));
        assert_eq!(buf, [0u8; 16]);

        let mut empty: [u8; 0] = [];
        assert!(dir.read(&mut empty).unwrap_err().is_dir_error());
    }

    #[test]
    fn test_read_dir_always_ends() {
        let mut dir = RootDir;
        for count in [-1, 0, 1, 100] {
            let batch = dir.read_dir(count).unwrap();
            assert!(batch.is_end());
            assert!(batch.entries().is_empty());
        }
    }

    #[test]
    fn test_close_twice() {
        let dir = RootDir;
        assert!(dir.close().is_ok());
        assert!(dir.close().is_ok());
    }

    #[test]
    fn test_read_file() {
        let fs = EmptyFs::new();
        let err = fs.read_file(ROOT).unwrap_err();
        assert!(matches!(err, FsError::IsADirectory { op: Op::Read, .. }));
        assert_eq!(err.path(), ROOT);

        let err = fs.read_file("file.txt").unwrap_err();
        assert!(matches!(err, FsError::NotFound { op: Op::Open, .. }));
        assert_eq!(err.path(), "file.txt");
    }

    #[test]
    fn test_stat() {
        let fs = EmptyFs::new();
        assert_eq!(fs.stat(ROOT).unwrap(), RootDir);
        assert_eq!(
            fs.stat("missing").unwrap_err(),
            FsError::not_found(Op::Open, "missing")
        );
    }

    #[test]
    fn test_instances_are_interchangeable() {
        let a = EmptyFs::new();
        let b = EmptyFs;
        assert_eq!(a, b);
        assert_eq!(a.read_dir(ROOT), b.read_dir(ROOT));
        assert_eq!(a.open("x"), b.open("x"));
    }

    #[test]
    fn test_concurrent_access() {
        let fs = EmptyFs::new();
        let mut handles = vec![];

        for i in 0..8 {
            handles.push(thread::spawn(move || {
                let missing = format!("file{}", i);
                for _ in 0..100 {
                    assert!(fs.open(ROOT).unwrap().is_dir());
                    assert!(fs.read_dir(ROOT).unwrap().is_empty());
                    assert_eq!(fs.open(&missing).unwrap_err().path(), missing);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
