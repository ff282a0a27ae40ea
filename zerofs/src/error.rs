//! VFS Error Types

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for VFS operations
pub type FsResult<T> = Result<T, FsError>;

/// The operation that produced an [`FsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Resolving a name to an entry (`open`, `stat`, `read_dir`, `read_file`)
    Open,
    /// Reading bytes out of an entry
    Read,
}

impl Op {
    /// Get the string name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Open => "open",
            Op::Read => "read",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for VFS operations
///
/// Every failure names the operation and the path it was given. The cause is
/// one of two kinds; [`FsError::kind`] maps it onto [`io::ErrorKind`] so callers
/// can classify it the same way they classify errors from `std::fs`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// File or directory not found
    #[error("{op} {path}: file does not exist")]
    NotFound { op: Op, path: String },

    /// Directory read as if it were a file
    #[error("{op} {path}: is a directory")]
    IsADirectory { op: Op, path: String },
}

impl FsError {
    pub fn not_found(op: Op, path: impl Into<String>) -> Self {
        FsError::NotFound {
            op,
            path: path.into(),
        }
    }

    pub fn is_a_directory(op: Op, path: impl Into<String>) -> Self {
        FsError::IsADirectory {
            op,
            path: path.into(),
        }
    }

    /// The operation that failed
    pub fn op(&self) -> Op {
        match self {
            FsError::NotFound { op, .. } | FsError::IsADirectory { op, .. } => *op,
        }
    }

    /// The path the failing operation was given
    pub fn path(&self) -> &str {
        match self {
            FsError::NotFound { path, .. } | FsError::IsADirectory { path, .. } => path,
        }
    }

    /// Classify this error as a standard I/O error kind
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FsError::NotFound { .. } => io::ErrorKind::NotFound,
            FsError::IsADirectory { .. } => io::ErrorKind::IsADirectory,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }

    pub fn is_dir_error(&self) -> bool {
        matches!(self, FsError::IsADirectory { .. })
    }
}

impl From<FsError> for io::Error {
    fn from(err: FsError) -> Self {
        io::Error::new(err.kind(), err)
    }
}
