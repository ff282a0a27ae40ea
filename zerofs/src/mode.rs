//! File mode bits

use std::fmt;
use std::ops::BitOr;

/// Type and permission bits of a file system entry.
///
/// The low nine bits are Unix permissions (`0o777`); the high bits carry the
/// entry type. A mode with no type bits set is a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory type bit
    pub const DIR: FileMode = FileMode(1 << 31);
    /// Mask of the permission bits
    pub const PERM: u32 = 0o777;
    /// Mask of the type bits
    pub const TYPE: u32 = Self::DIR.0;

    pub const fn from_bits(bits: u32) -> Self {
        FileMode(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_dir(self) -> bool {
        self.0 & Self::DIR.0 != 0
    }

    pub const fn is_regular(self) -> bool {
        self.0 & Self::TYPE == 0
    }

    /// Permission bits only
    pub const fn perm(self) -> u32 {
        self.0 & Self::PERM
    }

    /// Type bits only
    pub const fn file_type(self) -> FileMode {
        FileMode(self.0 & Self::TYPE)
    }
}

impl BitOr for FileMode {
    type Output = FileMode;

    fn bitor(self, rhs: FileMode) -> FileMode {
        FileMode(self.0 | rhs.0)
    }
}

impl BitOr<u32> for FileMode {
    type Output = FileMode;

    fn bitor(self, rhs: u32) -> FileMode {
        FileMode(self.0 | rhs)
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        FileMode(bits)
    }
}

/// Renders in `ls -l` style, e.g. `dr-xr-xr-x`.
impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(10);
        out.push(if self.is_dir() { 'd' } else { '-' });
        for shift in [6u32, 3, 0] {
            let triple = (self.0 >> shift) & 0o7;
            out.push(if triple & 0o4 != 0 { 'r' } else { '-' });
            out.push(if triple & 0o2 != 0 { 'w' } else { '-' });
            out.push(if triple & 0o1 != 0 { 'x' } else { '-' });
        }
        f.write_str(&out)
    }
}
