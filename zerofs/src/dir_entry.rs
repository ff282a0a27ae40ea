//! Directory entry types

use crate::mode::FileMode;
use crate::r#trait::FileInfo;

/// A directory entry returned by `read_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name of the entry (not full path).
    pub name: String,
    /// Type and permission bits.
    pub mode: FileMode,
}

impl DirEntry {
    /// Create a new directory entry.
    pub fn new(name: impl Into<String>, mode: FileMode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }

    /// Build an entry describing the same file as `info`.
    pub fn from_info<I: FileInfo + ?Sized>(info: &I) -> Self {
        Self::new(info.name(), info.mode())
    }

    /// Returns true if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    /// Type bits of the entry, permissions cleared.
    pub fn file_type(&self) -> FileMode {
        self.mode.file_type()
    }
}

/// One batch of entries read from an open directory handle.
///
/// `is_end()` reports that the handle has no entries beyond this batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirBatch {
    entries: Vec<DirEntry>,
    end: bool,
}

impl DirBatch {
    /// A batch with more entries possibly following.
    pub fn new(entries: Vec<DirEntry>) -> Self {
        Self {
            entries,
            end: false,
        }
    }

    /// The final batch: no entries, end of sequence.
    pub fn end() -> Self {
        Self {
            entries: Vec::new(),
            end: true,
        }
    }

    pub fn is_end(&self) -> bool {
        self.end
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DirEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kinds() {
        let dir = DirEntry::new("src", FileMode::DIR | 0o755);
        assert!(dir.is_dir());
        assert_eq!(dir.file_type(), FileMode::DIR);

        let file = DirEntry::new("main.rs", FileMode::from_bits(0o644));
        assert!(!file.is_dir());
        assert_eq!(file.file_type(), FileMode::default());
    }

    #[test]
    fn test_end_batch() {
        let batch = DirBatch::end();
        assert!(batch.is_end());
        assert!(batch.entries().is_empty());
        assert!(batch.into_entries().is_empty());
    }

    #[test]
    fn test_partial_batch() {
        let batch = DirBatch::new(vec![DirEntry::new("a", FileMode::default())]);
        assert!(!batch.is_end());
        assert_eq!(batch.entries().len(), 1);
        assert_eq!(batch.entries()[0].name, "a");
    }
}
