//! Recursive directory walking over any file system

use crate::dir_entry::DirEntry;
use crate::error::FsResult;
use crate::r#trait::{ReadDirFs, StatFs};
use std::string::String;
use std::vec::Vec;

/// What the walk should do after a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkControl {
    #[default]
    Continue,
    /// Do not descend into the directory just visited
    SkipDir,
    /// End the whole walk without error
    Stop,
}

/// Join a directory path and an entry name.
///
/// Children of the root are named bare: `join(".", "a")` is `"a"`.
pub fn join(dir: &str, name: &str) -> String {
    if dir == crate::empty::ROOT {
        name.to_string()
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}

/// Walk the tree rooted at `root`, calling `visit` for each entry.
///
/// `root` itself is visited first. Directories are read with
/// [`ReadDirFs::read_dir`] and their entries visited in the order returned
/// (sorted by name). An error from the file system or from `visit` ends the
/// walk and is returned.
pub fn walk_dir<F, V>(fsys: &F, root: &str, mut visit: V) -> FsResult<()>
where
    F: StatFs + ReadDirFs,
    V: FnMut(&str, &DirEntry) -> FsResult<WalkControl>,
{
    let info = fsys.stat(root)?;
    let entry = DirEntry::from_info(&info);
    walk_entry(fsys, root, &entry, &mut visit)?;
    Ok(())
}

/// Returns false once the walk has been stopped.
fn walk_entry<F, V>(fsys: &F, path: &str, entry: &DirEntry, visit: &mut V) -> FsResult<bool>
where
    F: StatFs + ReadDirFs,
    V: FnMut(&str, &DirEntry) -> FsResult<WalkControl>,
{
    match visit(path, entry)? {
        WalkControl::Stop => return Ok(false),
        WalkControl::SkipDir => return Ok(true),
        WalkControl::Continue => {}
    }
    if !entry.is_dir() {
        return Ok(true);
    }

    for child in fsys.read_dir(path)? {
        let child_path = join(path, &child.name);
        if !walk_entry(fsys, &child_path, &child, visit)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Collect every path under `root`, `root` included, in walk order.
pub fn collect_paths<F>(fsys: &F, root: &str) -> FsResult<Vec<String>>
where
    F: StatFs + ReadDirFs,
{
    let mut paths = Vec::new();
    walk_dir(fsys, root, |path, _| {
        paths.push(path.to_string());
        Ok(WalkControl::Continue)
    })?;
    Ok(paths)
}
