//! Recursive listing of the backup directory.
//!
//! The walk visits the root first and then descends depth-first, siblings in
//! file-name order.  Symlinks are listed but never followed, not even when
//! the root itself is one.  Nothing is
//! filtered: hidden entries, directories, and files all show up.
//!
//! Any error aborts the whole walk.  Callers never see a partial list.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DotError;

/// Everything found under a root, with the root kept apart.
///
/// Consumers that only care about the contents use [`FileList::descendants`];
/// the root is never mixed into that slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    root: PathBuf,
    descendants: Vec<PathBuf>,
}

impl FileList {
    pub fn new(root: PathBuf, descendants: Vec<PathBuf>) -> Self {
        Self { root, descendants }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every entry below the root, in visitation order.
    pub fn descendants(&self) -> &[PathBuf] {
        &self.descendants
    }

    /// Number of visited entries, root included.
    pub fn entry_count(&self) -> usize {
        1 + self.descendants.len()
    }
}

/// Walk `root`, calling `visit` for every entry (root included) as it is
/// reached.
pub fn walk_with<F>(root: &Path, mut visit: F) -> Result<FileList, DotError>
where
    F: FnMut(&Path),
{
    let mut walked_root = None;
    let mut descendants = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| {
            let path = source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            DotError::Walk { path, source }
        })?;

        visit(entry.path());

        if entry.depth() == 0 {
            walked_root = Some(entry.into_path());
        } else {
            descendants.push(entry.into_path());
        }
    }

    let root = walked_root.unwrap_or_else(|| root.to_path_buf());
    Ok(FileList::new(root, descendants))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn walk(root: &Path) -> Result<FileList, DotError> {
        walk_with(root, |_| {})
    }

    /// `dots/a.txt`, `dots/sub/`, `dots/sub/b.txt`
    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), "b").unwrap();
        dir
    }

    #[test]
    fn root_comes_first_then_lexical_depth_first() {
        let dir = fixture();
        let root = dir.path();

        let files = walk(root).unwrap();
        assert_eq!(files.root(), root);
        assert_eq!(files.descendants(), &[
            root.join("a.txt"),
            root.join("sub"),
            root.join("sub").join("b.txt"),
        ]);
        assert_eq!(files.entry_count(), 4);
    }

    #[test]
    fn visitor_sees_every_entry_including_root() {
        let dir = fixture();
        let mut seen = Vec::new();

        let files = walk_with(dir.path(), |p| seen.push(p.to_path_buf())).unwrap();
        assert_eq!(seen.len(), files.entry_count());
        assert_eq!(seen[0], dir.path());
    }

    #[test]
    fn hidden_entries_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".bashrc"), "").unwrap();

        let files = walk(dir.path()).unwrap();
        assert_eq!(files.descendants(), &[dir.path().join(".bashrc")]);
    }

    #[test]
    fn empty_directory_has_no_descendants() {
        let dir = tempfile::tempdir().unwrap();
        let files = walk(dir.path()).unwrap();
        assert!(files.descendants().is_empty());
        assert_eq!(files.entry_count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_listed_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("inside.txt"), "").unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("link")).unwrap();

        let files = walk(dir.path()).unwrap();
        assert_eq!(files.descendants(), &[dir.path().join("link")]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_root_is_not_descended() {
        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("inside.txt"), "").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(target.path(), &link).unwrap();

        let files = walk(&link).unwrap();
        assert_eq!(files.root(), link);
        assert!(files.descendants().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_aborts_the_walk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = fixture();
        let locked = dir.path().join("sub");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Running as root bypasses permission checks.
        let enforced = fs::read_dir(&locked).is_err();
        let result = walk(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }

        match result {
            Err(DotError::Walk { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected a walk error, got {other:?}"),
        }
    }

    #[test]
    fn missing_root_is_a_walk_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = walk(&missing).unwrap_err();
        match err {
            DotError::Walk { path, .. } => assert_eq!(path, missing),
            other => panic!("expected a walk error, got {other:?}"),
        }
    }
}
