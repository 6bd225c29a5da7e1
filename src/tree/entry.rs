//! Entry descriptors produced by the tree walker

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::size::SizeCache;

/// What a walked node is, as seen by `symlink_metadata`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, fifos, devices.
    Other,
}

impl EntryKind {
    pub fn from_metadata(meta: &Metadata) -> Self {
        let file_type = meta.file_type();
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One filesystem node seen during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size of this node alone; for directories, the directory entry's own size.
    pub raw_size: u64,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, raw_size: u64) -> Self {
        Self {
            path: path.into(),
            kind,
            raw_size,
        }
    }

    pub fn from_metadata(path: impl Into<PathBuf>, meta: &Metadata) -> Self {
        Self::new(path, EntryKind::from_metadata(meta), meta.len())
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Basename of the entry, or "" for paths like `/` or `..`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes this entry would free: the full recursive size for directories.
    pub fn effective_size(&self, sizes: &mut SizeCache) -> Result<u64> {
        match self.kind {
            EntryKind::Directory => sizes.size_of(&self.path),
            EntryKind::File | EntryKind::Other => Ok(self.raw_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn test_entry_name() {
        let entry = Entry::new("node_modules/pkg/README.md", EntryKind::File, 10);
        assert_eq!(entry.name(), "README.md");
        assert!(entry.is_file());
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_effective_size_of_file_is_raw_size() {
        // No filesystem access is needed for files
        let entry = Entry::new("does/not/exist.js", EntryKind::File, 123);
        let mut sizes = SizeCache::new();
        assert_eq!(entry.effective_size(&mut sizes).unwrap(), 123);
        assert!(sizes.is_empty());
    }

    #[test]
    fn test_effective_size_of_directory_is_recursive() {
        let tree = TestTree::new();
        tree.add_sized_file("docs/a.md", 100);
        tree.add_sized_file("docs/api/b.md", 50);
        let docs = tree.path().join("docs");
        let meta = std::fs::symlink_metadata(&docs).unwrap();
        let entry = Entry::from_metadata(&docs, &meta);

        let mut sizes = SizeCache::new();
        let expected = tree.dir_meta("docs") + tree.dir_meta("docs/api") + 150;
        assert_eq!(entry.effective_size(&mut sizes).unwrap(), expected);
        assert_eq!(entry.raw_size, tree.dir_meta("docs"));
    }
}
