//! TreeWalker - flattens a directory subtree into entry descriptors

use std::fs;
use std::path::Path;

use tracing::trace;

use super::entry::{Entry, EntryKind};
use crate::error::{Result, ScanError};

/// Eager, depth-first walker over a single subtree.
///
/// The returned sequence is in pre-order: the root comes first and every
/// directory appears before anything beneath it. Prune classification relies
/// on this to register a directory before its contents are looked at.
///
/// Nodes that are neither files nor directories (symlinks included) are left
/// out. Children are visited in file-name order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` and everything below it.
    ///
    /// Any stat or listing failure aborts the walk.
    pub fn walk(&self, root: &Path) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let meta = fs::symlink_metadata(root).map_err(|e| ScanError::filesystem(root, e))?;
        let entry = Entry::from_metadata(root, &meta);
        if entry.kind != EntryKind::Other {
            self.walk_entry(entry, &mut entries)?;
        }
        Ok(entries)
    }

    fn walk_entry(&self, entry: Entry, out: &mut Vec<Entry>) -> Result<()> {
        let descend = entry.is_dir();
        let path = entry.path.clone();
        out.push(entry);

        if !descend {
            return Ok(());
        }

        for child in read_sorted_children(&path)? {
            if child.kind == EntryKind::Other {
                trace!("skipping {}", child.path.display());
                continue;
            }
            self.walk_entry(child, out)?;
        }

        Ok(())
    }
}

/// Stat every direct child of `dir`, sorted by file name.
fn read_sorted_children(dir: &Path) -> Result<Vec<Entry>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::filesystem(dir, e))? {
        let entry = entry.map_err(|e| ScanError::filesystem(dir, e))?;
        names.push(entry.file_name());
    }
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let path = dir.join(name);
            let meta = fs::symlink_metadata(&path).map_err(|e| ScanError::filesystem(&path, e))?;
            Ok(Entry::from_metadata(path, &meta))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use std::path::PathBuf;

    fn relative(tree: &TestTree, entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| {
                e.path
                    .strip_prefix(tree.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_walk_is_preorder_and_sorted() {
        let tree = TestTree::new();
        tree.add_file("pkg/b.js", "b");
        tree.add_file("pkg/a/z.js", "z");
        tree.add_file("pkg/a/inner/y.js", "y");
        tree.add_file("pkg/c/x.js", "x");

        let entries = TreeWalker::default().walk(&tree.path().join("pkg")).unwrap();
        assert_eq!(
            relative(&tree, &entries),
            vec![
                "pkg",
                "pkg/a",
                "pkg/a/inner",
                "pkg/a/inner/y.js",
                "pkg/a/z.js",
                "pkg/b.js",
                "pkg/c",
                "pkg/c/x.js",
            ]
        );
        assert!(entries[0].is_dir());
        assert!(entries[5].is_file());
    }

    #[test]
    fn test_every_parent_precedes_its_descendants() {
        // Synthetic tree wide and deep enough to shake out ordering bugs
        let tree = TestTree::new();
        for i in 0..4 {
            for j in 0..3 {
                tree.add_file(&format!("root/d{i}/e{j}/f.txt"), "f");
                tree.add_file(&format!("root/d{i}/e{j}/g/h/leaf.md"), "leaf");
            }
            tree.add_file(&format!("root/d{i}/top.js"), "top");
        }
        tree.add_dir("root/empty/nested");

        let entries = TreeWalker::default().walk(&tree.path().join("root")).unwrap();
        let position = |p: &Path| entries.iter().position(|e| e.path == p);

        assert_eq!(entries[0].path, tree.path().join("root"));
        for (index, entry) in entries.iter().enumerate().skip(1) {
            let mut ancestor: Option<&Path> = entry.path.parent();
            while let Some(dir) = ancestor {
                if let Some(dir_index) = position(dir) {
                    assert!(
                        dir_index < index,
                        "{} appears after its descendant {}",
                        dir.display(),
                        entry.path.display()
                    );
                }
                ancestor = dir.parent();
            }
        }
        assert_eq!(entries.len(), 1 + 4 * (1 + 3 * 5 + 1) + 2);
    }

    #[test]
    fn test_walk_file_root() {
        let tree = TestTree::new();
        let file = tree.add_file("lone.js", "1");
        let entries = TreeWalker::default().walk(&file).unwrap();
        assert_eq!(entries, vec![Entry::new(file, EntryKind::File, 1)]);
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let tree = TestTree::new();
        let missing: PathBuf = tree.path().join("missing");
        assert!(matches!(
            TreeWalker::default().walk(&missing),
            Err(ScanError::Filesystem { .. })
        ));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_are_excluded() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("pkg/real.js", "r");
        symlink(tree.path().join("pkg"), tree.path().join("pkg/loop")).unwrap();
        symlink("nowhere", tree.path().join("pkg/broken")).unwrap();

        let entries = TreeWalker::default().walk(&tree.path().join("pkg")).unwrap();
        assert_eq!(relative(&tree, &entries), vec!["pkg", "pkg/real.js"]);
    }
}
