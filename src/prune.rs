//! Prune classification with ancestor dedup
//!
//! A matched directory is reported with its full recursive size, so files
//! beneath it are not reported again. The classifier remembers matched
//! directories and treats files under them as already covered. Directories
//! are judged on their name alone. Entries must be fed in walk order
//! (directories before their contents).

use std::path::{Path, PathBuf};

use crate::policy::PrunePolicy;
use crate::tree::{Entry, EntryKind};

#[derive(Debug, Clone, Default)]
pub struct PruneClassifier {
    policy: PrunePolicy,
    pruned_dirs: Vec<PathBuf>,
}

impl PruneClassifier {
    pub fn new(policy: PrunePolicy) -> Self {
        Self {
            policy,
            pruned_dirs: Vec::new(),
        }
    }

    /// Whether `entry` is an independent prune match. Does not record anything.
    pub fn classify(&self, entry: &Entry) -> bool {
        match entry.kind {
            // Nested junk dirs match on their own, even under a matched dir
            EntryKind::Directory => self.policy.is_junk_dir(&entry.name()),
            EntryKind::File => {
                !self.is_covered(&entry.path)
                    && (self.policy.is_junk_file(&entry.name())
                        || self.policy.is_junk_ext(&entry.path))
            }
            EntryKind::Other => self.policy.is_junk_ext(&entry.path),
        }
    }

    /// Record a matched directory so its descendants count as covered.
    pub fn register_pruned(&mut self, path: impl Into<PathBuf>) {
        self.pruned_dirs.push(path.into());
    }

    /// True if `path` lies strictly under a registered directory.
    pub fn is_covered(&self, path: &Path) -> bool {
        self.pruned_dirs
            .iter()
            .any(|dir| path != dir && path.starts_with(dir))
    }

    /// Classify and, for a matched directory, register it.
    pub fn should_prune(&mut self, entry: &Entry) -> bool {
        let matched = self.classify(entry);
        if matched && entry.is_dir() {
            self.register_pruned(&entry.path);
        }
        matched
    }

    /// Directories registered so far, in match order.
    pub fn pruned_dirs(&self) -> &[PathBuf] {
        &self.pruned_dirs
    }

    /// Keep the matching entries of a pre-order walk.
    pub fn select(&mut self, entries: Vec<Entry>) -> Vec<Entry> {
        entries
            .into_iter()
            .filter(|entry| self.should_prune(entry))
            .collect()
    }
}
