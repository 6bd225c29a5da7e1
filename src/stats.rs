//! Aggregate statistics over prune matches
//!
//! Turns the matched entries of one group into byte, directory and file
//! totals. Group totals add up into the grand total.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::error::Result;
use crate::size::SizeCache;
use crate::tree::{Entry, EntryKind};

/// Totals for one group of prune matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    /// Bytes that pruning would free
    pub bytes: u64,
    /// Number of matched directories
    pub dirs: usize,
    /// Number of matched files
    pub files: usize,
}

impl GroupStats {
    pub fn new(bytes: u64, dirs: usize, files: usize) -> Self {
        Self { bytes, dirs, files }
    }

    /// Groups with nothing to free are not worth reporting.
    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// Record a single match of known effective size.
    pub fn record(&mut self, kind: EntryKind, bytes: u64) {
        self.bytes += bytes;
        match kind {
            EntryKind::Directory => self.dirs += 1,
            EntryKind::File => self.files += 1,
            EntryKind::Other => {}
        }
    }
}

impl Add for GroupStats {
    type Output = GroupStats;

    fn add(self, other: GroupStats) -> GroupStats {
        GroupStats {
            bytes: self.bytes + other.bytes,
            dirs: self.dirs + other.dirs,
            files: self.files + other.files,
        }
    }
}

impl AddAssign for GroupStats {
    fn add_assign(&mut self, other: GroupStats) {
        *self = *self + other;
    }
}

impl Sum for GroupStats {
    fn sum<I: Iterator<Item = GroupStats>>(iter: I) -> Self {
        iter.fold(GroupStats::default(), Add::add)
    }
}

impl<'a> Sum<&'a GroupStats> for GroupStats {
    fn sum<I: Iterator<Item = &'a GroupStats>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Reduce matched entries to totals. Directories contribute their full
/// recursive size, looked up through `sizes`.
pub fn aggregate(matches: &[Entry], sizes: &mut SizeCache) -> Result<GroupStats> {
    let mut stats = GroupStats::default();
    for entry in matches {
        let bytes = entry.effective_size(sizes)?;
        stats.record(entry.kind, bytes);
    }
    Ok(stats)
}
