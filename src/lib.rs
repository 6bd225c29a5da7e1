//! Prunescan - measure how much of an install root is prunable junk
//!
//! Walks every package under a root such as `node_modules`, matches files and
//! directories against a prune policy, and totals what removing them would
//! free. Nothing is ever deleted.

pub mod error;
pub mod output;
pub mod policy;
pub mod prune;
pub mod scan;
pub mod size;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use output::{OutputConfig, Severity, format_bytes, print_json, print_report, write_report};
pub use policy::PrunePolicy;
pub use prune::PruneClassifier;
pub use scan::{GroupReport, ScanConfig, ScanReport, Scanner, SkippedGroup};
pub use size::SizeCache;
pub use stats::{GroupStats, aggregate};
pub use tree::{Entry, EntryKind, TreeWalker};
