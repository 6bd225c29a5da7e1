//! Scanning an install root group by group
//!
//! Every directory directly under the root is a group (usually one package).
//! Each group is walked, its entries classified, and the matches reduced to
//! `GroupStats`. Directory sizes are memoized in a `SizeCache` owned by the
//! scan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, ScanError};
use crate::policy::PrunePolicy;
use crate::prune::PruneClassifier;
use crate::size::SizeCache;
use crate::stats::{GroupStats, aggregate};
use crate::tree::TreeWalker;

/// Scanner configuration
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub policy: PrunePolicy,
    /// Skip groups that hit a filesystem error instead of aborting the scan.
    pub keep_going: bool,
}

/// Stats for one top-level entry of the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub name: String,
    #[serde(flatten)]
    pub stats: GroupStats,
}

/// A group left out because scanning it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedGroup {
    pub name: String,
    pub reason: String,
}

/// Result of scanning one install root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub groups: Vec<GroupReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedGroup>,
}

impl ScanReport {
    /// Sum of all group stats.
    pub fn total(&self) -> GroupStats {
        self.groups.iter().map(|g| &g.stats).sum()
    }

    /// Groups with something to prune, in scan order.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &GroupReport> {
        self.groups.iter().filter(|g| !g.stats.is_empty())
    }
}

pub struct Scanner {
    config: ScanConfig,
    walker: TreeWalker,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            walker: TreeWalker::new(),
        }
    }

    /// Scan every group under `root`.
    ///
    /// Fails up front if `root` is missing or not a directory. A filesystem
    /// error inside a group aborts the scan unless `keep_going` is set.
    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        check_root(root)?;

        let mut sizes = SizeCache::new();
        let mut report = ScanReport {
            root: root.to_path_buf(),
            groups: Vec::new(),
            skipped: Vec::new(),
        };

        for (name, path) in list_groups(root)? {
            match self.scan_group(&path, &mut sizes) {
                Ok(stats) => {
                    debug!(group = %name, bytes = stats.bytes, dirs = stats.dirs, files = stats.files, "scanned");
                    report.groups.push(GroupReport { name, stats });
                }
                Err(e) if self.config.keep_going => {
                    warn!("skipping {}: {}", name, e);
                    report.skipped.push(SkippedGroup {
                        name,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            groups = report.groups.len(),
            skipped = report.skipped.len(),
            cached_sizes = sizes.len(),
            "scan of {} complete",
            root.display()
        );
        Ok(report)
    }

    /// Walk one group and total its prune matches.
    ///
    /// The group directory itself is never a candidate: a package called
    /// `test` or `docs` is still a package.
    pub fn scan_group(&self, group: &Path, sizes: &mut SizeCache) -> Result<GroupStats> {
        let mut entries = self.walker.walk(group)?;
        if entries.first().is_some_and(|e| e.path == group) {
            entries.remove(0);
        }

        let mut classifier = PruneClassifier::new(self.config.policy);
        let matches = classifier.select(entries);
        aggregate(&matches, sizes)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ScanError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(ScanError::filesystem(root, e)),
    }
}

/// Direct child directories of `root`, sorted by name.
///
/// Plain files at the top level are not packages and are skipped. A symlink
/// to a directory (an `npm link`ed package) is a group and is scanned at its
/// resolved location; a dangling one is skipped.
fn list_groups(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut groups = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ScanError::filesystem(root, e))? {
        let entry = entry.map_err(|e| ScanError::filesystem(root, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ScanError::filesystem(&path, e))?;
        let name = entry.file_name().to_string_lossy().to_string();

        if file_type.is_dir() {
            groups.push((name, path));
        } else if file_type.is_symlink() {
            if let Some(target) = resolve_linked_group(&path)? {
                debug!("following {} -> {}", path.display(), target.display());
                groups.push((name, target));
            }
        } else {
            debug!("not a group: {}", path.display());
        }
    }
    groups.sort();
    Ok(groups)
}

/// Target directory of a top-level symlink, or `None` if it is dangling or
/// points at something other than a directory.
fn resolve_linked_group(link: &Path) -> Result<Option<PathBuf>> {
    match fs::metadata(link) {
        Ok(meta) if meta.is_dir() => fs::canonicalize(link)
            .map(Some)
            .map_err(|e| ScanError::filesystem(link, e)),
        Ok(_) => {
            info!("skipping {}: link target is not a directory", link.display());
            Ok(None)
        }
        Err(e) => {
            info!("skipping {}: {}", link.display(), e);
            Ok(None)
        }
    }
}
