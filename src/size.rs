//! Memoized recursive size computation

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

/// Recursive byte sizes keyed by path.
///
/// A directory's size is its own metadata size plus the sizes of all of its
/// children. Symlinks are not followed; they count as their own link size.
/// Once a path has been measured it is never measured again, so a cache
/// should live no longer than a single scan.
#[derive(Debug, Default)]
pub struct SizeCache {
    sizes: HashMap<PathBuf, u64>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes under `path`, computing and caching on first request.
    pub fn size_of(&mut self, path: &Path) -> Result<u64> {
        if let Some(&size) = self.sizes.get(path) {
            return Ok(size);
        }

        let meta = fs::symlink_metadata(path).map_err(|e| ScanError::filesystem(path, e))?;
        let mut total = meta.len();

        if meta.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| ScanError::filesystem(path, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| ScanError::filesystem(path, e))?;
                total += self.size_of(&entry.path())?;
            }
        }

        self.sizes.insert(path.to_path_buf(), total);
        Ok(total)
    }

    /// Previously computed size, without touching the filesystem.
    pub fn get(&self, path: &Path) -> Option<u64> {
        self.sizes.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
