//! Test harness for prunescan integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary project with a `node_modules` directory to scan.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("node_modules")).expect("Failed to create node_modules");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn modules(&self) -> PathBuf {
        self.dir.path().join("node_modules")
    }

    /// Write a file under `node_modules`, creating parent dirs.
    pub fn add_module_file(&self, path: &str, len: usize) -> PathBuf {
        let full_path = self.modules().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, "x".repeat(len)).expect("Failed to write file");
        full_path
    }

    /// Metadata size of a directory under `node_modules`.
    pub fn dir_meta(&self, path: &str) -> u64 {
        fs::symlink_metadata(self.modules().join(path))
            .expect("Failed to stat dir")
            .len()
    }
}

pub fn run_prunescan(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_prunescan");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run prunescan");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// The data row for `label`, if printed.
pub fn row<'a>(stdout: &'a str, label: &str) -> Option<&'a str> {
    stdout
        .lines()
        .find(|line| line.split_whitespace().next() == Some(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_node_modules() {
        let tree = TestTree::new();
        assert!(tree.modules().is_dir());
    }

    #[test]
    fn test_harness_add_module_file() {
        let tree = TestTree::new();
        let file_path = tree.add_module_file("pkg/index.js", 12);
        assert_eq!(fs::metadata(file_path).unwrap().len(), 12);
    }
}
