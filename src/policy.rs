//! Prune policy: which names count as junk inside an installed package
//!
//! The policy is three flat lists checked by exact, case-sensitive membership.
//! The built-in lists cover build configs, CI manifests, license and metadata
//! files, test and documentation directories, and source/doc extensions that
//! are not needed at runtime.

use std::path::Path;

/// Files that packages ship but never need at runtime.
pub const DEFAULT_FILES: &[&str] = &[
    "Makefile",
    "Gulpfile.js",
    "Gruntfile.js",
    ".DS_Store",
    ".tern-project",
    ".gitattributes",
    ".editorconfig",
    ".eslintrc",
    ".eslintrc.js",
    ".eslintignore",
    ".npmignore",
    ".jshintrc",
    ".flowconfig",
    ".documentup.json",
    ".yarn-metadata.json",
    ".travis.yml",
    "appveyor.yml",
    "circle.yml",
    ".coveralls.yml",
    "CHANGES",
    "LICENSE.txt",
    "LICENSE",
    "AUTHORS",
    "CONTRIBUTORS",
    ".yarn-integrity",
    ".yarnclean",
];

/// Directory names whose whole subtree is prunable.
pub const DEFAULT_DIRS: &[&str] = &[
    "__tests__",
    "test",
    "tests",
    "powered-test",
    "docs",
    "doc",
    ".idea",
    ".vscode",
    "website",
    "images",
    "assets",
    "example",
    "examples",
    "coverage",
    ".nyc_output",
    ".circleci",
    ".github",
];

/// Extensions (with the leading dot) of files that are prunable anywhere.
pub const DEFAULT_EXTS: &[&str] = &[".md", ".ts", ".jst", ".jsx", ".coffee", ".tgz", ".swp"];

/// Static membership lists deciding what is prunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrunePolicy {
    files: &'static [&'static str],
    dirs: &'static [&'static str],
    exts: &'static [&'static str],
}

impl PrunePolicy {
    pub fn new(
        files: &'static [&'static str],
        dirs: &'static [&'static str],
        exts: &'static [&'static str],
    ) -> Self {
        Self { files, dirs, exts }
    }

    /// Exact basename match against the junk file list.
    pub fn is_junk_file(&self, name: &str) -> bool {
        self.files.contains(&name)
    }

    /// Exact basename match against the junk directory list.
    pub fn is_junk_dir(&self, name: &str) -> bool {
        self.dirs.contains(&name)
    }

    /// Match the final extension of `path`, dot included.
    ///
    /// Dotfiles like `.eslintrc` have no extension and never match.
    pub fn is_junk_ext(&self, path: impl AsRef<Path>) -> bool {
        let Some(ext) = path.as_ref().extension() else {
            return false;
        };
        self.exts
            .iter()
            .filter_map(|junk| junk.strip_prefix('.'))
            .any(|junk| ext == junk)
    }
}

impl Default for PrunePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FILES, DEFAULT_DIRS, DEFAULT_EXTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junk_files() {
        let policy = PrunePolicy::default();
        assert!(policy.is_junk_file("LICENSE"));
        assert!(policy.is_junk_file(".npmignore"));
        assert!(policy.is_junk_file("Makefile"));
        assert!(!policy.is_junk_file("package.json"));
        assert!(!policy.is_junk_file("index.js"));
        // Exact match only
        assert!(!policy.is_junk_file("license"));
        assert!(!policy.is_junk_file("LICENSE.md"));
    }

    #[test]
    fn test_junk_dirs() {
        let policy = PrunePolicy::default();
        assert!(policy.is_junk_dir("test"));
        assert!(policy.is_junk_dir("__tests__"));
        assert!(policy.is_junk_dir(".github"));
        assert!(!policy.is_junk_dir("lib"));
        assert!(!policy.is_junk_dir("src"));
        assert!(!policy.is_junk_dir("test-utils"));
        assert!(!policy.is_junk_dir("Test"));
    }

    #[test]
    fn test_junk_extensions() {
        let policy = PrunePolicy::default();
        assert!(policy.is_junk_ext("README.md"));
        assert!(policy.is_junk_ext("node_modules/pkg/index.d.ts"));
        assert!(policy.is_junk_ext("Component.jsx"));
        assert!(policy.is_junk_ext(".index.js.swp"));
        assert!(!policy.is_junk_ext("index.js"));
        assert!(!policy.is_junk_ext("README"));
        // Case-sensitive
        assert!(!policy.is_junk_ext("README.MD"));
        // Leading-dot names have no extension
        assert!(!policy.is_junk_ext(".md"));
        // A trailing dot is an empty extension, not a bare "."
        assert!(!policy.is_junk_ext("README."));
    }

    #[test]
    fn test_extension_entries_need_a_leading_dot() {
        const EXTS: &[&str] = &["md", ".map", "."];
        let policy = PrunePolicy::new(&[], &[], EXTS);

        assert!(!policy.is_junk_ext("README.md"));
        assert!(policy.is_junk_ext("index.js.map"));
        // "." names the empty extension
        assert!(policy.is_junk_ext("README."));
    }

    #[test]
    fn test_custom_policy() {
        const FILES: &[&str] = &["junk.txt"];
        const DIRS: &[&str] = &["fixtures"];
        const EXTS: &[&str] = &[".map"];
        let policy = PrunePolicy::new(FILES, DIRS, EXTS);

        assert!(policy.is_junk_file("junk.txt"));
        assert!(!policy.is_junk_file("LICENSE"));
        assert!(policy.is_junk_dir("fixtures"));
        assert!(!policy.is_junk_dir("test"));
        assert!(policy.is_junk_ext("index.js.map"));
        assert!(!policy.is_junk_ext("README.md"));
    }
}
