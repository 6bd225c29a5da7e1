//! Error types for scanning

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot access '{0}': No such file or directory")]
    RootNotFound(PathBuf),

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// A stat or directory listing failed while scanning.
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the report failed.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Wrap an `io::Error` raised while touching `path`.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
