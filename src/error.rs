//! Error types for directory walking and report generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a walk.
///
/// Recoverable conditions (an unreadable directory, a file that vanished
/// before its metadata could be read) are not errors; they are recorded as
/// [`WalkWarning`](crate::walk::WalkWarning)s and the walk continues.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Root path does not exist.
    #[error("No such file or directory: {path}")]
    RootNotFound { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Any filesystem error that is not one of the recoverable cases.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
