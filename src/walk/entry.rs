//! Values produced by the walker

use std::fmt;
use std::path::{Path, PathBuf};

/// A regular file discovered during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    size: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in bytes as reported by the file's metadata.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Final path component, lossily converted to UTF-8.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Kind of recoverable walk condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A directory could not be listed (permission denied or removed mid-walk).
    UnreadableDir,
    /// A file disappeared between being listed and having its metadata read.
    VanishedFile,
}

/// Non-fatal condition encountered during a walk.
#[derive(Debug, Clone)]
pub struct WalkWarning {
    pub path: PathBuf,
    pub kind: WarningKind,
    pub message: String,
}

impl WalkWarning {
    pub fn unreadable_dir(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            kind: WarningKind::UnreadableDir,
            message: format!("cannot read directory: {error}"),
        }
    }

    pub fn vanished_file(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            kind: WarningKind::VanishedFile,
            message: format!("file vanished before it could be measured: {error}"),
        }
    }
}

impl fmt::Display for WalkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
