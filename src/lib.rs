//! codestat - per-extension size report for a directory tree

pub mod config;
pub mod error;
pub mod extension;
pub mod logging;
pub mod output;
pub mod stats;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::ScanConfig;
pub use error::WalkError;
pub use extension::{AllowList, normalize_extension};
pub use output::{OutputFormat, render};
pub use stats::{ExtensionCollector, ExtensionRecord, ExtensionStats, collect_stats};
pub use walk::{DirFilter, DirWalker, FileEntry, WalkWarning, WarningKind};
