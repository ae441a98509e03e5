//! Configuration for a scan run

use std::path::PathBuf;

use crate::error::WalkError;
use crate::output::OutputFormat;
use crate::walk::{DirFilter, DirWalker};

/// Everything a single scan needs from the command line.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub format: OutputFormat,
    /// Extra directory names or glob patterns to skip
    pub ignore_patterns: Vec<String>,
    /// Skip `.git`, `.vs` and `.idea` directories
    pub default_ignores: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            format: OutputFormat::Console,
            ignore_patterns: Vec::new(),
            default_ignores: true, // default behavior: skip VCS/IDE metadata
        }
    }
}

impl ScanConfig {
    pub fn dir_filter(&self) -> DirFilter {
        let filter = if self.default_ignores {
            DirFilter::with_defaults()
        } else {
            DirFilter::new()
        };
        filter.ignore_all(self.ignore_patterns.iter().cloned())
    }

    /// Walker over `root` with this configuration's directory filter.
    ///
    /// Fails if the root does not exist or is not a directory.
    pub fn walker(&self) -> Result<DirWalker, WalkError> {
        let walker = DirWalker::new(&self.root)?;
        let filter = self.dir_filter();
        if filter.is_empty() {
            return Ok(walker);
        }
        Ok(walker.with_filter(move |path| filter.excludes(path)))
    }
}
