//! Per-extension size statistics
//!
//! `ExtensionCollector` consumes walked files one at a time and keeps a
//! count/size record per allow-listed extension. One collector serves exactly
//! one run; `finalize` hands the records over as `ExtensionStats`.

use serde::Serialize;
use std::collections::HashMap;

use tracing::debug;

use crate::error::WalkError;
use crate::extension::AllowList;
use crate::walk::FileEntry;

/// Aggregated size of all files sharing one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRecord {
    /// Dotted lowercase suffix (`.cs`) or exact file name (`Dockerfile`)
    pub extension: String,
    /// Number of files counted under this extension
    pub files_count: u64,
    /// Sum of their sizes in bytes
    pub total_size: u64,
}

impl ExtensionRecord {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            files_count: 0,
            total_size: 0,
        }
    }

    fn add(&mut self, size: u64) {
        self.files_count += 1;
        self.total_size += size;
    }
}

/// Finished statistics of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    by_extension: HashMap<String, ExtensionRecord>,
    /// Files produced by the walk, reported or not
    pub files_seen: u64,
}

impl ExtensionStats {
    pub fn get(&self, extension: &str) -> Option<&ExtensionRecord> {
        self.by_extension.get(extension)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// Records in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &ExtensionRecord> {
        self.by_extension.values()
    }

    /// Sum of `total_size` over all records.
    pub fn total_size(&self) -> u64 {
        self.records().map(|r| r.total_size).sum()
    }

    /// Number of files counted under any record.
    pub fn total_files(&self) -> u64 {
        self.records().map(|r| r.files_count).sum()
    }
}

/// Statistics collector that accumulates records during a walk.
#[derive(Debug)]
pub struct ExtensionCollector<'a> {
    allow_list: &'a AllowList,
    files_seen: u64,
    by_extension: HashMap<String, ExtensionRecord>,
}

impl<'a> ExtensionCollector<'a> {
    pub fn new(allow_list: &'a AllowList) -> Self {
        Self {
            allow_list,
            files_seen: 0,
            by_extension: HashMap::new(),
        }
    }

    /// Record a file. Returns whether it was counted.
    pub fn record_file(&mut self, file: &FileEntry) -> bool {
        self.files_seen += 1;

        let Some(key) = self.allow_list.key_for(&file.file_name()) else {
            return false;
        };

        self.by_extension
            .entry(key)
            .or_insert_with_key(|k| ExtensionRecord::new(k.clone()))
            .add(file.size());
        true
    }

    /// Finalize and return the collected statistics.
    pub fn finalize(self) -> ExtensionStats {
        debug!(
            "counted {} of {} files under {} extensions",
            self.by_extension.values().map(|r| r.files_count).sum::<u64>(),
            self.files_seen,
            self.by_extension.len()
        );
        ExtensionStats {
            by_extension: self.by_extension,
            files_seen: self.files_seen,
        }
    }
}

/// Aggregate a stream of walked files.
///
/// Stops at the first error; no partial statistics are returned.
pub fn collect_stats<I>(files: I, allow_list: &AllowList) -> Result<ExtensionStats, WalkError>
where
    I: IntoIterator<Item = Result<FileEntry, WalkError>>,
{
    let mut collector = ExtensionCollector::new(allow_list);
    for file in files {
        collector.record_file(&file?);
    }
    Ok(collector.finalize())
}
