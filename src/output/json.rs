//! JSON report

use std::io::{self, Write};

use serde::Serialize;

use crate::stats::ExtensionRecord;

/// Serialized shape of the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub extensions: &'a [&'a ExtensionRecord],
    pub total_size: u64,
    pub total_files: u64,
}

impl<'a> JsonReport<'a> {
    pub fn new(records: &'a [&'a ExtensionRecord]) -> Self {
        Self {
            extensions: records,
            total_size: records.iter().map(|r| r.total_size).sum(),
            total_files: records.iter().map(|r| r.files_count).sum(),
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, records: &[&ExtensionRecord]) -> io::Result<()> {
    let report = JsonReport::new(records);
    serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::other)?;
    writeln!(out)
}
