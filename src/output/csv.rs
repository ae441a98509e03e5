//! Tabular report with `;` separators

use std::io::{self, Write};

use super::utils::format_megabytes;
use crate::stats::ExtensionRecord;

const HEADER: &str = "Extension; Size; Files Count";

pub fn write_csv<W: Write>(out: &mut W, records: &[&ExtensionRecord]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for record in records {
        writeln!(
            out,
            "{}; {}; {}",
            record.extension,
            format_megabytes(record.total_size),
            record.files_count
        )?;
    }
    Ok(())
}
