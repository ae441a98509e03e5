//! Report rendering
//!
//! Records are always ordered by total size, largest first, with ties broken
//! by extension name ascending so that output is reproducible.

mod console;
mod csv;
mod json;
mod utils;

use std::cmp::Ordering;
use std::fmt;
use std::io;

use termcolor::WriteColor;
use tracing::debug;

use crate::stats::{ExtensionRecord, ExtensionStats};

pub use console::write_console;
pub use csv::write_csv;
pub use json::{JsonReport, write_json};
pub use utils::format_megabytes;

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<extension> <size> MB` lines plus a total
    #[default]
    Console,
    /// `;`-separated table with a header row
    Csv,
    /// Pretty-printed JSON document
    Json,
}

impl OutputFormat {
    /// Parse a format name. Unknown names fall back to [`OutputFormat::Console`].
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "console" => Self::Console,
            "csv" => Self::Csv,
            "json" => Self::Json,
            other => {
                debug!("unknown output format '{other}', using console");
                Self::Console
            }
        }
    }

    /// Whether the format may carry terminal colors.
    pub fn supports_color(self) -> bool {
        matches!(self, Self::Console)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Console => "console",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Report ordering: `total_size` descending, then `extension` ascending.
pub fn compare_records(a: &ExtensionRecord, b: &ExtensionRecord) -> Ordering {
    b.total_size
        .cmp(&a.total_size)
        .then_with(|| a.extension.cmp(&b.extension))
}

/// Records of `stats` in report order.
pub fn sorted_records(stats: &ExtensionStats) -> Vec<&ExtensionRecord> {
    let mut records: Vec<_> = stats.records().collect();
    records.sort_by(|a, b| compare_records(a, b));
    records
}

/// Render `stats` in the chosen format.
pub fn render<W: WriteColor>(
    out: &mut W,
    stats: &ExtensionStats,
    format: OutputFormat,
) -> io::Result<()> {
    let records = sorted_records(stats);
    match format {
        OutputFormat::Console => write_console(out, &records),
        OutputFormat::Csv => write_csv(out, &records),
        OutputFormat::Json => write_json(out, &records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::AllowList;
    use crate::stats::collect_stats;
    use crate::walk::FileEntry;
    use termcolor::NoColor;

    fn stats_of(files: &[(&str, u64)]) -> ExtensionStats {
        const LIST: AllowList = AllowList::new(&[".ext1", ".ext2", ".cs", ".js", ".go"], &[]);
        collect_stats(
            files.iter().map(|(p, s)| Ok(FileEntry::new(*p, *s))),
            &LIST,
        )
        .unwrap()
    }

    fn rendered(stats: &ExtensionStats, format: OutputFormat) -> String {
        let mut out = NoColor::new(Vec::new());
        render(&mut out, stats, format).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_from_selector() {
        assert_eq!(OutputFormat::from_selector("console"), OutputFormat::Console);
        assert_eq!(OutputFormat::from_selector("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_selector("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_selector("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_selector("xml"), OutputFormat::Console);
        assert_eq!(OutputFormat::from_selector(""), OutputFormat::Console);
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert!(!OutputFormat::Json.supports_color());
    }

    #[test]
    fn test_sorted_by_size_then_name() {
        let stats = stats_of(&[("a.js", 10), ("b.go", 30), ("c.cs", 10), ("d.ext1", 20)]);
        let order: Vec<_> = sorted_records(&stats)
            .iter()
            .map(|r| r.extension.as_str())
            .collect();
        assert_eq!(order, vec![".go", ".ext1", ".cs", ".js"]);
    }

    #[test]
    fn test_sort_is_non_increasing() {
        let stats = stats_of(&[
            ("a.js", 5),
            ("b.js", 5),
            ("c.go", 11),
            ("d.cs", 0),
            ("e.ext2", 10),
        ]);
        let records = sorted_records(&stats);
        assert!(records.windows(2).all(|w| w[0].total_size >= w[1].total_size));
    }

    #[test]
    fn test_csv_in_size_order() {
        let stats = stats_of(&[("small.ext2", 1_048_576), ("big.ext1", 2_097_152)]);
        let text = rendered(&stats, OutputFormat::Csv);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Extension; Size; Files Count", ".ext1; 2.000; 1", ".ext2; 1.000; 1"]
        );
    }

    #[test]
    fn test_console_report() {
        let stats = stats_of(&[("a.cs", 1_048_576), ("b.cs", 524_288), ("c.js", 1024)]);
        let text = rendered(&stats, OutputFormat::Console);
        assert_eq!(text, ".cs 1.500 MB\n.js 0.001 MB\nTotal: 1.501 MB\n");
    }

    #[test]
    fn test_empty_reports() {
        let stats = ExtensionStats::default();
        assert_eq!(rendered(&stats, OutputFormat::Console), "Total: 0.000 MB\n");
        assert_eq!(
            rendered(&stats, OutputFormat::Csv),
            "Extension; Size; Files Count\n"
        );
    }
}
