//! Console report: one `<extension> <size> MB` line per record, then a total

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use super::utils::format_megabytes;
use crate::stats::ExtensionRecord;

pub fn write_console<W: WriteColor>(out: &mut W, records: &[&ExtensionRecord]) -> io::Result<()> {
    let mut ext_color = ColorSpec::new();
    ext_color.set_fg(Some(Color::Cyan));

    for record in records {
        out.set_color(&ext_color)?;
        write!(out, "{}", record.extension)?;
        out.reset()?;
        writeln!(out, " {} MB", format_megabytes(record.total_size))?;
    }

    let total: u64 = records.iter().map(|r| r.total_size).sum();

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    write!(out, "Total:")?;
    out.reset()?;
    writeln!(out, " {} MB", format_megabytes(total))?;

    Ok(())
}
