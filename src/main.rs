//! CLI entry point for codestat

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use codestat::logging::{self, Verbosity};
use codestat::{AllowList, OutputFormat, ScanConfig, WalkError, collect_stats, render};
use termcolor::{ColorChoice, StandardStream};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output on a stream based on mode and environment.
fn should_use_color(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            is_terminal
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "codestat")]
#[command(about = "Generates code statistics: size and file count per extension")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format: console, csv or json (unknown values fall back to console)
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "console")]
    format: String,

    /// Skip directories matching name or glob pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Also scan .git, .vs and .idea directories
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Only report errors, not skipped directories or files
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Log every directory as it is listed
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("codestat: {}", message);
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    logging::init(
        Verbosity::from_flags(args.quiet, args.verbose),
        should_use_color(args.color, io::stderr().is_terminal()),
    );

    let config = ScanConfig {
        root: args.path.clone(),
        format: OutputFormat::from_selector(&args.format),
        ignore_patterns: args.ignore.clone(),
        default_ignores: !args.no_default_ignores,
    };

    let mut walker = match config.walker() {
        Ok(w) => w,
        Err(WalkError::RootNotFound { .. }) => fail(format!(
            "cannot access '{}': No such file or directory",
            args.path.display()
        )),
        Err(WalkError::NotADirectory { .. }) => fail(format!(
            "cannot access '{}': Not a directory",
            args.path.display()
        )),
        Err(e) => fail(format!("cannot access '{}': {}", args.path.display(), e)),
    };

    let stats = match collect_stats(&mut walker, &AllowList::BUILTIN) {
        Ok(stats) => stats,
        Err(e) => fail(format!("scan aborted: {}", e)),
    };
    debug!(
        "walk finished: {} files seen, {} skipped",
        stats.files_seen,
        walker.warnings().len()
    );

    let color_choice = if config.format.supports_color()
        && should_use_color(args.color, io::stdout().is_terminal())
    {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    if let Err(e) = render(&mut stdout, &stats, config.format) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            fail(format!("error writing output: {}", e));
        }
    }
}
