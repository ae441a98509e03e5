//! Lazy depth-first directory walking
//!
//! `DirWalker` is an iterator over the regular files under a root. It keeps an
//! explicit stack of directories still to be listed plus the listing currently
//! being read, so each call to `next()` only does as much filesystem work as it
//! takes to produce the next file.
//!
//! Directories can be pruned with any `Fn(&Path) -> bool` predicate;
//! `DirFilter` is the name/glob based predicate used by the CLI.

mod entry;
mod filter;
mod walker;

pub use entry::{FileEntry, WalkWarning, WarningKind};
pub use filter::{DEFAULT_IGNORED_DIRS, DirFilter, glob_match};
pub use walker::DirWalker;
