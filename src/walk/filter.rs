//! Directory exclusion predicate

use std::path::Path;

use glob::Pattern;

/// Directories excluded unless `--no-default-ignores` is given.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", ".vs", ".idea"];

/// Excludes directories whose name equals one of the configured names or
/// matches one of the configured glob patterns.
///
/// Only the final path component is compared, so `.git` excludes every
/// `.git` directory in the tree, not just the one under the root.
#[derive(Debug, Clone, Default)]
pub struct DirFilter {
    patterns: Vec<String>,
}

impl DirFilter {
    /// A filter that excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter preloaded with [`DEFAULT_IGNORED_DIRS`].
    pub fn with_defaults() -> Self {
        Self::new().ignore_all(DEFAULT_IGNORED_DIRS.iter().copied())
    }

    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn ignore_all<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        patterns.into_iter().fold(self, |f, p| f.ignore(p))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the directory at `path` should be skipped along with its subtree.
    pub fn excludes(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => return false,
        };

        self.patterns
            .iter()
            .any(|pattern| name == pattern.as_str() || glob_match(pattern, &name))
    }
}

/// Match a glob pattern against a name. Invalid patterns match nothing.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
