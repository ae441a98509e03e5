//! Extension normalization and the allow-list of reported file kinds
//!
//! A file is keyed either by its whole name (for files such as `Dockerfile`
//! that are recognized by name) or by its lowercased dotted suffix (`.cs`).
//! Whole-name matching is checked first and is case-sensitive.

/// Fixed set of file kinds included in the report.
#[derive(Debug, Clone, Copy)]
pub struct AllowList {
    suffixes: &'static [&'static str],
    names: &'static [&'static str],
}

impl AllowList {
    /// The file kinds codestat reports on.
    pub const BUILTIN: AllowList = AllowList::new(
        &[
            ".cs", ".sql", ".js", ".go", ".tf", ".ts", ".ps1", ".sh", ".bat", ".yml", ".yaml",
            ".json", ".xml", ".css", ".less", ".scss", ".csproj",
        ],
        &["Dockerfile"],
    );

    /// `suffixes` must be lowercase and include the leading dot.
    pub const fn new(suffixes: &'static [&'static str], names: &'static [&'static str]) -> Self {
        Self { suffixes, names }
    }

    /// Report key for `file_name`, or `None` if the file is not reported.
    pub fn key_for(&self, file_name: &str) -> Option<String> {
        if self.names.contains(&file_name) {
            return Some(file_name.to_string());
        }

        normalize_extension(file_name).filter(|ext| self.suffixes.contains(&ext.as_str()))
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// Lowercased suffix from the last dot, dot included.
///
/// Names without a dot or ending in a dot have no extension. A name that only
/// starts with a dot (`.gitignore`) is all suffix.
pub fn normalize_extension(file_name: &str) -> Option<String> {
    let idx = file_name.rfind('.')?;
    let ext = &file_name[idx..];
    if ext.len() == 1 {
        return None;
    }
    Some(ext.to_lowercase())
}
