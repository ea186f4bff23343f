use std::path::Path;

use clap::ValueEnum;

/// Text syntax of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Block syntax: `cluster_scaling { max_size = 15 }`.
    #[default]
    Hcl,
    /// TOML, with sections written as tables: `[cluster_scaling]`.
    Toml,
}

impl Format {
    /// Infer the format from a file extension.
    ///
    /// Only `.toml` selects TOML; every other path (including paths without an
    /// extension) is read as HCL.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Format::Toml,
            _ => Format::Hcl,
        }
    }
}

/// How the merge engine treats keys it does not recognise and values of the
/// wrong type.
///
/// - `Strict`: both are hard decode failures (default).
/// - `Lenient`: the entry is skipped with a warning and the default is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strictness {
    #[default]
    Strict,
    Lenient,
}
