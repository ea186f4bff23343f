// src/config/loader.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::decode::decoder_for;
use crate::config::merge::Merger;
use crate::config::model::{Config, default_config};
use crate::errors::{DecodeError, DecodeErrorKind, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::types::{Format, Strictness};

/// Load a config file with default options: strict decoding, format inferred
/// from the file extension.
///
/// This is the recommended entry point for the rest of the application.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    Loader::new().load(path)
}

/// Configurable loader: read, decode, merge over [`default_config`].
///
/// Every call builds its own defaults and tree, so one `Loader` can be shared
/// and used from several threads.
#[derive(Debug, Clone)]
pub struct Loader {
    fs: Arc<dyn FileSystem>,
    strictness: Strictness,
    format: Option<Format>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::with_fs(Arc::new(RealFileSystem))
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            strictness: Strictness::default(),
            format: None,
        }
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Force a format instead of inferring it from the path.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Read and merge the document at `path`.
    ///
    /// - I/O failures come back as [`ConfigError::Io`](crate::errors::ConfigError::Io),
    ///   untouched.
    /// - Anything wrong with the content comes back as a single
    ///   [`DecodeError`] naming the path.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let format = self.format.unwrap_or_else(|| Format::from_path(path));
        let origin = path.display().to_string();
        debug!(path = %origin, ?format, strictness = ?self.strictness, "loading config");

        let bytes = self.fs.read(path)?;
        let text = std::str::from_utf8(&bytes).map_err(|err| {
            DecodeError::new(
                origin.as_str(),
                DecodeErrorKind::InvalidUtf8 {
                    offset: err.valid_up_to(),
                },
            )
        })?;

        self.decode_and_merge(&origin, text, format)
    }

    /// Merge a document that is already in memory. `origin` labels it in
    /// error messages.
    pub fn load_str(&self, origin: &str, text: &str) -> Result<Config> {
        let format = self.format.unwrap_or_default();
        self.decode_and_merge(origin, text, format)
    }

    fn decode_and_merge(&self, origin: &str, text: &str, format: Format) -> Result<Config> {
        let tree = decoder_for(format).decode(origin, text)?;
        let config = Merger::new(self.strictness)
            .merge(default_config(), &tree)
            .map_err(|kind| DecodeError::new(origin, kind))?;

        debug!(
            origin,
            keys = tree.len(),
            telemetry = config.telemetry.is_enabled(),
            "config loaded"
        );
        Ok(config)
    }
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `replicator.hcl` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("replicator.hcl")
}
