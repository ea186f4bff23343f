// src/logging.rs

//! Logging for the `replicator` binary.
//!
//! The level comes from the first of these that names a valid level:
//! 1. `--log-level` on the command line
//! 2. the `REPLICATOR_LOG` environment variable
//! 3. `log_level` in the loaded config file (`"INFO"`, `"DEBUG"`, ...)
//! 4. `info`
//!
//! The config file is only known after it has been loaded, so the subscriber
//! starts from sources 1, 2 and 4 and is re-filtered once the config is in
//! hand. Logs go to STDERR; STDOUT carries only the rendered configuration.

use std::str::FromStr;

use anyhow::Result;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` flag is given.
pub const LOG_ENV: &str = "REPLICATOR_LOG";

/// Where the effective log level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Cli,
    Env,
    Config,
    Default,
}

impl LevelSource {
    /// Levels chosen by the operator at startup are never overridden by the
    /// config file.
    pub fn is_pinned(self) -> bool {
        matches!(self, LevelSource::Cli | LevelSource::Env)
    }
}

/// Pick the log level from the available sources, highest priority first.
///
/// Unparseable values are skipped rather than treated as errors. Level names
/// are case-insensitive, so the config file's upper-case `"DEBUG"` works.
pub fn resolve_level(
    cli: Option<LogLevel>,
    env: Option<&str>,
    config: Option<&str>,
) -> (LevelFilter, LevelSource) {
    if let Some(level) = cli {
        return (level.into(), LevelSource::Cli);
    }
    if let Some(level) = env.and_then(parse_level) {
        return (level, LevelSource::Env);
    }
    if let Some(level) = config.and_then(parse_level) {
        return (level, LevelSource::Config);
    }
    (LevelFilter::INFO, LevelSource::Default)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    LevelFilter::from_str(s).ok()
}

impl From<LogLevel> for LevelFilter {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Handle to the installed subscriber's filter.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    source: LevelSource,
}

impl LogHandle {
    pub fn source(&self) -> LevelSource {
        self.source
    }

    /// Apply the config file's `log_level`, unless the level was pinned by the
    /// command line or environment.
    pub fn apply_config_level(&self, config_level: &str) -> Result<()> {
        if self.source.is_pinned() {
            return Ok(());
        }

        match parse_level(config_level) {
            Some(level) => {
                self.filter.reload(filter_for(level))?;
                debug!(%level, "log level taken from config file");
            }
            None => warn!(log_level = config_level, "unrecognised log_level in config, keeping current level"),
        }
        Ok(())
    }
}

fn filter_for(level: LevelFilter) -> EnvFilter {
    EnvFilter::default().add_directive(level.into())
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<LogHandle> {
    let env = std::env::var(LOG_ENV).ok();
    let (level, source) = resolve_level(cli_level, env.as_deref(), None);

    let (filter, handle) = reload::Layer::new(filter_for(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()?;

    Ok(LogHandle {
        filter: handle,
        source,
    })
}
