// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{Config, Loader};
use crate::logging::LogHandle;

/// High-level entry point used by `main.rs`.
///
/// Loads the config named on the command line, lets its `log_level` adjust
/// logging, and prints the effective configuration (defaults plus overrides)
/// as TOML on stdout.
pub fn run(args: CliArgs, logs: &LogHandle) -> Result<()> {
    let mut loader = Loader::new().strictness(args.strictness());
    if let Some(format) = args.format {
        loader = loader.format(format);
    }

    let cfg = loader.load(&args.config)?;
    logs.apply_config_level(&cfg.log_level)?;
    info!(path = %args.config.display(), "configuration loaded");

    print!("{}", render(&cfg, args.show_secrets)?);
    Ok(())
}

/// Render a configuration as TOML. The Consul token is masked unless
/// `show_secrets` is set.
pub fn render(cfg: &Config, show_secrets: bool) -> Result<String> {
    let mut shown = cfg.clone();
    if !show_secrets && shown.job_scaling.consul_token.is_some() {
        shown.job_scaling.consul_token = Some("<redacted>".to_string());
    }

    let out = toml::to_string_pretty(&shown).context("rendering configuration as TOML")?;
    debug!(bytes = out.len(), "rendered configuration");
    Ok(out)
}
