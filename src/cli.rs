// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;
use crate::types::{Format, Strictness};

/// Command-line arguments for `replicator`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "replicator",
    version,
    about = "Load a replicator config file and print the effective configuration.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file.
    ///
    /// Default: `replicator.hcl` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Document format. Inferred from the file extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Skip unknown keys and mistyped values with a warning instead of failing.
    #[arg(long)]
    pub lenient: bool,

    /// Print `job_scaling.consul_token` instead of masking it.
    #[arg(long)]
    pub show_secrets: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `REPLICATOR_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    pub fn strictness(&self) -> Strictness {
        if self.lenient {
            Strictness::Lenient
        } else {
            Strictness::Strict
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
