// src/config/model.rs

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Fully merged replicator configuration.
///
/// Every field always holds a value: whatever the document leaves out comes
/// from [`default_config`]. A document such as
///
/// ```hcl
/// consul = "consul.example:8500"
///
/// cluster_scaling {
///   max_size = 15
/// }
/// ```
///
/// overrides `consul` and `cluster_scaling.max_size` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Consul agent address.
    pub consul: String,

    /// Nomad API address.
    pub nomad: String,

    /// Log verbosity requested by the operator (e.g. `"INFO"`, `"DEBUG"`).
    pub log_level: String,

    /// When false, scaling decisions are computed and logged but not applied.
    pub enforce: bool,

    pub cluster_scaling: ClusterScaling,

    pub job_scaling: JobScaling,

    pub telemetry: Telemetry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            consul: "localhost:8500".to_string(),
            nomad: "http://localhost:4646".to_string(),
            log_level: "INFO".to_string(),
            enforce: true,
            cluster_scaling: ClusterScaling::default(),
            job_scaling: JobScaling::default(),
            telemetry: Telemetry::default(),
        }
    }
}

/// `cluster_scaling { ... }` block.
///
/// Bounds are not cross-checked here (`min_size` may exceed `max_size`);
/// that is left to whoever consumes the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterScaling {
    pub max_size: u64,
    pub min_size: u64,
    /// Seconds to wait after a scaling action before the next one.
    pub cool_down: u64,
}

impl ClusterScaling {
    pub fn cool_down_duration(&self) -> Duration {
        Duration::from_secs(self.cool_down)
    }
}

impl Default for ClusterScaling {
    fn default() -> Self {
        Self {
            max_size: 10,
            min_size: 5,
            cool_down: 300,
        }
    }
}

/// `job_scaling { ... }` block.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct JobScaling {
    /// Consul KV prefix holding per-job scaling documents.
    pub consul_key_location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consul_token: Option<String>,
}

impl Default for JobScaling {
    fn default() -> Self {
        Self {
            consul_key_location: "replicator/config/jobs".to_string(),
            consul_token: None,
        }
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for JobScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobScaling")
            .field("consul_key_location", &self.consul_key_location)
            .field(
                "consul_token",
                &self.consul_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// `telemetry { ... }` block. No address means telemetry is off.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Telemetry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statsd_address: Option<String>,
}

impl Telemetry {
    pub fn is_enabled(&self) -> bool {
        self.statsd_address.is_some()
    }
}

/// The baseline every load starts from.
///
/// Returns a new value on each call, so a caller mutating one result can never
/// affect another load.
pub fn default_config() -> Config {
    Config::default()
}
