#![allow(dead_code)]

use replicator::config::{Config, default_config};

/// Builder for expected `Config` values, starting from the defaults.
///
/// Tests state only the fields they expect to differ from the defaults.
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: default_config(),
        }
    }

    pub fn consul(mut self, addr: &str) -> Self {
        self.config.consul = addr.to_string();
        self
    }

    pub fn nomad(mut self, addr: &str) -> Self {
        self.config.nomad = addr.to_string();
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.log_level = level.to_string();
        self
    }

    pub fn enforce(mut self, val: bool) -> Self {
        self.config.enforce = val;
        self
    }

    pub fn max_size(mut self, val: u64) -> Self {
        self.config.cluster_scaling.max_size = val;
        self
    }

    pub fn min_size(mut self, val: u64) -> Self {
        self.config.cluster_scaling.min_size = val;
        self
    }

    pub fn cool_down(mut self, secs: u64) -> Self {
        self.config.cluster_scaling.cool_down = secs;
        self
    }

    pub fn consul_key_location(mut self, location: &str) -> Self {
        self.config.job_scaling.consul_key_location = location.to_string();
        self
    }

    pub fn consul_token(mut self, token: &str) -> Self {
        self.config.job_scaling.consul_token = Some(token.to_string());
        self
    }

    pub fn statsd_address(mut self, addr: &str) -> Self {
        self.config.telemetry.statsd_address = Some(addr.to_string());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
