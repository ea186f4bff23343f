use std::io::Write;

use tempfile::{Builder, NamedTempFile};

/// The document that sets every recognised key, in block syntax.
pub const FULL_OVERRIDE_HCL: &str = r#"
    consul    = "consul.tiorap.systems:8500"
    nomad     = "nomad.tiorap.systems:4646"
    log_level = "DEBUG"
    enforce   = false

    cluster_scaling {
      max_size  = 1000
      min_size  = 100
      cool_down = 100
    }

    job_scaling {
      consul_key_location = "tiorap/replicator/config"
      consul_token        = "supersecrettokenthingy"
    }

    telemetry {
      statsd_address = "statsd.tiorap.systems:8125"
    }
"#;

/// Write `contents` to a temporary file ending in `suffix` (e.g. `".hcl"`).
///
/// The file is removed when the returned handle is dropped.
pub fn config_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("replicator-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp config file");
    file.write_all(contents.as_bytes())
        .expect("write temp config file");
    file.flush().expect("flush temp config file");
    file
}

pub fn hcl_file(contents: &str) -> NamedTempFile {
    config_file(contents, ".hcl")
}

pub fn toml_file(contents: &str) -> NamedTempFile {
    config_file(contents, ".toml")
}
