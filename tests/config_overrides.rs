mod common;
use crate::common::{ConfigBuilder, FULL_OVERRIDE_HCL, TestResult, hcl_file, init_tracing, toml_file};

use std::path::PathBuf;

use replicator::config::{Loader, default_config, load};
use replicator::types::Format;

#[test]
fn partial_nested_override_keeps_sibling_defaults() -> TestResult {
    init_tracing();

    let file = hcl_file(
        r#"
    consul  = "consul.tiorap.systems:8500"
		nomad   = "nomad.tiorap.systems:4646"

    cluster_scaling {
      max_size = 15
    }
  "#,
    );

    let cfg = load(file.path())?;

    let expected = ConfigBuilder::new()
        .consul("consul.tiorap.systems:8500")
        .nomad("nomad.tiorap.systems:4646")
        .max_size(15)
        .build();
    assert_eq!(cfg, expected);
    assert_eq!(cfg.cluster_scaling.min_size, 5);
    assert_eq!(cfg.cluster_scaling.cool_down, 300);
    Ok(())
}

#[test]
fn full_override_replaces_every_default() -> TestResult {
    init_tracing();

    let file = hcl_file(FULL_OVERRIDE_HCL);
    let cfg = load(file.path())?;

    let expected = ConfigBuilder::new()
        .consul("consul.tiorap.systems:8500")
        .nomad("nomad.tiorap.systems:4646")
        .log_level("DEBUG")
        .enforce(false)
        .max_size(1000)
        .min_size(100)
        .cool_down(100)
        .consul_key_location("tiorap/replicator/config")
        .consul_token("supersecrettokenthingy")
        .statsd_address("statsd.tiorap.systems:8125")
        .build();
    assert_eq!(cfg, expected);
    Ok(())
}

#[test]
fn telemetry_alone_leaves_other_sections_untouched() -> TestResult {
    init_tracing();

    let file = hcl_file(
        r#"
        telemetry {
          statsd_address = "statsd.tiorap.systems:8125"
        }
        "#,
    );

    let cfg = load(file.path())?;
    let defaults = default_config();

    assert!(cfg.telemetry.is_enabled());
    assert_eq!(
        cfg.telemetry.statsd_address.as_deref(),
        Some("statsd.tiorap.systems:8125")
    );
    assert_eq!(cfg.consul, defaults.consul);
    assert_eq!(cfg.nomad, defaults.nomad);
    assert_eq!(cfg.log_level, defaults.log_level);
    assert_eq!(cfg.enforce, defaults.enforce);
    assert_eq!(cfg.cluster_scaling, defaults.cluster_scaling);
    assert_eq!(cfg.job_scaling, defaults.job_scaling);
    Ok(())
}

#[test]
fn declaration_order_does_not_matter() -> TestResult {
    init_tracing();

    let forwards = hcl_file(
        r#"
        consul = "a:8500"
        cluster_scaling {
          min_size = 1
          max_size = 2
        }
        enforce = false
        "#,
    );
    let backwards = hcl_file(
        r#"
        enforce = false
        cluster_scaling {
          max_size = 2
          min_size = 1
        }
        consul = "a:8500"
        "#,
    );

    assert_eq!(load(forwards.path())?, load(backwards.path())?);
    Ok(())
}

#[test]
fn repeated_blocks_are_merged_field_by_field() -> TestResult {
    init_tracing();

    let file = hcl_file(
        r#"
        cluster_scaling {
          max_size = 40
        }

        cluster_scaling {
          cool_down = 60
        }
        "#,
    );

    let cfg = load(file.path())?;
    assert_eq!(cfg, ConfigBuilder::new().max_size(40).cool_down(60).build());
    Ok(())
}

#[test]
fn object_assignment_behaves_like_a_block() -> TestResult {
    init_tracing();

    let file = hcl_file(
        r#"
        job_scaling = {
          consul_token = "abc123"
        }
        "#,
    );

    let cfg = load(file.path())?;
    assert_eq!(cfg, ConfigBuilder::new().consul_token("abc123").build());
    Ok(())
}

#[test]
fn integral_hcl_number_counts_as_integer() -> TestResult {
    init_tracing();

    // HCL has one number type, so `15.0` is the number 15.
    let file = hcl_file("cluster_scaling {\n  max_size = 15.0\n  cool_down = 60.0\n}\n");

    let cfg = load(file.path())?;
    assert_eq!(cfg, ConfigBuilder::new().max_size(15).cool_down(60).build());
    Ok(())
}

#[test]
fn empty_optional_strings_mean_unset() -> TestResult {
    init_tracing();

    let file = hcl_file(
        r#"
        job_scaling {
          consul_token = ""
        }
        telemetry {
          statsd_address = ""
        }
        "#,
    );

    let cfg = load(file.path())?;
    assert_eq!(cfg.job_scaling.consul_token, None);
    assert!(!cfg.telemetry.is_enabled());
    Ok(())
}

#[test]
fn toml_documents_merge_the_same_way() -> TestResult {
    init_tracing();

    let file = toml_file(
        r#"
consul = "consul.tiorap.systems:8500"

[cluster_scaling]
max_size = 15
"#,
    );

    let cfg = load(file.path())?;
    assert_eq!(
        cfg,
        ConfigBuilder::new()
            .consul("consul.tiorap.systems:8500")
            .max_size(15)
            .build()
    );
    Ok(())
}

#[test]
fn explicit_format_overrides_extension() -> TestResult {
    init_tracing();

    // TOML content in a file without a .toml extension.
    let file = hcl_file("log_level = \"WARN\"\n[telemetry]\nstatsd_address = \"s:8125\"\n");

    let cfg = Loader::new().format(Format::Toml).load(file.path())?;
    assert_eq!(
        cfg,
        ConfigBuilder::new()
            .log_level("WARN")
            .statsd_address("s:8125")
            .build()
    );
    Ok(())
}

#[test]
fn load_str_decodes_in_memory_documents() -> TestResult {
    let cfg = Loader::new().load_str("inline", "enforce = false\n")?;
    assert_eq!(cfg, ConfigBuilder::new().enforce(false).build());
    Ok(())
}

#[test]
fn demo_documents_agree() -> TestResult {
    init_tracing();

    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let from_hcl = load(manifest.join("demos/replicator.hcl"))?;
    let from_toml = load(manifest.join("demos/replicator.toml"))?;

    assert_eq!(from_hcl, from_toml);
    assert_eq!(from_hcl.cluster_scaling.max_size, 20);
    assert_eq!(from_hcl.cluster_scaling.min_size, 5);
    assert_eq!(from_hcl.cluster_scaling.cool_down, 600);
    assert!(from_hcl.telemetry.is_enabled());
    Ok(())
}

#[test]
fn loading_twice_yields_equal_independent_values() -> TestResult {
    init_tracing();

    let file = hcl_file(FULL_OVERRIDE_HCL);

    let mut first = load(file.path())?;
    let second = load(file.path())?;
    assert_eq!(first, second);

    first.cluster_scaling.max_size = 1;
    first.job_scaling.consul_token = None;

    let third = load(file.path())?;
    assert_eq!(third, second);
    assert_eq!(third.cluster_scaling.max_size, 1000);
    assert_eq!(default_config().cluster_scaling.max_size, 10);
    Ok(())
}

#[test]
fn loader_can_be_shared_across_threads() -> TestResult {
    init_tracing();

    let file = hcl_file(FULL_OVERRIDE_HCL);
    let path = file.path().to_path_buf();
    let loader = Loader::new();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| loader.load(&path)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("loader thread panicked"))
            .collect()
    });

    let expected = load(&path)?;
    for result in results {
        assert_eq!(result?, expected);
    }
    Ok(())
}
