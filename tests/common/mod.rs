#![allow(dead_code)]

use std::error::Error;

pub use replicator_test_utils::builders::ConfigBuilder;
pub use replicator_test_utils::fixtures::{FULL_OVERRIDE_HCL, hcl_file, toml_file};
pub use replicator_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn Error>>;
