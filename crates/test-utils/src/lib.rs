pub mod builders;
pub mod fixtures;

use std::sync::Once;

use replicator::logging::{LOG_ENV, resolve_level};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Route `tracing` output from the loader into the test harness.
///
/// Output is captured per test and only shown for failures (or with
/// `--nocapture`). The level follows the binary's own rules, so
/// `REPLICATOR_LOG=debug cargo test` shows merge warnings and load events;
/// the default is `info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env = std::env::var(LOG_ENV).ok();
        let (level, _) = resolve_level(None, env.as_deref(), None);

        // Another test binary helper may already have installed one.
        let _ = fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
