use replicator::cli::LogLevel;
use replicator::logging::{LevelSource, resolve_level};
use tracing_subscriber::filter::LevelFilter;

#[test]
fn cli_flag_wins_over_everything() {
    let resolved = resolve_level(Some(LogLevel::Warn), Some("trace"), Some("DEBUG"));
    assert_eq!(resolved, (LevelFilter::WARN, LevelSource::Cli));
}

#[test]
fn environment_wins_over_config_file() {
    let resolved = resolve_level(None, Some("error"), Some("DEBUG"));
    assert_eq!(resolved, (LevelFilter::ERROR, LevelSource::Env));
}

#[test]
fn config_file_level_is_case_insensitive() {
    assert_eq!(
        resolve_level(None, None, Some("DEBUG")),
        (LevelFilter::DEBUG, LevelSource::Config)
    );
    assert_eq!(
        resolve_level(None, None, Some(" Trace ")),
        (LevelFilter::TRACE, LevelSource::Config)
    );
}

#[test]
fn invalid_values_fall_through_to_the_next_source() {
    assert_eq!(
        resolve_level(None, Some("chatty"), Some("WARN")),
        (LevelFilter::WARN, LevelSource::Config)
    );
    assert_eq!(
        resolve_level(None, Some(""), Some("loud")),
        (LevelFilter::INFO, LevelSource::Default)
    );
}

#[test]
fn defaults_to_info() {
    assert_eq!(
        resolve_level(None, None, None),
        (LevelFilter::INFO, LevelSource::Default)
    );
}

#[test]
fn only_startup_sources_are_pinned() {
    assert!(LevelSource::Cli.is_pinned());
    assert!(LevelSource::Env.is_pinned());
    assert!(!LevelSource::Config.is_pinned());
    assert!(!LevelSource::Default.is_pinned());
}
