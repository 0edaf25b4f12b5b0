// src/logging.rs
// =============================================================================
// Logger setup.
//
// We log through the `log` facade and use env_logger as the backend. Logs go
// to stderr, so `--json` output on stdout stays machine-readable.
//
// When RUST_LOG is set it is used as-is. Otherwise the level passed in (from
// --log-level) applies to this crate and chatty dependencies are capped.
// =============================================================================

use log::{LevelFilter, SetLoggerError};

const RUST_LOG: &str = "RUST_LOG";

pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let rust_log = std::env::var(RUST_LOG).ok();
    let filters = filter_spec(level, rust_log.as_deref());

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&filters);
    builder.format_timestamp_millis();

    // try_init so a second call (tests, embedding) doesn't panic
    builder.try_init()
}

// Builds the env_logger filter string; a non-empty RUST_LOG always wins
fn filter_spec(level: LevelFilter, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(spec) if !spec.is_empty() => spec.to_string(),
        _ => format!(
            "warn,page_inspector={},html5ever=error,selectors=warn,reqwest=info,hyper=info",
            level.as_str().to_ascii_lowercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_applies_without_rust_log() {
        let spec = filter_spec(LevelFilter::Debug, None);
        assert!(spec.starts_with("warn,page_inspector=debug,"));
        assert!(spec.contains("html5ever=error"));

        let spec = filter_spec(LevelFilter::Off, Some("  "));
        assert!(spec.starts_with("warn,page_inspector=off,"));
    }

    #[test]
    fn test_rust_log_wins_over_cli_level() {
        assert_eq!(filter_spec(LevelFilter::Info, Some("debug")), "debug");
        assert_eq!(
            filter_spec(LevelFilter::Error, Some("page_inspector=trace")),
            "page_inspector=trace"
        );
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        let _ = init_logger(LevelFilter::Debug);
        assert!(init_logger(LevelFilter::Debug).is_err());
    }
}
