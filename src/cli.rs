// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use page_inspector::config::{DEFAULT_MAX_CONCURRENT_CHECKS, DEFAULT_TIMEOUT};
use page_inspector::CrawlerConfig;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "page-inspector",
    version,
    about = "Inspect web pages: title, HTML version, headings, login forms, and broken links",
    long_about = "page-inspector fetches each given page once (redirects are not followed), \
                  reports its title, HTML version, heading counts and whether it has a login form, \
                  and checks every link on it with a HEAD request. \
                  Exit code is 0 when everything is fine, 1 when broken links were found or a \
                  crawl failed, 2 on internal errors."
)]
pub struct Cli {
    /// Page URL(s) to inspect (e.g., https://example.com)
    ///
    /// Several URLs are crawled concurrently, each independently
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Output results in JSON format instead of a report
    #[arg(long)]
    pub json: bool,

    /// Timeout in seconds, applied to the page fetch and to each link check
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Maximum number of link checks in flight at once (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_CHECKS)]
    pub concurrency: usize,

    /// Log verbosity for page-inspector (logs go to stderr)
    ///
    /// Ignored when RUST_LOG is set; RUST_LOG then controls all filtering
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn crawler_config(&self) -> CrawlerConfig {
        CrawlerConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_concurrent_checks(self.concurrency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["page-inspector", "https://example.com"]);
        assert_eq!(cli.urls, vec!["https://example.com"]);
        assert!(!cli.json);
        assert_eq!(cli.log_level, LogLevel::Info);

        let config = cli.crawler_config();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_checks, 10);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "page-inspector",
            "https://a.example",
            "https://b.example",
            "--json",
            "--timeout",
            "5",
            "--concurrency",
            "1",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.urls.len(), 2);
        assert!(cli.json);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);

        let config = cli.crawler_config();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_concurrent_checks, 1);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["page-inspector"]).is_err());
    }
}
