// src/config.rs
// =============================================================================
// Crawler settings.
//
// One timeout is applied independently to the page fetch and to every link
// probe. Link probes run with bounded concurrency; a limit of 1 checks links
// strictly one at a time.
// =============================================================================

use std::time::Duration;

/// Default timeout for the page fetch and for each link probe
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of link probes in flight at once
pub const DEFAULT_MAX_CONCURRENT_CHECKS: usize = 10;

/// User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("page-inspector/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    pub timeout: Duration,
    pub max_concurrent_checks: usize,
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_concurrent_checks: DEFAULT_MAX_CONCURRENT_CHECKS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the probe concurrency; 0 is treated as 1
    pub fn with_max_concurrent_checks(mut self, limit: usize) -> Self {
        self.max_concurrent_checks = limit.max(1);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_checks, 10);
        assert!(config.user_agent.starts_with("page-inspector/"));
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = CrawlerConfig::default().with_max_concurrent_checks(0);
        assert_eq!(config.max_concurrent_checks, 1);
    }
}
