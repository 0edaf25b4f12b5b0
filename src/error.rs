// src/error.rs
// =============================================================================
// Errors that abort a crawl.
//
// Only two things are fatal: the target string is not a URL, or the page
// could not be fetched. A failing link probe is NOT an error; it is recorded
// as a broken link with status code 0. Malformed HTML is not an error either.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The page GET could not be completed (DNS, refused, timeout, body read)
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The target string could not be parsed as an absolute URL
    #[error("invalid target URL '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client itself could not be built
    #[error("HTTP client initialization error: {0}")]
    Client(#[from] reqwest::Error),
}

impl CrawlError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, CrawlError::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, CrawlError::Parse { .. })
    }
}
