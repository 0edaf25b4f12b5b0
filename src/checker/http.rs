// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Never follows redirects: a 3xx is reported as-is
// - Any transport failure (timeout, DNS, refused) means "unreachable" (code 0)
// - No retries: one failed probe marks the link broken for this crawl
//
// Rust concepts:
// - async traits: So the analyzer can take any verifier (real or stubbed)
// - Result<T, E>: For error handling
// =============================================================================

use async_trait::async_trait;
use log::debug;
use reqwest::{redirect, Client};

use crate::config::CrawlerConfig;

/// Outcome of probing one link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCheck {
    /// HTTP status code, or 0 when the link could not be reached
    pub status_code: u16,
    pub is_broken: bool,
}

impl LinkCheck {
    /// The link could not be reached at all
    pub fn unreachable() -> Self {
        Self {
            status_code: 0,
            is_broken: true,
        }
    }

    /// The server answered; anything >= 400 counts as broken
    pub fn from_status(status_code: u16) -> Self {
        Self {
            status_code,
            is_broken: status_code >= 400,
        }
    }
}

/// Something that can tell whether an absolute URL is broken.
///
/// The page analyzer only talks to links through this trait, which keeps it
/// free of network code and lets tests plug in a stub.
#[async_trait]
pub trait LinkVerifier: Send + Sync {
    async fn check(&self, url: &str) -> LinkCheck;
}

// Builds the HTTP client shared by the page fetch and the link probes
//
// Both use the same settings: one timeout per request, no redirect following
pub fn build_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.timeout)
        .redirect(redirect::Policy::none())
        .user_agent(config.user_agent.clone())
        .build()
}

/// Link verifier backed by reqwest HEAD requests
#[derive(Debug, Clone)]
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    // The client is cheap to clone (it's an Arc internally), so the crawler
    // and the checker share one connection pool
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LinkVerifier for HttpLinkChecker {
    async fn check(&self, url: &str) -> LinkCheck {
        match self.client.head(url).send().await {
            Ok(response) => {
                let check = LinkCheck::from_status(response.status().as_u16());
                debug!("HEAD {} -> {}", url, check.status_code);
                check
            }
            Err(e) => {
                debug!("HEAD {} failed: {}", url, describe_error(&e));
                LinkCheck::unreachable()
            }
        }
    }
}

// Turns a reqwest error into a short human-readable reason
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - etc.
fn describe_error(error: &reqwest::Error) -> String {
    // Convert error to string once to avoid lifetime issues
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why HEAD and not GET?
//    - HEAD returns only the status line and headers, no body
//    - We only care whether the link exists, so this is much cheaper
//
// 2. Why is a 301 not broken?
//    - Redirects are not followed, so we see the 3xx itself
//    - Only status >= 400 (or no answer at all) counts as broken
//
// 3. Why #[async_trait]?
//    - The analyzer stores the verifier behind a generic and calls it from
//      a stream of futures; the macro gives us Send futures for free
// -----------------------------------------------------------------------------
