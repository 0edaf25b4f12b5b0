// src/crawl/fetch.rs
// =============================================================================
// This module fetches the target page.
//
// - One GET, bounded by the client timeout
// - Redirects are NOT followed: a 3xx response is what gets analyzed
// - A 4xx/5xx page is still analyzed (its body is whatever the server sent)
// - Transport failures (DNS, refused, timeout, body read) are fatal
// =============================================================================

use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::error::CrawlError;

// Fetches a web page and returns its HTML content
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, CrawlError> {
    let fetch_error = |source| CrawlError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(fetch_error)?;

    let status = response.status();
    if status.is_redirection() {
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");
        warn!("{} answered HTTP {} -> {} (not followed)", url, status.as_u16(), location);
    } else if !status.is_success() {
        warn!("{} answered HTTP {}, analyzing the body anyway", url, status.as_u16());
    }

    let html = response.text().await.map_err(fetch_error)?;
    debug!("fetched {} ({} bytes)", url, html.len());
    Ok(html)
}
