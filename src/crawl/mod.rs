// src/crawl/mod.rs
// =============================================================================
// This module is the crawl orchestrator.
//
// One crawl = parse the target URL -> fetch the page -> analyze it.
// Exactly one page is fetched; links are verified, never followed.
//
// Failures:
// - target string isn't a URL      -> CrawlError::Parse
// - page GET can't be completed    -> CrawlError::Fetch (no partial result)
// - a link probe fails             -> not an error, the link is just broken
//
// Crawls share nothing but the HTTP connection pool, so one Crawler can run
// any number of crawls concurrently.
// =============================================================================

mod fetch;

pub use fetch::fetch_page;

use log::info;
use reqwest::Client;

use crate::analyzer::PageAnalyzer;
use crate::checker::{build_client, BaseUrl, HttpLinkChecker};
use crate::config::CrawlerConfig;
use crate::error::CrawlError;
use crate::model::CrawlResult;

pub struct Crawler {
    client: Client,
    analyzer: PageAnalyzer<HttpLinkChecker>,
}

impl Crawler {
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let client = build_client(config)?;
        let analyzer = PageAnalyzer::new(
            HttpLinkChecker::new(client.clone()),
            config.max_concurrent_checks,
        );
        Ok(Self { client, analyzer })
    }

    /// Crawls `target` and returns a fresh, completed CrawlResult.
    pub async fn crawl(&self, target: &str) -> Result<CrawlResult, CrawlError> {
        // The target doubles as the base URL for resolving relative links
        let base = BaseUrl::parse(target).map_err(|source| CrawlError::Parse {
            url: target.to_string(),
            source,
        })?;

        info!("crawling {}", base);
        let html = fetch_page(&self.client, base.url()).await?;
        let analysis = self.analyzer.analyze(&html, &base).await;
        let result = CrawlResult::new(target, analysis);

        info!(
            "finished {}: {} internal, {} external, {} broken",
            target,
            result.internal_links(),
            result.external_links(),
            result.broken_links()
        );
        Ok(result)
    }
}
