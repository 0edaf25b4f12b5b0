// src/lib.rs
// =============================================================================
// Library root for page-inspector.
//
// The pipeline is: fetch one page -> parse HTML -> analyze -> verify links.
//
// - crawl:    the orchestrator (fetch + hand-off to the analyzer)
// - analyzer: metadata, headings, login forms, and link aggregation
// - checker:  link extraction (html) and link verification (http)
// - model:    the CrawlResult record and its parts
// - config, error, logging: ambient plumbing
// =============================================================================

pub mod analyzer;
pub mod checker;
pub mod config;
pub mod crawl;
pub mod error;
pub mod logging;
pub mod model;

pub use analyzer::PageAnalyzer;
pub use checker::{BaseUrl, HttpLinkChecker, LinkCheck, LinkVerifier};
pub use config::CrawlerConfig;
pub use crawl::Crawler;
pub use error::CrawlError;
pub use model::{
    BrokenLink, CrawlResult, CrawlStatus, HeadingCounts, HtmlVersion, LinkSummary, PageAnalysis,
    PageMetadata,
};
