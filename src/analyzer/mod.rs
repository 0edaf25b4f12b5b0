// src/analyzer/mod.rs
// =============================================================================
// The page analyzer.
//
// Works in three steps so that no shared state is mutated mid-traversal:
// 1. Inspect: parse the markup once, pull out metadata and the ordered list
//    of candidate links, then drop the DOM (scraper's Html isn't Send, so it
//    must never be held across an .await)
// 2. Verify: run every candidate through the LinkVerifier with bounded
//    concurrency; `buffered` yields results in input order, so network timing
//    never reorders them
// 3. Fold: zip candidates with their checks into a LinkSummary
// =============================================================================

mod metadata;

pub use metadata::{count_headings, detect_html_version, detect_login_form, extract_title};

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use scraper::Html;

use crate::checker::{extract_candidate_links, BaseUrl, CandidateLink, LinkCheck, LinkVerifier};
use crate::model::{LinkSummary, PageAnalysis, PageMetadata};

pub struct PageAnalyzer<V> {
    verifier: V,
    max_concurrent_checks: usize,
}

impl<V: LinkVerifier> PageAnalyzer<V> {
    /// `max_concurrent_checks` of 0 is treated as 1 (sequential)
    pub fn new(verifier: V, max_concurrent_checks: usize) -> Self {
        Self {
            verifier,
            max_concurrent_checks: max_concurrent_checks.max(1),
        }
    }

    /// Analyzes one document fetched from `base`.
    ///
    /// Malformed markup is parsed best-effort and never fails. The only
    /// network access is through the verifier, once per candidate link.
    pub async fn analyze(&self, markup: &str, base: &BaseUrl) -> PageAnalysis {
        let (metadata, candidates) = inspect(markup, base);
        debug!("{}: {} candidate link(s)", base, candidates.len());

        let checks = self.verify_all(&candidates).await;
        let links = summarize_links(&candidates, &checks);

        PageAnalysis { metadata, links }
    }

    async fn verify_all(&self, candidates: &[CandidateLink]) -> Vec<LinkCheck> {
        stream::iter(candidates)
            .map(|candidate| self.verifier.check(candidate.url.as_str()))
            .buffered(self.max_concurrent_checks)
            .collect()
            .await
    }
}

// Everything that needs the DOM happens here, synchronously
fn inspect(markup: &str, base: &BaseUrl) -> (PageMetadata, Vec<CandidateLink>) {
    let document = Html::parse_document(markup);

    let metadata = PageMetadata {
        title: extract_title(&document),
        html_version: detect_html_version(markup),
        headings: count_headings(&document),
        has_login_form: detect_login_form(&document),
    };
    let candidates = extract_candidate_links(&document, base);

    (metadata, candidates)
}

fn summarize_links(candidates: &[CandidateLink], checks: &[LinkCheck]) -> LinkSummary {
    candidates
        .iter()
        .zip(checks)
        .fold(LinkSummary::default(), |mut summary, (candidate, check)| {
            let broken = check.is_broken.then_some(check.status_code);
            if let Some(status_code) = broken {
                warn!("broken link {} ({})", candidate.url, status_code);
            }
            summary.record(candidate.url.as_str(), candidate.is_internal(), broken);
            summary
        })
}
