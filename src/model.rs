// src/model.rs
// =============================================================================
// Data types produced by a crawl.
//
// A CrawlResult is built exactly once from a PageAnalysis and is read-only
// afterwards: its fields are private and only exposed through accessors.
// Re-crawling a URL produces a brand new CrawlResult.
//
// JSON field names use camelCase (htmlVersion, h1Count, brokenLinkList, ...)
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title reported when the page has no non-empty <title> element
pub const NO_TITLE: &str = "No title found";

/// Lifecycle state of a crawl record.
///
/// A successful crawl always yields `Completed`. The other states belong to
/// whoever stores and schedules crawls (queued -> running -> completed/error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlStatus {
    Queued,
    Running,
    Completed,
    Error,
}

impl CrawlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlStatus::Queued => "queued",
            CrawlStatus::Running => "running",
            CrawlStatus::Completed => "completed",
            CrawlStatus::Error => "error",
        }
    }
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTML version as guessed from the doctype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HtmlVersion {
    #[serde(rename = "HTML5")]
    Html5,
    #[serde(rename = "HTML4 or earlier")]
    Html4OrEarlier,
}

impl HtmlVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HtmlVersion::Html5 => "HTML5",
            HtmlVersion::Html4OrEarlier => "HTML4 or earlier",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of <h1> .. <h6> elements on the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingCounts {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub h4_count: usize,
    pub h5_count: usize,
    pub h6_count: usize,
}

impl HeadingCounts {
    /// Builds counts from an array indexed by level - 1
    pub fn from_levels(levels: [usize; 6]) -> Self {
        let [h1_count, h2_count, h3_count, h4_count, h5_count, h6_count] = levels;
        Self {
            h1_count,
            h2_count,
            h3_count,
            h4_count,
            h5_count,
            h6_count,
        }
    }

    pub fn as_levels(&self) -> [usize; 6] {
        [
            self.h1_count,
            self.h2_count,
            self.h3_count,
            self.h4_count,
            self.h5_count,
            self.h6_count,
        ]
    }

    pub fn total(&self) -> usize {
        self.as_levels().iter().sum()
    }
}

/// A link whose verification failed.
///
/// `status_code` is the HTTP status (>= 400), or 0 when the link could not
/// be reached at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLink {
    pub url: String,
    pub status_code: u16,
}

impl BrokenLink {
    pub fn is_unreachable(&self) -> bool {
        self.status_code == 0
    }
}

/// Everything the analyzer learns from the markup itself (no network)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub html_version: HtmlVersion,
    pub headings: HeadingCounts,
    pub has_login_form: bool,
}

/// Aggregated link classification and verification results.
///
/// Only grows through `record`, so `internal + external` always equals the
/// number of links recorded and `broken_count() == broken().len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    internal: usize,
    external: usize,
    broken: Vec<BrokenLink>,
}

impl LinkSummary {
    pub(crate) fn record(&mut self, url: &str, internal: bool, broken_status: Option<u16>) {
        if internal {
            self.internal += 1;
        } else {
            self.external += 1;
        }
        if let Some(status_code) = broken_status {
            self.broken.push(BrokenLink {
                url: url.to_string(),
                status_code,
            });
        }
    }

    pub fn internal(&self) -> usize {
        self.internal
    }

    pub fn external(&self) -> usize {
        self.external
    }

    pub fn total(&self) -> usize {
        self.internal + self.external
    }

    pub fn broken(&self) -> &[BrokenLink] {
        &self.broken
    }

    pub fn broken_count(&self) -> usize {
        self.broken.len()
    }
}

/// Output of the page analyzer for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAnalysis {
    pub metadata: PageMetadata,
    pub links: LinkSummary,
}

/// The report produced by one crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    url: String,
    title: String,
    html_version: HtmlVersion,
    #[serde(flatten)]
    headings: HeadingCounts,
    internal_links: usize,
    external_links: usize,
    broken_links: usize,
    broken_link_list: Vec<BrokenLink>,
    has_login_form: bool,
    status: CrawlStatus,
}

impl CrawlResult {
    /// Creates the completed record for `url` from an analysis of its page
    pub fn new(url: impl Into<String>, analysis: PageAnalysis) -> Self {
        let PageAnalysis { metadata, links } = analysis;
        Self {
            url: url.into(),
            title: metadata.title,
            html_version: metadata.html_version,
            headings: metadata.headings,
            internal_links: links.internal,
            external_links: links.external,
            broken_links: links.broken.len(),
            broken_link_list: links.broken,
            has_login_form: metadata.has_login_form,
            status: CrawlStatus::Completed,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn html_version(&self) -> HtmlVersion {
        self.html_version
    }

    pub fn headings(&self) -> HeadingCounts {
        self.headings
    }

    pub fn internal_links(&self) -> usize {
        self.internal_links
    }

    pub fn external_links(&self) -> usize {
        self.external_links
    }

    pub fn total_links(&self) -> usize {
        self.internal_links + self.external_links
    }

    pub fn broken_links(&self) -> usize {
        self.broken_links
    }

    pub fn broken_link_list(&self) -> &[BrokenLink] {
        &self.broken_link_list
    }

    pub fn has_login_form(&self) -> bool {
        self.has_login_form
    }

    pub fn status(&self) -> CrawlStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> PageAnalysis {
        let mut links = LinkSummary::default();
        links.record("http://example.com/a", true, None);
        links.record("http://other.com/b", false, Some(404));
        links.record("http://example.com/c", true, Some(0));

        PageAnalysis {
            metadata: PageMetadata {
                title: "Example".to_string(),
                html_version: HtmlVersion::Html5,
                headings: HeadingCounts::from_levels([1, 2, 0, 0, 0, 3]),
                has_login_form: true,
            },
            links,
        }
    }

    #[test]
    fn test_link_summary_counts() {
        let links = sample_analysis().links;
        assert_eq!(links.internal(), 2);
        assert_eq!(links.external(), 1);
        assert_eq!(links.total(), 3);
        assert_eq!(links.broken_count(), 2);
        assert!(links.broken()[1].is_unreachable());
    }

    #[test]
    fn test_crawl_result_from_analysis() {
        let result = CrawlResult::new("http://example.com/x", sample_analysis());
        assert_eq!(result.url(), "http://example.com/x");
        assert_eq!(result.status(), CrawlStatus::Completed);
        assert_eq!(result.broken_links(), result.broken_link_list().len());
        assert_eq!(result.total_links(), 3);
        assert_eq!(result.headings().total(), 6);
    }

    #[test]
    fn test_crawl_result_json_field_names() {
        let result = CrawlResult::new("http://example.com/x", sample_analysis());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["htmlVersion"], "HTML5");
        assert_eq!(json["h1Count"], 1);
        assert_eq!(json["h6Count"], 3);
        assert_eq!(json["internalLinks"], 2);
        assert_eq!(json["externalLinks"], 1);
        assert_eq!(json["brokenLinks"], 2);
        assert_eq!(json["hasLoginForm"], true);
        assert_eq!(json["status"], "completed");
        assert_eq!(json["brokenLinkList"][0]["url"], "http://other.com/b");
        assert_eq!(json["brokenLinkList"][0]["statusCode"], 404);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(CrawlStatus::Queued.to_string(), "queued");
        assert_eq!(CrawlStatus::Error.to_string(), "error");
        assert_eq!(serde_json::to_value(CrawlStatus::Running).unwrap(), "running");
    }
}
