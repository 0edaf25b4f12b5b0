// src/checker/html.rs
// =============================================================================
// This module extracts candidate links from a parsed HTML page.
//
// For every <a href> in document order:
// - skip fragments (#...), mailto: and javascript: links
// - resolve the href against the base URL (RFC 3986, via the `url` crate)
// - skip hrefs that cannot be resolved at all
// - classify the link as internal (same host as the base) or external
//
// Classification compares hosts exactly as written (host[:port], no case
// folding, no default-port or trailing-dot normalization). The `url` crate
// normalizes all of that away, so the raw text is kept next to the parsed Url.
//
// Nothing is deduplicated: the same href twice yields two candidates.
// No network access happens here; verification is done by the analyzer.
// =============================================================================

use scraper::{Html, Selector};
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid - this is a bug"));

// Prefixes of hrefs that are never classified or verified
const SKIPPED_PREFIXES: [&str; 3] = ["#", "mailto:", "javascript:"];

/// The page URL links are resolved against, plus its host as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    url: Url,
    host: String,
}

impl BaseUrl {
    pub fn parse(target: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(target)?;
        let host = raw_host(target).unwrap_or_default().to_string();
        Ok(Self { url, host })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `host[:port]` exactly as it appears in the target string
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.url, f)
    }
}

/// Where a link points relative to the page it was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
}

/// A resolved, classified link waiting to be verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    pub url: Url,
    pub kind: LinkKind,
}

impl CandidateLink {
    pub fn is_internal(&self) -> bool {
        self.kind == LinkKind::Internal
    }
}

// Extracts all candidate links from a parsed document
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   base = "https://example.com/page"
//   result = [Internal "https://example.com/docs"]
pub fn extract_candidate_links(document: &Html, base: &BaseUrl) -> Vec<CandidateLink> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| {
            let url = resolve_link(base.url(), href)?;
            let kind = classify(base, href);
            Some(CandidateLink { url, kind })
        })
        .collect()
}

// Resolves an href against the base URL
//
// Returns None for skipped prefixes and for hrefs `url` refuses to parse.
// base.join() handles every reference form:
//   "/docs"              -> same scheme + host, absolute path
//   "../other"           -> relative to the base path
//   "//cdn.example.com"  -> protocol-relative, keeps the base scheme
//   "https://other.com"  -> absolute, the base is ignored
fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    if SKIPPED_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        return None;
    }

    base.join(href).ok()
}

// Relative references inherit the base host, so they are always internal.
// Everything else is internal only on an exact string match.
fn classify(base: &BaseUrl, href: &str) -> LinkKind {
    match raw_host(href) {
        None => LinkKind::Internal,
        Some(host) if host == base.host() => LinkKind::Internal,
        Some(_) => LinkKind::External,
    }
}

// Host (with port, without userinfo) of a reference, as written
//
//   "http://EXAMPLE.com:80/a" -> Some("EXAMPLE.com:80")
//   "//cdn.example.com/x"     -> Some("cdn.example.com")
//   "tel:+15551234"           -> Some("")   (absolute, but no authority)
//   "/about", "../x", "page"  -> None       (relative)
fn raw_host(reference: &str) -> Option<&str> {
    let reference = reference.trim_matches(|c: char| c <= ' ');

    let rest = match reference.strip_prefix("//") {
        Some(rest) => rest,
        None => {
            let scheme_end = scheme_len(reference)?;
            match reference[scheme_end + 1..].strip_prefix("//") {
                Some(rest) => rest,
                None => return Some(""),
            }
        }
    };

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host))
}

// Byte offset of the ':' ending a valid URI scheme, if the reference has one
fn scheme_len(reference: &str) -> Option<usize> {
    let colon = reference.find(':')?;
    let mut chars = reference[..colon].chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(colon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(html: &str, base: &str) -> Vec<CandidateLink> {
        let document = Html::parse_document(html);
        extract_candidate_links(&document, &BaseUrl::parse(base).unwrap())
    }

    fn urls(candidates: &[CandidateLink]) -> Vec<String> {
        candidates.iter().map(|c| c.url.to_string()).collect()
    }

    #[test]
    fn test_relative_link_is_internal() {
        let found = links(r#"<a href="/about">About</a>"#, "http://example.com/x");
        assert_eq!(urls(&found), vec!["http://example.com/about"]);
        assert!(found[0].is_internal());
    }

    #[test]
    fn test_absolute_other_host_is_external() {
        let found = links(r#"<a href="http://other.com/y">Y</a>"#, "http://example.com");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, LinkKind::External);
    }

    #[test]
    fn test_protocol_relative_link() {
        let found = links(r#"<a href="//cdn.example.com/lib.js">CDN</a>"#, "https://example.com/");
        assert_eq!(urls(&found), vec!["https://cdn.example.com/lib.js"]);
        assert_eq!(found[0].kind, LinkKind::External);
    }

    #[test]
    fn test_dot_segments_resolve_against_base_path() {
        let found = links(r#"<a href="../other">Other</a>"#, "https://example.com/a/b/page");
        assert_eq!(urls(&found), vec!["https://example.com/a/other"]);
    }

    #[test]
    fn test_skipped_prefixes() {
        let html = r##"
            <a href="#section">Jump</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="javascript:void(0)">JS</a>
            <a>No href</a>
        "##;
        assert!(links(html, "https://example.com").is_empty());
    }

    #[test]
    fn test_unparseable_href_is_skipped() {
        let html = r#"<a href="http://[::1">Bad</a><a href="/ok">Ok</a>"#;
        let found = links(html, "https://example.com");
        assert_eq!(urls(&found), vec!["https://example.com/ok"]);
    }

    #[test]
    fn test_different_port_is_external() {
        let found = links(r#"<a href="http://example.com:8080/">Alt</a>"#, "http://example.com/");
        assert_eq!(found[0].kind, LinkKind::External);

        let found = links(r#"<a href="http://example.com:8080/x">Same</a>"#, "http://example.com:8080/");
        assert_eq!(found[0].kind, LinkKind::Internal);
    }

    #[test]
    fn test_host_compared_exactly_as_written() {
        let html = r#"
            <a href="http://EXAMPLE.com/a">Upper</a>
            <a href="http://example.com:80/b">Default port</a>
            <a href="http://example.com./c">Trailing dot</a>
            <a href="https://example.com/d">Other scheme</a>
            <a href="//example.com/e">Protocol-relative</a>
        "#;
        let kinds: Vec<_> = links(html, "http://example.com/")
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                LinkKind::External,
                LinkKind::External,
                LinkKind::External,
                LinkKind::Internal,
                LinkKind::Internal,
            ]
        );
    }

    #[test]
    fn test_base_host_keeps_raw_spelling() {
        let base = BaseUrl::parse("http://user:pw@Example.COM:80/x?q").unwrap();
        assert_eq!(base.host(), "Example.COM:80");
        assert_eq!(base.url().as_str(), "http://user:pw@example.com/x?q");

        let found = links(r#"<a href="http://Example.COM:80/y">Same</a>"#, "http://Example.COM:80/x");
        assert!(found[0].is_internal());
    }

    #[test]
    fn test_raw_host() {
        assert_eq!(raw_host("http://EXAMPLE.com:80/a"), Some("EXAMPLE.com:80"));
        assert_eq!(raw_host("//cdn.example.com"), Some("cdn.example.com"));
        assert_eq!(raw_host("https://host?q=1"), Some("host"));
        assert_eq!(raw_host("tel:+15551234"), Some(""));
        assert_eq!(raw_host("/about"), None);
        assert_eq!(raw_host("page.html"), None);
        assert_eq!(raw_host("./a:b"), None);
    }

    #[test]
    fn test_duplicates_kept_in_document_order() {
        let html = r#"
            <a href="/b">B</a>
            <a href="https://other.com/">O</a>
            <a href="/b">B again</a>
        "#;
        let found = links(html, "https://example.com/");
        assert_eq!(
            urls(&found),
            vec![
                "https://example.com/b",
                "https://other.com/",
                "https://example.com/b",
            ]
        );
    }

    #[test]
    fn test_tel_link_is_external() {
        // No host at all, so it can't match the base host
        let found = links(r#"<a href="tel:+15551234">Call</a>"#, "https://example.com/");
        assert_eq!(found[0].kind, LinkKind::External);
    }
}
