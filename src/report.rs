// src/report.rs
// =============================================================================
// Turns crawl outcomes into output: a human-readable report or JSON.
//
// A failed crawl never produces a CrawlResult, so the report carries its own
// entry for it: { url, status: "error", error }.
// =============================================================================

use anyhow::Result;
use page_inspector::{CrawlError, CrawlResult, CrawlStatus};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Completed(CrawlResult),
    Failed {
        url: String,
        status: CrawlStatus,
        error: String,
    },
}

impl ReportEntry {
    pub fn from_outcome(url: &str, outcome: Result<CrawlResult, CrawlError>) -> Self {
        match outcome {
            Ok(result) => ReportEntry::Completed(result),
            Err(e) => ReportEntry::Failed {
                url: url.to_string(),
                status: CrawlStatus::Error,
                error: e.to_string(),
            },
        }
    }

    /// True when the crawl failed or the page has broken links
    pub fn needs_attention(&self) -> bool {
        match self {
            ReportEntry::Completed(result) => result.broken_links() > 0,
            ReportEntry::Failed { .. } => true,
        }
    }
}

// Prints the entries either as a report or JSON
pub fn print_results(entries: &[ReportEntry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{}", render(entry));
        }
        print_summary(entries);
    }
    Ok(())
}

fn render(entry: &ReportEntry) -> String {
    match entry {
        ReportEntry::Completed(result) => render_result(result),
        ReportEntry::Failed { url, error, .. } => {
            format!("🔍 {}\n   ⚠️  Crawl failed: {}\n", url, error)
        }
    }
}

fn render_result(result: &CrawlResult) -> String {
    let headings = result
        .headings()
        .as_levels()
        .iter()
        .enumerate()
        .map(|(i, count)| format!("h{}={}", i + 1, count))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&format!("🔍 {}\n", result.url()));
    out.push_str(&format!("   {:<14} {}\n", "Title:", result.title()));
    out.push_str(&format!("   {:<14} {}\n", "HTML version:", result.html_version()));
    out.push_str(&format!("   {:<14} {}\n", "Headings:", headings));
    out.push_str(&format!(
        "   {:<14} {}\n",
        "Login form:",
        if result.has_login_form() { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "   {:<14} {} internal, {} external\n",
        "Links:",
        result.internal_links(),
        result.external_links()
    ));

    if result.broken_links() == 0 {
        out.push_str("   ✅ No broken links\n");
    } else {
        out.push_str(&format!("   ❌ Broken links: {}\n", result.broken_links()));
        for link in result.broken_link_list() {
            let status = if link.is_unreachable() {
                "UNREACHABLE".to_string()
            } else {
                format!("HTTP {}", link.status_code)
            };
            out.push_str(&format!("      {:<12} {}\n", status, link.url));
        }
    }
    out
}

fn print_summary(entries: &[ReportEntry]) {
    let failed = entries
        .iter()
        .filter(|e| matches!(e, ReportEntry::Failed { .. }))
        .count();
    let broken: usize = entries
        .iter()
        .map(|e| match e {
            ReportEntry::Completed(result) => result.broken_links(),
            ReportEntry::Failed { .. } => 0,
        })
        .sum();

    println!("📊 Summary:");
    println!("   📄 Pages: {}", entries.len());
    println!("   ⚠️  Failed crawls: {}", failed);
    println!("   ❌ Broken links: {}", broken);
}
