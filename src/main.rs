// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Crawl every URL concurrently, one independent crawl each
// 4. Print the report and exit with the proper code
//    (0 = all fine, 1 = broken links or failed crawls, 2 = internal error)
// =============================================================================

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use futures::future::join_all;
use page_inspector::{logging, Crawler};
use report::ReportEntry;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Logging may not be up yet, so print directly
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init_logger(cli.log_level.into()).context("failed to initialize logger")?;

    let crawler = Crawler::new(&cli.crawler_config()).context("failed to set up the crawler")?;

    let outcomes = join_all(cli.urls.iter().map(|url| crawler.crawl(url))).await;

    let entries: Vec<ReportEntry> = cli
        .urls
        .iter()
        .zip(outcomes)
        .map(|(url, outcome)| ReportEntry::from_outcome(url, outcome))
        .collect();

    report::print_results(&entries, cli.json)?;

    if entries.iter().any(ReportEntry::needs_attention) {
        Ok(1)
    } else {
        Ok(0)
    }
}
