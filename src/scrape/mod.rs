//! Scrape module: fetching, selection, link resolution and word counting
//!
//! This module contains the scraping logic, including:
//! - HTTP fetching into owned markup trees
//! - Selecting elements that load external resources
//! - Resolving the followed link by its text
//! - Word-frequency tabulation up to a terminator
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod filter;
mod frequency;
mod resolver;

pub use coordinator::{Coordinator, RunReport};
pub use fetcher::{build_http_client, PageFetcher, RenderedPage};
pub use filter::{external_resources, has_external_source, hyperlinks};
pub use frequency::{normalize_word, tabulate, tabulate_with_stats, TabulationStats, WordFrequency};
pub use resolver::{find_index_by_text, resolve_target};

use crate::config::Config;
use crate::ScrapeError;

/// Runs a complete scrape
///
/// This is the main entry point. It will:
/// 1. Fetch the homepage
/// 2. Write the external-resource and hyperlink records
/// 3. Resolve the configured link text to a URL
/// 4. Fetch the linked page
/// 5. Count its visible words up to the terminator and write them out
///
/// # Arguments
///
/// * `config` - The scrape configuration
///
/// # Returns
///
/// * `Ok(RunReport)` - Run completed and all files were written
/// * `Err(ScrapeError)` - Run aborted
pub async fn run(config: Config) -> Result<RunReport, ScrapeError> {
    Coordinator::new(config)?.run().await
}
