//! Crawler module for page fetching and traversal
//!
//! This module contains the crawl machinery:
//! - HTTP fetching behind the [`PageFetcher`] trait
//! - Raw link and match extraction behind the [`LinkExtractor`] trait
//! - The breadth-first [`CrawlEngine`] that composes the two

mod engine;
mod extractor;
mod fetcher;

pub use engine::{CrawlEngine, CrawlRequest};
pub use extractor::{HtmlExtractor, LinkExtractor};
pub use fetcher::{build_http_client, FetchError, FetchedPage, HttpFetcher, PageFetcher};

use crate::config::Config;
use crate::state::CrawlResult;

/// Runs one crawl with the default HTTP fetcher and HTML extractor
///
/// This is the main library entry point: it builds the collaborators from
/// the configuration and runs the engine to completion.
///
/// # Arguments
///
/// * `search_text` - Literal text fragment to look for
/// * `start_url` - Absolute URL to start from
/// * `page_limit` - Maximum number of pages to attempt
/// * `config` - Client configuration (user agent, timeouts)
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Matched and scanned URLs in visitation order
/// * `Err(SitegrepError)` - The client could not be built or the start URL
///   was rejected
pub async fn crawl(
    search_text: &str,
    start_url: &str,
    page_limit: usize,
    config: &Config,
) -> crate::Result<CrawlResult> {
    let fetcher = HttpFetcher::new(config)?;
    let engine = CrawlEngine::new(fetcher, HtmlExtractor);
    let request = CrawlRequest::new(search_text, start_url, page_limit);

    engine.crawl(&request).await
}
