//! Crawl engine - the breadth-first traversal loop
//!
//! The engine owns nothing but its two collaborators. Per crawl it builds a
//! fresh [`CrawlState`], seeds it with the start URL, and then repeatedly:
//! dequeues the oldest pending URL, fetches it, resolves every discovered
//! href, queues the internal ones it has not seen, and records the page if
//! its body contains the search text. The loop ends when the queue drains
//! or the page limit is reached.
//!
//! Once a crawl has begun, nothing fails it: non-success statuses,
//! transport errors, unparsable markup, and unresolvable links all degrade
//! to "this page or link contributes nothing" and are reported through
//! tracing events.

use crate::crawler::extractor::LinkExtractor;
use crate::crawler::fetcher::PageFetcher;
use crate::state::{CrawlResult, CrawlState};
use crate::url::{base_origin, resolve, ResolvedLink};
use crate::SitegrepError;

/// The immutable parameters of one crawl
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Text fragment to look for, matched as a literal substring
    pub search_text: String,

    /// Absolute URL the traversal starts from
    pub start_url: String,

    /// Maximum number of pages to attempt; zero is valid and means the
    /// crawl returns immediately without fetching anything
    pub page_limit: usize,
}

impl CrawlRequest {
    /// Creates a crawl request
    pub fn new(search_text: &str, start_url: &str, page_limit: usize) -> Self {
        Self {
            search_text: search_text.to_string(),
            start_url: start_url.to_string(),
            page_limit,
        }
    }
}

/// Drives a bounded breadth-first crawl over one site
pub struct CrawlEngine<F, E> {
    fetcher: F,
    extractor: E,
}

impl<F: PageFetcher, E: LinkExtractor> CrawlEngine<F, E> {
    /// Creates an engine from its two collaborators
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// Runs one crawl to completion
    ///
    /// The only error this returns is a start URL that is not absolute;
    /// everything after the first dequeue degrades gracefully.
    ///
    /// # Arguments
    ///
    /// * `request` - The crawl parameters
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - Matched and scanned URLs in visitation order
    /// * `Err(SitegrepError)` - The start URL was rejected
    pub async fn crawl(&self, request: &CrawlRequest) -> crate::Result<CrawlResult> {
        let origin =
            base_origin(&request.start_url).map_err(|e| SitegrepError::InvalidStartUrl {
                url: request.start_url.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            "Searching {} for {:?} (limit: {} pages)",
            origin,
            request.search_text,
            request.page_limit
        );

        let mut state = CrawlState::new(&request.start_url);

        while state.visited_count() < request.page_limit {
            let url = match state.next() {
                Some(url) => url,
                None => break,
            };

            tracing::debug!("Visiting {}", url);
            self.visit(&url, request, &mut state).await;
        }

        let result = state.into_result();
        tracing::info!(
            "Crawl finished: {} pages scanned, {} matched",
            result.scanned.len(),
            result.matched.len()
        );

        Ok(result)
    }

    /// Processes a single dequeued page
    ///
    /// Fetch, discover links, check for the search text. A page that cannot
    /// be fetched, or answers with a non-success status, still counts
    /// against the limit but contributes no links and no match.
    async fn visit(&self, url: &str, request: &CrawlRequest, state: &mut CrawlState) {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Fetch failed for {}: {}", url, e);
                return;
            }
        };

        if !page.is_success() {
            tracing::debug!("Skipping {} (HTTP {})", url, page.status);
            return;
        }

        for href in self.extractor.extract_hrefs(&page.body) {
            match resolve(&href, url) {
                Ok(ResolvedLink::Internal(absolute)) => {
                    if state.enqueue(&absolute) {
                        tracing::trace!("Queued {}", absolute);
                    }
                }
                Ok(ResolvedLink::External) => {
                    tracing::trace!("Ignoring external link {:?} on {}", href, url);
                }
                Ok(ResolvedLink::Invalid) => {
                    tracing::debug!("Dropping unresolvable link {:?} on {}", href, url);
                }
                Err(e) => {
                    tracing::warn!("Could not resolve {:?} on {}: {}", href, url, e);
                }
            }
        }

        if self.extractor.contains_text(&page.body, &request.search_text) {
            tracing::debug!("Match found on {}", url);
            state.record_match(url);
        }
    }
}
