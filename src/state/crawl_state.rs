use std::collections::{HashSet, VecDeque};

/// The outcome of a finished crawl
///
/// Both lists are in visitation order. `matched` is always a subset of
/// `scanned`; `scanned` contains one entry per page dequeued, whether or not
/// its fetch succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlResult {
    /// Pages whose body contained the search text
    pub matched: Vec<String>,

    /// Every page the crawl attempted, in the order it was dequeued
    pub scanned: Vec<String>,
}

impl CrawlResult {
    /// Returns true if at least one page contained the search text
    pub fn has_matches(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Traversal bookkeeping for one crawl
///
/// Three collections, with one invariant between them: a URL is never in
/// `pending` and `visited` at the same time, because [`enqueue`] refuses
/// URLs already in either set and [`next`] moves a URL from one directly
/// into the other.
///
/// [`enqueue`]: CrawlState::enqueue
/// [`next`]: CrawlState::next
#[derive(Debug)]
pub struct CrawlState {
    /// URLs discovered but not yet visited, in discovery order
    pending: VecDeque<String>,

    /// Visited URLs in visitation order
    visited: Vec<String>,

    /// Membership mirror of `visited`
    visited_set: HashSet<String>,

    /// Visited URLs whose body contained the search text
    matched: Vec<String>,
}

impl CrawlState {
    /// Creates a fresh state seeded with the start URL
    pub fn new(start_url: &str) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(start_url.to_string());

        Self {
            pending,
            visited: Vec::new(),
            visited_set: HashSet::new(),
            matched: Vec::new(),
        }
    }

    /// Returns true if any URL is waiting to be visited
    pub fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of pages visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting to be visited
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Takes the next URL in FIFO order, recording it as visited
    pub fn next(&mut self) -> Option<String> {
        let url = self.pending.pop_front()?;
        self.visited.push(url.clone());
        self.visited_set.insert(url.clone());
        Some(url)
    }

    /// Returns true if the URL was already visited or is queued to be
    pub fn was_discovered(&self, url: &str) -> bool {
        self.visited_set.contains(url) || self.pending.iter().any(|pending| pending == url)
    }

    /// Queues a URL unless it was already discovered
    ///
    /// Returns true if the URL was actually added. This is the only
    /// insertion point into `pending`, which is what upholds the
    /// never-in-both-sets invariant.
    pub fn enqueue(&mut self, url: &str) -> bool {
        if self.was_discovered(url) {
            return false;
        }
        self.pending.push_back(url.to_string());
        true
    }

    /// Records that a visited page contained the search text
    pub fn record_match(&mut self, url: &str) {
        self.matched.push(url.to_string());
    }

    /// Consumes the state into its final result
    pub fn into_result(self) -> CrawlResult {
        CrawlResult {
            matched: self.matched,
            scanned: self.visited,
        }
    }
}
