//! State module for tracking crawl progress
//!
//! A crawl owns exactly one [`CrawlState`] for its lifetime; the state is
//! consumed into a [`CrawlResult`] when the traversal finishes and is never
//! reused across crawls.

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlResult, CrawlState};
