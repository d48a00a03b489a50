//! sitegrep: find where a text fragment lives on a website
//!
//! This crate crawls a single website breadth-first, starting from one page
//! and following only links that stay on the same origin, checking each
//! fetched page for a literal text fragment. The crawl stops once a page
//! limit is reached or no undiscovered internal links remain.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for sitegrep operations
#[derive(Debug, Error)]
pub enum SitegrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Invalid start URL '{url}': {reason}")]
    InvalidStartUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-resolution errors
///
/// Both variants mean the URL handed to the resolver was not an absolute
/// URL. During a crawl this is fatal only for the single link being
/// resolved; the crawl itself carries on.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("URL '{0}' has no scheme")]
    MissingScheme(String),

    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// Result type alias for sitegrep operations
pub type Result<T> = std::result::Result<T, SitegrepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL-resolution operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlEngine, CrawlRequest, HtmlExtractor, HttpFetcher, LinkExtractor, PageFetcher};
pub use state::{CrawlResult, CrawlState};
pub use url::{base_origin, host, path, resolve, ResolvedLink};
