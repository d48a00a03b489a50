//! HTTP fetcher implementation
//!
//! The engine talks to the network through the [`PageFetcher`] trait; this
//! module provides the production implementation on top of reqwest. Only
//! GET requests are issued. Redirects are the client's concern and are
//! followed silently up to a bounded hop count, and a fetch that times out
//! surfaces as a transport error, which the engine treats exactly like a
//! non-success status.

use crate::config::Config;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;

/// A fetched page: final status code and raw body
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code of the response
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl FetchedPage {
    /// Returns true for 2xx responses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A failure to obtain a response body for a URL
///
/// Transport errors are never fatal to a crawl; the engine logs them and
/// moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },
}

/// The engine's narrow view of HTTP: one GET per page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a URL with a GET request
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Builds the HTTP client used for all of a crawl's requests
///
/// # Arguments
///
/// * `config` - Supplies the user agent string and timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.timeout_secs))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by a reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the crawler configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(FetchedPage { status, body })
    }
}
