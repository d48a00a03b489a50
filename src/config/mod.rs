//! Configuration module for sitegrep
//!
//! Handles loading and validating the optional TOML configuration file.
//! Every setting has a default, so running without a file is fully
//! supported.
//!
//! # Example
//!
//! ```no_run
//! use sitegrep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitegrep.toml")).unwrap();
//! println!("Request timeout: {}s", config.crawler.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;
