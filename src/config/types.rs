use serde::Deserialize;

/// Main configuration structure for sitegrep
///
/// Every field has a default, so an empty file - or no file at all - is a
/// valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages to attempt per crawl, unless the caller
    /// overrides it
    #[serde(rename = "page-limit", default = "default_page_limit")]
    pub page_limit: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection-establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name sent in the User-Agent header
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Version sent in the User-Agent header
    #[serde(default = "default_agent_version")]
    pub version: String,

    /// Optional URL with information about who is crawling
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            version: default_agent_version(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// `name/version`, with ` (+contact-url)` appended when a contact URL
    /// is configured.
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!("{}/{} (+{})", self.name, self.version, contact),
            None => format!("{}/{}", self.name, self.version),
        }
    }
}

fn default_page_limit() -> usize {
    100
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_agent_name() -> String {
    "sitegrep".to_string()
}

fn default_agent_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
