use crate::config::types::{Config, CrawlerConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates crawl behavior settings
///
/// A page limit of zero is allowed: it is a meaningful request for an
/// empty crawl, not a configuration mistake.
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs ({}) must not exceed timeout-secs ({})",
            config.connect_timeout_secs, config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent settings
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation("user-agent name cannot be empty".to_string()));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &config.contact_url {
        let url = Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url '{}': {}", contact, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "contact-url '{}' must use http or https",
                contact
            )));
        }
    }

    Ok(())
}
