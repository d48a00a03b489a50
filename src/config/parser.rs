use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and validates a configuration file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to read, parse, or validate
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitegrep::config::load_config;
///
/// let config = load_config(Path::new("sitegrep.toml")).unwrap();
/// println!("Default page limit: {}", config.crawler.page_limit);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = create_temp_config(
            r#"
[crawler]
page-limit = 25
timeout-secs = 15
connect-timeout-secs = 5

[user-agent]
name = "TestBot"
version = "1.0"
contact-url = "https://example.com/bot"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.page_limit, 25);
        assert_eq!(config.crawler.timeout_secs, 15);
        assert_eq!(config.user_agent.name, "TestBot");
        assert_eq!(config.user_agent.contact_url.as_deref(), Some("https://example.com/bot"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = create_temp_config(
            r#"
[crawler]
page-limit = 7
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.page_limit, 7);
        assert_eq!(config.crawler.timeout_secs, 30);
        assert_eq!(config.user_agent.name, "sitegrep");
    }

    #[test]
    fn test_empty_config_is_valid() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.page_limit, 100);
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/sitegrep.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let file = create_temp_config(
            r#"
[crawler]
timeout-secs = 0
"#,
        );

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
