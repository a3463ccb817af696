use crate::error::{MetadataError, Result};
use std::time::Duration;

pub const DEFAULT_METADATA_URL: &str = "https://start.spring.io/metadata/client";

/// Where and how the remote metadata document is fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    /// Full URL of the metadata document
    pub url: String,

    /// Whole-request timeout
    pub timeout: Duration,

    /// Sent as `User-Agent`
    pub user_agent: String,

    /// Skip the remote fetch and serve the fallback table
    pub offline: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_METADATA_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("springboot-cli/{}", env!("CARGO_PKG_VERSION")),
            offline: false,
        }
    }
}

impl MetadataConfig {
    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(MetadataError::invalid_config("metadata url is empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MetadataError::invalid_config(format!(
                "metadata url must use http or https: {url}"
            )));
        }
        if self.timeout.is_zero() {
            return Err(MetadataError::invalid_config("timeout must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let config = MetadataConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.url, DEFAULT_METADATA_URL);
        assert!(config.user_agent.starts_with("springboot-cli/"));
    }

    #[test]
    fn config_validation() {
        let mut config = MetadataConfig {
            url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.url = "ftp://start.spring.io".to_string();
        assert!(config.validate().is_err());

        config.url = "http://localhost:8080/metadata/client".to_string();
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.timeout = Duration::from_secs(3);
        assert!(config.validate().is_ok());
    }
}
