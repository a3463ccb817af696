use crate::config::MetadataConfig;
use crate::document::MetadataDocument;
use crate::error::{MetadataError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Anything that can produce the metadata document
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_document(&self) -> Result<MetadataDocument>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}

/// Single `GET` against the configured URL
pub struct HttpMetadataSource {
    client: Client,
    url: String,
}

impl HttpMetadataSource {
    pub fn new(config: &MetadataConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| MetadataError::Transport {
                url: config.url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            url: config.url.trim().to_string(),
        })
    }
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch_document(&self) -> Result<MetadataDocument> {
        let transport = |source: reqwest::Error| MetadataError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let document = serde_json::from_slice(&body)?;
        Ok(document)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Always fails with [`MetadataError::Offline`], forcing the fallback table
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl MetadataSource for OfflineSource {
    async fn fetch_document(&self) -> Result<MetadataDocument> {
        Err(MetadataError::Offline)
    }

    fn describe(&self) -> String {
        "offline".to_string()
    }
}
