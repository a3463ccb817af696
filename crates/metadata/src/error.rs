use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetadataError>;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed metadata document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Offline mode: remote metadata disabled")]
    Offline,

    #[error("Invalid metadata configuration: {0}")]
    InvalidConfig(String),
}

impl MetadataError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
