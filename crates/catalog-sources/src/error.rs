use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Missing movie provider credential. Surfaced as a persistent
    /// inline warning, not a transient search error.
    #[error("movie provider API key is not configured")]
    Config,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SourceError {
    pub fn is_config(&self) -> bool {
        matches!(self, SourceError::Config)
    }
}
