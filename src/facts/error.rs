use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactError {
    #[error("Fact generator is not configured (missing API key)")]
    NotConfigured,

    #[error("Fact API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Fact request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse fact response: {0}")]
    Parse(String),

    #[error("Fact response contained no text")]
    Empty,
}
