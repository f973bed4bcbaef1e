use thiserror::Error;

/// Failures of a single directory fetch.
///
/// The directory only keeps the `Display` text of these, so every variant
/// must read well on its own.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch countries: {status}")]
    Status { status: u16 },

    #[error("Failed to parse countries: {0}")]
    Decode(#[from] serde_json::Error),

    /// Source could not be reached for a reason other than HTTP.
    #[error("{0}")]
    Unavailable(String),

    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
