use std::path::PathBuf;

use thiserror::Error;

/// Errors from the favorites key-value store.
///
/// None of these reach the user: the directory logs them and carries on with
/// the in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to lock storage '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage task failed: {0}")]
    Task(String),
}
