//! Error types shared across the store port and its adapters.

use thiserror::Error;

/// Store-level errors.
///
/// An empty collection is not an error: `BlogStore::list` returns an empty
/// vec for a `null`/`{}` backend state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Backend unreachable: {0}")]
    Network(String),

    #[error("Write rejected by backend: {0}")]
    Write(String),

    #[error("Malformed backend response: {0}")]
    Decode(String),

    #[error("Post not found")]
    NotFound,
}
