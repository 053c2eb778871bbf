//! Error types for sortviz-core.

use thiserror::Error;

/// Result type for sortviz-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting run configuration.
///
/// None of these reach playback: callers fall back to defaults.
#[derive(Debug, Error)]
pub enum Error {
    /// The algorithm id is not one of the supported sorts.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A configuration query string could not be decoded.
    #[error("malformed query: {0}")]
    MalformedQuery(#[from] serde_urlencoded::de::Error),
}
