//! Error types for outline generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or exporting an outline.
///
/// Missing or sparse source data is never an error; the allocator fills
/// gaps with fallback content instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller passed arguments outside the supported contract.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Failed to serialize or deserialize outline data.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to read or write export data.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
