//! Error types for web scraping.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, WebError>;

/// Errors that can occur while fetching or scraping a page.
#[derive(Error, Debug)]
pub enum WebError {
    /// The HTTP request failed outright.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// A url could not be built or parsed.
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    /// The page had no usable paragraphs.
    #[error("No usable content at {0}")]
    NoContent(String),
}
