//! Error types for front page operations.
//!
//! Extraction itself never fails: missing markup falls back to neutral values.
//! [`FrontpageError`] covers everything around it, namely fetching the page,
//! reading local input, building a custom [`Listing`](crate::Listing) and
//! rendering output.
//!
//! # Example
//!
//! ```rust
//! use frontpage_core::{FrontpageError, Listing};
//!
//! match Listing::with_row_selector("[[broken") {
//!     Ok(_) => unreachable!(),
//!     Err(FrontpageError::InvalidSelector(msg)) => println!("bad selector: {}", msg),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and rendering front pages.
#[derive(Error, Debug)]
pub enum FrontpageError {
    /// HTTP request errors from reqwest.
    ///
    /// Covers network errors, DNS failures, connection issues and
    /// non-success status codes from the upstream page.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A custom row selector could not be parsed.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Read or write errors on local files and stdin.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FrontpageError {
    fn from(err: serde_json::Error) -> Self {
        FrontpageError::Serialization(err.to_string())
    }
}

/// Result type alias for FrontpageError.
pub type Result<T> = std::result::Result<T, FrontpageError>;
