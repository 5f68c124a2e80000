//! Error types for the seoscribe library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SeoError`] enum. The analysis engine itself never fails for string input;
//! errors come from request validation, configuration, the external AI
//! collaborator and draft storage.
//!
//! # Examples
//!
//! ```
//! use seoscribe::error::{Result, SeoError};
//!
//! fn validate(content: &str) -> Result<()> {
//!     if content.trim().is_empty() {
//!         return Err(SeoError::invalid_input("Content is required"));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate("   ").unwrap_err();
//! assert_eq!(err.status_code(), 400);
//! assert_eq!(err.public_message(), "Content is required");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for seoscribe operations.
#[derive(Error, Debug)]
pub enum SeoError {
    /// The caller supplied a malformed request (missing or wrongly typed fields).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scoring or service configuration is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external AI collaborator failed.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The external AI collaborator did not answer in time.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Draft or session persistence failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A draft does not exist or belongs to another user.
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O errors (reading content files, config files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SeoError.
pub type Result<T> = std::result::Result<T, SeoError>;

impl SeoError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SeoError::InvalidInput(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SeoError::Config(msg.into())
    }

    /// Create a new upstream error.
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        SeoError::Upstream(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        SeoError::Timeout(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SeoError::Storage(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SeoError::NotFound(msg.into())
    }

    /// HTTP-style status class for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            SeoError::InvalidInput(_) => 400,
            SeoError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// A message that is safe to show to API clients.
    ///
    /// Validation and lookup failures carry their own message. Every other
    /// variant already holds the stable per-operation message chosen by the
    /// service layer, or a generic one for I/O and JSON failures.
    pub fn public_message(&self) -> &str {
        match self {
            SeoError::InvalidInput(msg)
            | SeoError::NotFound(msg)
            | SeoError::Upstream(msg)
            | SeoError::Timeout(msg)
            | SeoError::Storage(msg)
            | SeoError::Config(msg) => msg,
            SeoError::Io(_) | SeoError::Json(_) => "Internal server error",
        }
    }
}
