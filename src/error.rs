//! Error types for the lancia library.
//!
//! All fallible operations in lancia return [`Result`], whose error type is
//! the [`LanciaError`] enum.
//!
//! # Examples
//!
//! ```
//! use lancia::error::{LanciaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LanciaError::invalid_input("empty trigger list"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lancia operations.
///
/// Analysis operations are pure once the resource bundle is loaded, so most
/// variants surface either bad caller-supplied data or a failure to load the
/// bundle at construction time.
#[derive(Error, Debug)]
pub enum LanciaError {
    /// I/O errors (resource file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Semantically invalid caller-supplied data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The resource bundle could not be loaded
    #[error("Resource error: {0}")]
    Resource(String),

    /// Analysis pipeline errors (tokenization, filtering, scoring)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LanciaError.
pub type Result<T> = std::result::Result<T, LanciaError>;

impl LanciaError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LanciaError::InvalidInput(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        LanciaError::Resource(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LanciaError::Analysis(msg.into())
    }
}
