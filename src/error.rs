//! Error types for the Cadence library.
//!
//! All fallible operations return [`CadenceError`]. Only building the index can
//! fail; lookups and phrase analysis absorb misses into their result values.
//!
//! # Examples
//!
//! ```
//! use cadence::error::{CadenceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CadenceError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Cadence operations.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// I/O errors (reading dictionary files, phrase lists)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary source could not be parsed
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Tokenizer construction errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Meter compilation errors
    #[error("Meter error: {0}")]
    Meter(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with CadenceError.
pub type Result<T> = std::result::Result<T, CadenceError>;

impl CadenceError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        CadenceError::Dictionary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CadenceError::Analysis(msg.into())
    }

    /// Create a new meter error.
    pub fn meter<S: Into<String>>(msg: S) -> Self {
        CadenceError::Meter(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CadenceError::InvalidArgument(msg.into())
    }
}
