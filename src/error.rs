//! Error types for the engtag library.
//!
//! The tagging path itself never fails: blank input, unknown words and
//! missing transitions all resolve to a defined fallback. Errors only come
//! from the edges of the crate (reading lexicon files, decoding snapshots,
//! parsing configuration or tag names), and all of them are represented by
//! [`TaggerError`].
//!
//! # Examples
//!
//! ```
//! use engtag::error::{Result, TaggerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TaggerError::invalid_argument("unknown tag: xyz"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for engtag operations.
#[derive(Error, Debug)]
pub enum TaggerError {
    /// I/O errors (lexicon files, snapshots, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon or transition table errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Binary snapshot errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid argument (unknown tag name, bad option value)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TaggerError.
pub type Result<T> = std::result::Result<T, TaggerError>;

impl TaggerError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TaggerError::Lexicon(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        TaggerError::Snapshot(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TaggerError::InvalidArgument(msg.into())
    }
}

impl From<bincode::Error> for TaggerError {
    fn from(error: bincode::Error) -> Self {
        TaggerError::Snapshot(error.to_string())
    }
}
