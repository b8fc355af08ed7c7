//! Error types for corpuskit.
//!
//! The analysis functions themselves are total and never fail; errors only
//! surface at the boundary of the library, where configuration files and
//! corpora are read from disk or command line input is validated.
//!
//! # Examples
//!
//! ```
//! use corpuskit::error::{CorpusError, Result};
//!
//! fn check_ngram_size(n: usize) -> Result<()> {
//!     if n < 2 {
//!         return Err(CorpusError::invalid_argument("n-gram size must be at least 2"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_ngram_size(1).is_err());
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for corpuskit operations.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// I/O errors (reading corpora and configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (invalid values, unreadable files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A corpus file could not be turned into documents.
    #[error("Corpus error in {path}:{line}: {message}")]
    Corpus {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with CorpusError.
pub type Result<T> = std::result::Result<T, CorpusError>;

impl CorpusError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CorpusError::Config(msg.into())
    }

    /// Create a new corpus loading error pointing at a file and line.
    pub fn corpus<P: Into<PathBuf>, S: Into<String>>(path: P, line: usize, msg: S) -> Self {
        CorpusError::Corpus {
            path: path.into(),
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CorpusError::InvalidArgument(msg.into())
    }
}
