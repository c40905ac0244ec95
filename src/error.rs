//! Error types for alphadex.
//!
//! Only fatal conditions are represented here. Per-file problems during the
//! map and reduce phases (an unreadable input, an output file that cannot be
//! created) are logged and counted by the workers instead of being returned.
//!
//! # Examples
//!
//! ```
//! use alphadex::error::{AlphadexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AlphadexError::config("num_reducers must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for alphadex operations.
#[derive(Error, Debug)]
pub enum AlphadexError {
    /// I/O errors (manifest access, output directory creation, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or truncated manifest
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Invalid argument passed to a library call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Worker thread could not be spawned or panicked before joining
    #[error("Thread join error: {0}")]
    ThreadJoin(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with AlphadexError.
pub type Result<T> = std::result::Result<T, AlphadexError>;

impl AlphadexError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AlphadexError::Config(msg.into())
    }

    /// Create a new manifest error.
    pub fn manifest<S: Into<String>>(msg: S) -> Self {
        AlphadexError::Manifest(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AlphadexError::InvalidArgument(msg.into())
    }

    /// Create a new thread join error.
    pub fn thread_join<S: Into<String>>(msg: S) -> Self {
        AlphadexError::ThreadJoin(msg.into())
    }
}
