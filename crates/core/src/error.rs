//! Error types for BrewMap

use thiserror::Error;

/// Main error type for BrewMap data operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for BrewMap data operations
pub type Result<T> = std::result::Result<T, Error>;
