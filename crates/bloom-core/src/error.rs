//! Error types for Bloom

use thiserror::Error;

/// The main error type for Bloom operations.
///
/// The simulation core itself is total over in-memory state and has no
/// fatal path; these variants cover the ambient surfaces that can fail
/// (config parsing, frame export).
#[derive(Debug, Error)]
pub enum BloomError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Bloom operations
pub type Result<T> = std::result::Result<T, BloomError>;
