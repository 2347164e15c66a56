//! Error types for playlist management

use thiserror::Error;

/// Playlist errors
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Index outside the valid range for the operation
    #[error("Index out of bounds: {index} (playlist length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// IO error while reading or writing a saved playlist
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed saved playlist record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
