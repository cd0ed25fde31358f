//! Error types for Castboard

use thiserror::Error;

/// Errors raised while loading a roster of characters.
///
/// Rendering itself never fails; only the data feeding it can.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Roster file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Roster file is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A character has no usable name
    #[error("Character at index {index} has an empty name")]
    EmptyName { index: usize },
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
