//! Error types for notes-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using notes-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in note store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No note with this identifier exists at the time of the operation
    #[error("Note not found: {0}")]
    NotFound(NoteId),

    /// A field value fails a domain constraint
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No unused identifier was found within the redraw budget
    #[error("Could not allocate a note identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: u32 },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
