//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Username is already registered.
    #[error("username is already taken: {0}")]
    UsernameTaken(String),

    /// The caller does not own the note.
    #[error("you are not entitled to access note {0}")]
    NotNoteOwner(Uuid),

    /// Refresh token is not registered in the store.
    #[error("refresh token is not valid")]
    RefreshTokenNotFound,

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
