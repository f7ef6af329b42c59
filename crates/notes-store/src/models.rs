//! Row models and insert/update inputs.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new note.
///
/// The store assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub owner: Uuid,
}

/// Replacement content for an existing note.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub fullname: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user.
///
/// `password_hash` is already hashed; plaintext never reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub fullname: String,
    pub password_hash: String,
}
