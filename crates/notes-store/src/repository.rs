//! Repository traits implemented by every storage backend.
//!
//! Handlers hold `Arc<dyn …Repository>` handles, so the Postgres and
//! in-memory backends are interchangeable at composition time.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{NewNote, NewUser, NoteRow, NoteUpdate, UserRow};

/// Owner-scoped note persistence.
#[async_trait]
pub trait NotesRepository: Send + Sync {
    /// Insert a note and return its assigned id.
    async fn add_note(&self, note: NewNote) -> StoreResult<Uuid>;

    /// List all notes owned by `owner`, most recently created first.
    async fn get_notes(&self, owner: Uuid) -> StoreResult<Vec<NoteRow>>;

    /// Fetch a single note. Fails with `NoteNotFound` if absent.
    async fn get_note_by_id(&self, id: Uuid) -> StoreResult<NoteRow>;

    /// Replace a note's content and bump `updated_at`.
    async fn edit_note_by_id(&self, id: Uuid, update: NoteUpdate) -> StoreResult<()>;

    /// Delete a note. Fails with `NoteNotFound` if absent.
    async fn delete_note_by_id(&self, id: Uuid) -> StoreResult<()>;

    /// Fail with `NoteNotFound` if the note is absent, `NotNoteOwner` if it
    /// belongs to someone else.
    async fn verify_note_owner(&self, id: Uuid, owner: Uuid) -> StoreResult<()>;
}

/// User account persistence.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a user and return the assigned id. Fails with `UsernameTaken`
    /// if the username is already registered.
    async fn add_user(&self, user: NewUser) -> StoreResult<Uuid>;

    /// Fetch a user by id. Fails with `UserNotFound` if absent.
    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<UserRow>;

    /// Fetch a user by username, or `None` if absent.
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>>;

    /// Fail with `UsernameTaken` if the username is already registered.
    async fn verify_new_username(&self, username: &str) -> StoreResult<()>;
}

/// Refresh-token persistence.
#[async_trait]
pub trait AuthenticationsRepository: Send + Sync {
    /// Register a refresh token.
    async fn add_refresh_token(&self, token: &str) -> StoreResult<()>;

    /// Fail with `RefreshTokenNotFound` if the token is not registered.
    async fn verify_refresh_token(&self, token: &str) -> StoreResult<()>;

    /// Remove a refresh token. Fails with `RefreshTokenNotFound` if it was
    /// never registered.
    async fn delete_refresh_token(&self, token: &str) -> StoreResult<()>;
}
