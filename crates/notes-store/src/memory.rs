//! In-memory store for development and black-box tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewNote, NewUser, NoteRow, NoteUpdate, UserRow};
use crate::repository::{AuthenticationsRepository, NotesRepository, UsersRepository};

/// Mutex-guarded map store.
///
/// Locks are held only for the synchronous map operation, never across an
/// await point, so the store is safe to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemStore {
    notes: Mutex<HashMap<Uuid, NoteRow>>,
    users: Mutex<HashMap<Uuid, UserRow>>,
    refresh_tokens: Mutex<HashSet<String>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotesRepository for MemStore {
    async fn add_note(&self, note: NewNote) -> StoreResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = NoteRow {
            id,
            title: note.title,
            body: note.body,
            tags: note.tags,
            owner: note.owner,
            created_at: now,
            updated_at: now,
        };

        self.notes.lock().expect("notes lock poisoned").insert(id, row);
        Ok(id)
    }

    async fn get_notes(&self, owner: Uuid) -> StoreResult<Vec<NoteRow>> {
        let notes = self.notes.lock().expect("notes lock poisoned");
        let mut rows: Vec<NoteRow> = notes.values().filter(|n| n.owner == owner).cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_note_by_id(&self, id: Uuid) -> StoreResult<NoteRow> {
        self.notes
            .lock()
            .expect("notes lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn edit_note_by_id(&self, id: Uuid, update: NoteUpdate) -> StoreResult<()> {
        let mut notes = self.notes.lock().expect("notes lock poisoned");
        let row = notes.get_mut(&id).ok_or(StoreError::NoteNotFound(id))?;

        row.title = update.title;
        row.body = update.body;
        row.tags = update.tags;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_note_by_id(&self, id: Uuid) -> StoreResult<()> {
        self.notes
            .lock()
            .expect("notes lock poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn verify_note_owner(&self, id: Uuid, owner: Uuid) -> StoreResult<()> {
        let notes = self.notes.lock().expect("notes lock poisoned");
        let row = notes.get(&id).ok_or(StoreError::NoteNotFound(id))?;

        if row.owner != owner {
            return Err(StoreError::NotNoteOwner(id));
        }
        Ok(())
    }
}

#[async_trait]
impl UsersRepository for MemStore {
    async fn add_user(&self, user: NewUser) -> StoreResult<Uuid> {
        let mut users = self.users.lock().expect("users lock poisoned");

        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken(user.username));
        }

        let id = Uuid::new_v4();
        users.insert(
            id,
            UserRow {
                id,
                username: user.username,
                fullname: user.fullname,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<UserRow> {
        self.users
            .lock()
            .expect("users lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StoreError::UserNotFound(id))
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<UserRow>> {
        Ok(self
            .users
            .lock()
            .expect("users lock poisoned")
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn verify_new_username(&self, username: &str) -> StoreResult<()> {
        let users = self.users.lock().expect("users lock poisoned");
        if users.values().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthenticationsRepository for MemStore {
    async fn add_refresh_token(&self, token: &str) -> StoreResult<()> {
        self.refresh_tokens
            .lock()
            .expect("refresh_tokens lock poisoned")
            .insert(token.to_string());
        Ok(())
    }

    async fn verify_refresh_token(&self, token: &str) -> StoreResult<()> {
        if !self
            .refresh_tokens
            .lock()
            .expect("refresh_tokens lock poisoned")
            .contains(token)
        {
            return Err(StoreError::RefreshTokenNotFound);
        }
        Ok(())
    }

    async fn delete_refresh_token(&self, token: &str) -> StoreResult<()> {
        if !self
            .refresh_tokens
            .lock()
            .expect("refresh_tokens lock poisoned")
            .remove(token)
        {
            return Err(StoreError::RefreshTokenNotFound);
        }
        Ok(())
    }
}
