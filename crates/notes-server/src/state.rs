//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::{AuthenticationsRepository, NotesRepository, UsersRepository};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using
/// `State<AppState>`. Repositories are trait objects so the Postgres and
/// in-memory backends are interchangeable at composition time.
#[derive(Clone)]
pub struct AppState {
    notes: Arc<dyn NotesRepository>,
    users: Arc<dyn UsersRepository>,
    authentications: Arc<dyn AuthenticationsRepository>,
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create application state from explicit repository handles.
    pub fn new(
        notes: Arc<dyn NotesRepository>,
        users: Arc<dyn UsersRepository>,
        authentications: Arc<dyn AuthenticationsRepository>,
        config: ServerConfig,
    ) -> Self {
        Self {
            notes,
            users,
            authentications,
            config: Arc::new(config),
        }
    }

    /// Create application state from a single store implementing all three
    /// repositories.
    pub fn from_store<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: NotesRepository + UsersRepository + AuthenticationsRepository + 'static,
    {
        Self {
            notes: store.clone(),
            users: store.clone(),
            authentications: store,
            config: Arc::new(config),
        }
    }

    /// Get the notes repository.
    pub fn notes(&self) -> &dyn NotesRepository {
        self.notes.as_ref()
    }

    /// Get the users repository.
    pub fn users(&self) -> &dyn UsersRepository {
        self.users.as_ref()
    }

    /// Get the authentications repository.
    pub fn authentications(&self) -> &dyn AuthenticationsRepository {
        self.authentications.as_ref()
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
