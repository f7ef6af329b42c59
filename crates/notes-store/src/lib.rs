//! notes-store: persistence for notes, users, and refresh tokens.
//!
//! Two interchangeable backends implement the repository traits:
//! - [`PgStore`]: PostgreSQL via sqlx, with embedded idempotent migrations.
//! - [`MemStore`]: mutex-guarded maps for development and black-box tests.
//!
//! Route handlers depend on the traits, never on a concrete backend.

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod schema;

pub use error::{StoreError, StoreResult};
pub use memory::MemStore;
pub use models::{NewNote, NewUser, NoteRow, NoteUpdate, UserRow};
pub use postgres::{PgStore, StoreConfig};
pub use repository::{AuthenticationsRepository, NotesRepository, UsersRepository};
