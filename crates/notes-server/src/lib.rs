//! notes-server: HTTP API server for the notes application.
//!
//! This crate provides:
//! - REST endpoints for notes (owner-scoped CRUD), users, and authentications
//! - JWT bearer authentication with access/refresh tokens
//! - A single error-normalization boundary producing stable JSON envelopes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers receive their dependencies (repositories + configuration) through
//! [`state::AppState`]; there is no global lookup anywhere.

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
