//! Route definitions for the HTTP API.

pub mod authentications;
pub mod health;
pub mod notes;
pub mod users;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .merge(users::routes())
        .merge(authentications::routes())
        .with_state(state)
}

/// JSON success envelope: `{"status":"success", message?, data?}`.
///
/// The failure counterpart lives in [`crate::error`]; together they are the
/// only body shapes the API produces for its own responses.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Always `"success"`.
    pub status: &'static str,
    /// Optional human-readable confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Envelope carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    /// Attach a confirmation message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    /// Envelope carrying only a confirmation message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }
}
