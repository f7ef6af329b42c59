//! User registration and lookup routes:
//! - POST /users - Register a user
//! - GET /users/{id} - Public profile for a user

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use uuid::Uuid;

use notes_core::{RegisterUserPayload, User, validate_register_user_payload};
use notes_store::NewUser;

use crate::auth;
use crate::error::ApiResult;
use crate::routes::Envelope;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Data payload for POST /users.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    /// The registered user's ID.
    pub user_id: Uuid,
}

/// Data payload for GET /users/{id}.
#[derive(Debug, Serialize)]
pub struct SingleUser {
    pub user: User,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /users - Register a new user.
///
/// The password is argon2-hashed before it reaches the store; duplicate
/// usernames are rejected with 400.
///
/// # Response
///
/// - 201 Created: `{ "status": "success", "message": ..., "data": { "userId": ... } }`
/// - 400 Bad Request: payload failed validation or username taken
async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> ApiResult<(StatusCode, Json<Envelope<UserCreated>>)> {
    validate_register_user_payload(&payload)?;
    state.users().verify_new_username(&payload.username).await?;

    let password_hash = auth::hash_password(&payload.password)?;
    let user_id = state
        .users()
        .add_user(NewUser {
            username: payload.username.clone(),
            fullname: payload.fullname,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user_id, username = %payload.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(UserCreated { user_id }).with_message("user added successfully")),
    ))
}

/// GET /users/{id} - Public profile for a user.
///
/// Never exposes the password hash.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Envelope<SingleUser>>> {
    let row = state.users().get_user_by_id(id).await?;

    Ok(Json(Envelope::data(SingleUser {
        user: User {
            id: row.id,
            username: row.username,
            fullname: row.fullname,
        },
    })))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(add_user))
        .route("/users/{id}", get(get_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_created_uses_camel_case() {
        let json = serde_json::to_string(&UserCreated {
            user_id: Uuid::nil(),
        })
        .unwrap();
        assert!(json.contains("userId"));
    }

    #[test]
    fn test_single_user_omits_password_hash() {
        let payload = SingleUser {
            user: User {
                id: Uuid::nil(),
                username: "alice".to_string(),
                fullname: "Alice Smith".to_string(),
            },
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("password"));
    }
}
