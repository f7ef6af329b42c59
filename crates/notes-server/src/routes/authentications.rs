//! Authentication routes:
//! - POST /authentications - Log in, issuing access + refresh tokens
//! - PUT /authentications - Renew an access token from a refresh token
//! - DELETE /authentications - Log out, revoking a refresh token

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Serialize;

use notes_core::{
    LoginPayload, RefreshTokenPayload, validate_login_payload, validate_refresh_token_payload,
};

use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::routes::Envelope;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Data payload for POST /authentications.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Data payload for PUT /authentications.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewedToken {
    pub access_token: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /authentications - Log in.
///
/// An unknown username and a wrong password produce the same 401 message, so
/// the endpoint does not confirm which usernames exist.
///
/// # Response
///
/// - 201 Created: `{ "status": "success", "data": { "accessToken", "refreshToken" } }`
/// - 400 Bad Request: payload failed validation
/// - 401 Unauthorized: credential mismatch
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> ApiResult<(StatusCode, Json<Envelope<TokenPair>>)> {
    validate_login_payload(&payload)?;

    let user = state
        .users()
        .get_user_by_username(&payload.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid username or password".to_string()))?;

    let valid = auth::verify_password(&payload.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "invalid username or password".to_string(),
        ));
    }

    let config = state.config();
    let access_token = auth::create_access_token(
        user.id,
        &config.access_token_key,
        config.access_token_age_secs,
    )?;
    let refresh_token = auth::create_refresh_token(user.id, &config.refresh_token_key)?;

    state
        .authentications()
        .add_refresh_token(&refresh_token)
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok((
        StatusCode::CREATED,
        Json(
            Envelope::data(TokenPair {
                access_token,
                refresh_token,
            })
            .with_message("authentication added successfully"),
        ),
    ))
}

/// PUT /authentications - Renew an access token.
///
/// The refresh token must carry a valid signature and still be registered in
/// the store; either failure is a 400.
async fn renew(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenPayload>,
) -> ApiResult<Json<Envelope<RenewedToken>>> {
    validate_refresh_token_payload(&payload)?;

    let config = state.config();
    let claims = auth::verify_refresh_token(&payload.refresh_token, &config.refresh_token_key)?;

    state
        .authentications()
        .verify_refresh_token(&payload.refresh_token)
        .await?;

    let access_token = auth::create_access_token(
        claims.sub,
        &config.access_token_key,
        config.access_token_age_secs,
    )?;

    Ok(Json(Envelope::data(RenewedToken { access_token })))
}

/// DELETE /authentications - Log out.
///
/// Removes the refresh token from the store; renewals with it fail from this
/// point on. The access token keeps working until it expires.
async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenPayload>,
) -> ApiResult<Json<Envelope<()>>> {
    validate_refresh_token_payload(&payload)?;

    state
        .authentications()
        .delete_refresh_token(&payload.refresh_token)
        .await?;

    Ok(Json(Envelope::message("refresh token deleted successfully")))
}

/// Build authentication routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/authentications", post(login).put(renew).delete(logout))
}
