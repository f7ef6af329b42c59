//! Request payload structs and pure shape validators.
//!
//! Handlers deserialize a payload, run its validator, and only then touch a
//! repository. Validators are synchronous and side-effect free; they return
//! the first violation found.

use serde::Deserialize;
use thiserror::Error;

/// Maximum accepted title length, in characters.
pub const MAX_TITLE_LEN: usize = 255;

/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LEN: usize = 50;

/// A payload shape violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{0} is required and must not be empty")]
    MissingField(&'static str),

    /// A field exceeds its maximum length.
    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Username contains characters outside `[A-Za-z0-9_]`.
    #[error("username may only contain letters, digits, and underscores")]
    InvalidUsername,

    /// A tag entry is empty.
    #[error("tags must not contain empty entries")]
    EmptyTag,
}

/// Payload for creating or updating a note.
#[derive(Debug, Clone, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload for registering a user.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub fullname: String,
}

/// Payload for logging in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Payload carrying a refresh token (renewal and logout).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenPayload {
    #[serde(default)]
    pub refresh_token: String,
}

/// Validate a note payload.
pub fn validate_note_payload(payload: &NotePayload) -> Result<(), ValidationError> {
    if payload.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    if payload.title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title",
            max: MAX_TITLE_LEN,
        });
    }
    if payload.body.trim().is_empty() {
        return Err(ValidationError::MissingField("body"));
    }
    if payload.tags.iter().any(|t| t.trim().is_empty()) {
        return Err(ValidationError::EmptyTag);
    }
    Ok(())
}

/// Validate a user registration payload.
pub fn validate_register_user_payload(
    payload: &RegisterUserPayload,
) -> Result<(), ValidationError> {
    if payload.username.trim().is_empty() {
        return Err(ValidationError::MissingField("username"));
    }
    if payload.username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username",
            max: MAX_USERNAME_LEN,
        });
    }
    if !payload
        .username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::InvalidUsername);
    }
    if payload.password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    if payload.fullname.trim().is_empty() {
        return Err(ValidationError::MissingField("fullname"));
    }
    Ok(())
}

/// Validate a login payload.
pub fn validate_login_payload(payload: &LoginPayload) -> Result<(), ValidationError> {
    if payload.username.trim().is_empty() {
        return Err(ValidationError::MissingField("username"));
    }
    if payload.password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    Ok(())
}

/// Validate a refresh-token payload.
pub fn validate_refresh_token_payload(
    payload: &RefreshTokenPayload,
) -> Result<(), ValidationError> {
    if payload.refresh_token.trim().is_empty() {
        return Err(ValidationError::MissingField("refreshToken"));
    }
    Ok(())
}
