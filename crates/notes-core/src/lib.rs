//! notes-core: domain types and payload validation for the notes API.
//!
//! This crate is intentionally free of HTTP and storage concerns. It holds:
//! - the `Note` and `User` domain types shared across the workspace,
//! - the request payload structs handlers deserialize,
//! - pure validators that check payload shape before any service work runs.

pub mod types;
pub mod validate;

pub use types::{Note, User};
pub use validate::{
    LoginPayload, NotePayload, RefreshTokenPayload, RegisterUserPayload, ValidationError,
    validate_login_payload, validate_note_payload, validate_refresh_token_payload,
    validate_register_user_payload,
};
