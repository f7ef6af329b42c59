//! Authentication: JWT token management, password hashing, and the bearer
//! extractor that gates protected routes.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Access-token claims.
///
/// Audience/issuer/subject matching is deliberately not used; signature and
/// `exp` are the whole contract.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Owner's user ID.
    pub sub: Uuid,
    /// Issued at (unix timestamp).
    pub iat: usize,
    /// Expiration time (unix timestamp).
    pub exp: usize,
}

/// Refresh-token claims. No expiry; validity is signature plus presence in
/// the authentications store.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshClaims {
    /// Owner's user ID.
    pub sub: Uuid,
    /// Issued at (unix timestamp).
    pub iat: usize,
}

/// The authenticated identity a protected handler sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedOwner {
    /// Owner's user ID.
    pub id: Uuid,
}

/// Create an access token valid for `age_secs` seconds.
pub fn create_access_token(
    user_id: Uuid,
    secret: &str,
    age_secs: u64,
) -> Result<String, ApiError> {
    let iat = chrono::Utc::now().timestamp() as usize;
    let claims = AccessClaims {
        sub: user_id,
        iat,
        exp: iat + age_secs as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("failed to create access token: {}", e)))
}

/// Verify an access token's signature and expiry.
pub fn verify_access_token(token: &str, secret: &str) -> Result<AccessClaims, ApiError> {
    let token_data = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ApiError::Unauthorized(format!("invalid token: {}", e)))?;

    Ok(token_data.claims)
}

/// Create a refresh token.
pub fn create_refresh_token(user_id: Uuid, secret: &str) -> Result<String, ApiError> {
    let claims = RefreshClaims {
        sub: user_id,
        iat: chrono::Utc::now().timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("failed to create refresh token: {}", e)))
}

/// Verify a refresh token's signature.
///
/// A bad refresh token is a 400, not a 401: the caller is not trying to reach
/// a protected resource, it presented an invalid input to the renewal
/// endpoint.
pub fn verify_refresh_token(token: &str, secret: &str) -> Result<RefreshClaims, ApiError> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ApiError::BadRequest("refresh token is not valid".to_string()))?;

    Ok(token_data.claims)
}

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {}", e)))?;
    Ok(password_hash.to_string())
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

impl FromRequestParts<AppState> for AuthenticatedOwner {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Unauthorized("Authorization header must be Bearer <token>".to_string())
        })?;

        let token = token.trim();
        if token.is_empty() {
            return Err(ApiError::Unauthorized("empty bearer token".to_string()));
        }

        let claims = verify_access_token(token, &state.config().access_token_key)?;

        Ok(AuthenticatedOwner { id: claims.sub })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_12345";

    #[test]
    fn test_hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_access_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, SECRET, 1800).unwrap();
        let claims = verify_access_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp, claims.iat + 1800);
    }

    #[test]
    fn test_access_token_wrong_secret_rejected() {
        let token = create_access_token(Uuid::new_v4(), SECRET, 1800).unwrap();
        let result = verify_access_token(&token, "other-secret");
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_access_token_rejected() {
        // Craft a token whose exp is far enough in the past to clear the
        // verifier's default leeway.
        let iat = chrono::Utc::now().timestamp() as usize - 7200;
        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            iat,
            exp: iat + 600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = verify_access_token(&token, SECRET);
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_refresh_token(user_id, SECRET).unwrap();
        let claims = verify_refresh_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_refresh_token_wrong_secret_is_bad_request() {
        let token = create_refresh_token(Uuid::new_v4(), SECRET).unwrap();
        let result = verify_refresh_token(&token, "other-secret");
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_access_token("not.a.token", SECRET).is_err());
        assert!(verify_refresh_token("not.a.token", SECRET).is_err());
    }
}
