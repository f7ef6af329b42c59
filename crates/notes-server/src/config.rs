//! Server configuration from environment variables.
//!
//! The configuration is assembled exactly once at startup and threaded into
//! every component through `AppState`; nothing reads the environment after
//! this point.

use std::env;
use std::net::IpAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Server port to listen on.
    pub port: u16,
    /// HS256 signing key for access tokens.
    pub access_token_key: String,
    /// HS256 signing key for refresh tokens.
    pub refresh_token_key: String,
    /// Access-token lifetime in seconds.
    pub access_token_age_secs: u64,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `ACCESS_TOKEN_KEY`: access-token signing key
    /// - `REFRESH_TOKEN_KEY`: refresh-token signing key
    ///
    /// Optional:
    /// - `HOST`: bind address (default: "0.0.0.0")
    /// - `PORT`: server port (default: 5000)
    /// - `ACCESS_TOKEN_AGE`: access-token lifetime in seconds (default: 1800)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_token_key = env::var("ACCESS_TOKEN_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("ACCESS_TOKEN_KEY".to_string()))?;

        let refresh_token_key = env::var("REFRESH_TOKEN_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("REFRESH_TOKEN_KEY".to_string()))?;

        let host = match env::var("HOST") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST".to_string(),
                reason: format!("{} is not an IP address", raw),
            })?,
            Err(_) => IpAddr::from([0, 0, 0, 0]),
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let access_token_age_secs = env::var("ACCESS_TOKEN_AGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1800);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            host,
            port,
            access_token_key,
            refresh_token_key,
            access_token_age_secs,
            log_level,
            cors_allowed_origins,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_keys_and_defaults() {
        // SAFETY: This test is not run in parallel with other tests that
        // touch the token key environment variables.
        unsafe {
            env::remove_var("ACCESS_TOKEN_KEY");
            env::remove_var("REFRESH_TOKEN_KEY");
        }

        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::MissingEnvVar(v)) if v == "ACCESS_TOKEN_KEY"
        ));

        // SAFETY: see above.
        unsafe {
            env::set_var("ACCESS_TOKEN_KEY", "access-secret");
            env::set_var("REFRESH_TOKEN_KEY", "refresh-secret");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.access_token_age_secs, 1800);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_allowed_origins, "*");
        assert_eq!(config.socket_addr().port(), 5000);

        // SAFETY: see above.
        unsafe {
            env::remove_var("ACCESS_TOKEN_KEY");
            env::remove_var("REFRESH_TOKEN_KEY");
        }
    }
}
