//! Application Configuration
//!
//! Configuration for the Auth application layer. The token-signing
//! secret comes from the process environment at startup; a missing
//! secret is startup-fatal, never a per-request error.

use chrono::Duration;
use thiserror::Error;

use crate::domain::lockout::LockoutPolicy;

/// Environment variable holding the token-signing secret
pub const TOKEN_SECRET_ENV: &str = "AUTH_TOKEN_SECRET";

/// Configuration load errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{TOKEN_SECRET_ENV} must be set")]
    MissingTokenSecret,
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub token_secret: Vec<u8>,
    /// Issued-token validity window
    pub token_ttl: Duration,
    /// Failed-login lockout policy
    pub lockout: LockoutPolicy,
}

impl AuthConfig {
    /// Create config with an explicit secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            token_ttl: Duration::hours(1),
            lockout: LockoutPolicy::default(),
        }
    }

    /// Load from the environment; fails without a signing secret
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_secret_var(std::env::var(TOKEN_SECRET_ENV).ok())
    }

    /// Build from an optional secret value; empty counts as absent
    fn from_secret_var(secret: Option<String>) -> Result<Self, ConfigError> {
        match secret {
            Some(secret) if !secret.is_empty() => Ok(Self::with_secret(secret)),
            _ => Err(ConfigError::MissingTokenSecret),
        }
    }
}
