//! Token Issuer
//!
//! Mints signed, time-bounded bearer tokens (HS256 JWT) carrying the
//! account identity and role flag. Expiry is the only invalidation
//! path; the server keeps no session state. Verification is the
//! consuming middleware's concern, not this subsystem's.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::account_id::AccountId;

/// Token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Admin role flag
    pub adm: bool,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Bearer token issuer
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer from the process-wide signing secret
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a signed token for an account
    pub fn issue(
        &self,
        account_id: &AccountId,
        is_admin: bool,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: account_id.to_string(),
            adm: is_admin,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        tracing::debug!(account_id = %account_id, "Issuing bearer token");

        encode(&Header::default(), &claims, &self.encoding_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    fn decode_claims(token: &str, secret: &[u8]) -> Claims {
        decode::<Claims>(token, &DecodingKey::from_secret(secret), &Validation::default())
            .unwrap()
            .claims
    }

    #[test]
    fn test_issue_carries_identity_and_role() {
        let issuer = TokenIssuer::new(b"test-secret-key", Duration::hours(1));
        let account_id = AccountId::new();

        let token = issuer.issue(&account_id, true, Utc::now()).unwrap();
        let claims = decode_claims(&token, b"test-secret-key");

        assert_eq!(claims.sub, account_id.to_string());
        assert!(claims.adm);
    }

    #[test]
    fn test_validity_window_is_one_hour() {
        let issuer = TokenIssuer::new(b"test-secret-key", Duration::hours(1));
        let token = issuer
            .issue(&AccountId::new(), false, Utc::now())
            .unwrap();
        let claims = decode_claims(&token, b"test-secret-key");

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let issuer = TokenIssuer::new(b"test-secret-key", Duration::hours(1));
        let token = issuer
            .issue(&AccountId::new(), false, Utc::now())
            .unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
