//! Account Entity
//!
//! One record per registered account: identity, salted password hash,
//! role flag, and the failed-login counters the lockout policy reads.
//!
//! Counter invariant: after a successful login or a policy-driven
//! reset, `failed_login_attempts == 0` and `last_failed_login == None`.
//! Between the lockout window's expiry and the next attempt the record
//! may still hold a stale non-zero pair; reset happens lazily on the
//! next access.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{account_id::AccountId, email::Email};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    pub first_name: String,
    pub last_name: String,
    /// Unique, stored case-sensitively
    pub email: Email,
    /// Salted Argon2id hash; the plaintext is never stored
    pub password_hash: HashedPassword,
    /// Role flag carried into issued tokens
    pub is_admin: bool,
    /// Consecutive failed login attempts
    pub failed_login_attempts: u32,
    /// Time of the most recent failed login
    pub last_failed_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with zeroed counters
    pub fn new(
        first_name: String,
        last_name: String,
        email: Email,
        password_hash: HashedPassword,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            first_name,
            last_name,
            email,
            password_hash,
            is_admin: false,
            failed_login_attempts: 0,
            last_failed_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a failed login attempt
    pub fn record_failed_login(&mut self, now: DateTime<Utc>) {
        self.failed_login_attempts += 1;
        self.last_failed_login = Some(now);
        self.updated_at = now;
    }

    /// Zero the failure counters (successful login or window expiry)
    pub fn clear_failed_logins(&mut self, now: DateTime<Utc>) {
        self.failed_login_attempts = 0;
        self.last_failed_login = None;
        self.updated_at = now;
    }

    /// Replace the password hash (password change path; counters untouched)
    pub fn set_password_hash(&mut self, hash: HashedPassword, now: DateTime<Utc>) {
        self.password_hash = hash;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn account() -> Account {
        let hash = ClearTextPassword::new("correct horse".to_string())
            .unwrap()
            .hash()
            .unwrap();
        Account::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            Email::new("ada@example.com").unwrap(),
            hash,
        )
    }

    #[test]
    fn test_new_account_has_zeroed_counters() {
        let account = account();
        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.last_failed_login.is_none());
        assert!(!account.is_admin);
    }

    #[test]
    fn test_record_and_clear_failed_logins() {
        let mut account = account();
        let now = Utc::now();

        account.record_failed_login(now);
        account.record_failed_login(now);
        assert_eq!(account.failed_login_attempts, 2);
        assert_eq!(account.last_failed_login, Some(now));

        account.clear_failed_logins(now);
        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.last_failed_login.is_none());
    }
}
