//! Login Use Case
//!
//! Credential verification composed with the lockout policy:
//! load the record, ask the policy for a verdict, compare the password
//! only on a non-locked path, persist the resulting counters, and issue
//! a bearer token on success.
//!
//! `execute` takes the wall-clock time explicitly so the lockout window
//! is deterministic under test.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::account::Account;
use crate::domain::lockout::Verdict;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    /// The authenticated account, counters already cleared
    pub account: Account,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput, now: DateTime<Utc>) -> AuthResult<LoginOutput> {
        if input.email.trim().is_empty() || input.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        // A malformed email cannot name an account
        let email = Email::new(&input.email).map_err(|_| AuthError::UnknownEmail)?;

        let mut account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        // Lockout verdict comes before any password comparison
        match self.config.lockout.decide(
            account.failed_login_attempts,
            account.last_failed_login,
            now,
        ) {
            Verdict::Locked { minutes_left } => {
                return Err(AuthError::AccountLocked { minutes_left });
            }
            Verdict::ProceedAfterReset => {
                // Window expired: zero the counters before comparing
                self.repo.clear_failed_logins(&account.account_id).await?;
                account.clear_failed_logins(now);
            }
            Verdict::Proceed => {}
        }

        // An over-length password can never match; it still counts as a
        // failed comparison. Blank input was rejected above.
        let matches = match ClearTextPassword::new(input.password) {
            Ok(password) => account.password_hash.verify(&password),
            Err(_) => false,
        };

        if !matches {
            // The store increments atomically; concurrent failures all count
            let failed_count = self
                .repo
                .record_failed_login(&account.account_id, now)
                .await?;
            let attempts_left = self.config.lockout.attempts_left(failed_count);
            return Err(AuthError::WrongPassword { attempts_left });
        }

        self.repo.clear_failed_logins(&account.account_id).await?;
        account.clear_failed_logins(now);

        let issuer = TokenIssuer::new(&self.config.token_secret, self.config.token_ttl);
        let token = issuer.issue(&account.account_id, account.is_admin, now)?;

        tracing::info!(account_id = %account.account_id, "Account logged in");

        Ok(LoginOutput { token, account })
    }
}
