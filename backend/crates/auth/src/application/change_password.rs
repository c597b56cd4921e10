//! Change Password Use Case
//!
//! Self-service password change. Deliberately independent of the
//! lockout counters: a wrong old password here neither increments nor
//! resets anything; lockout applies to the login endpoint only.

use std::sync::Arc;

use platform::password::{ClearTextPassword, MIN_PASSWORD_LENGTH, PasswordPolicyError};

use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub account_id: AccountId,
    pub old_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ChangePasswordInput) -> AuthResult<()> {
        let account = self
            .repo
            .find_by_id(&input.account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Old password must match before the new one is even inspected
        let old_matches = match ClearTextPassword::new(input.old_password) {
            Ok(password) => account.password_hash.verify(&password),
            Err(_) => false,
        };
        if !old_matches {
            return Err(AuthError::OldPasswordMismatch);
        }

        let new_password = ClearTextPassword::new(input.new_password).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => AuthError::PasswordTooShort,
            other => AuthError::InvalidInput(other.to_string()),
        })?;
        if new_password.char_count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }

        let new_hash = new_password.hash()?;
        self.repo
            .set_password_hash(&account.account_id, &new_hash)
            .await?;

        tracing::info!(account_id = %account.account_id, "Password changed");

        Ok(())
    }
}
