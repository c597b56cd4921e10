//! Register Use Case
//!
//! Creates a new account with zeroed lockout counters.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordPolicyError};

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub account_id: AccountId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // All four fields are required; blank counts as missing
        if input.first_name.trim().is_empty()
            || input.last_name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.trim().is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(&input.email)?;

        // Uniqueness by email; a hit is a business outcome, not a fault
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let password = ClearTextPassword::new(input.password).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => AuthError::MissingFields,
            other => AuthError::InvalidInput(other.to_string()),
        })?;
        let password_hash = password.hash()?;

        let account = Account::new(input.first_name, input.last_name, email, password_hash);
        self.repo.insert(&account).await?;

        tracing::info!(account_id = %account.account_id, "Account registered");

        Ok(RegisterOutput {
            account_id: account.account_id,
        })
    }
}
