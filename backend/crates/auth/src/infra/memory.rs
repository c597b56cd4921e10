//! In-Memory Repository Implementation
//!
//! Backs the generic router in tests and local development. The mutex
//! serializes counter updates the same way the database does, so the
//! atomic-increment contract of the trait holds here too.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::{AuthError, AuthResult};

/// In-memory account store
#[derive(Clone, Default)]
pub struct MemAccountStore {
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
}

impl MemAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<std::sync::MutexGuard<'_, HashMap<Uuid, Account>>> {
        self.accounts
            .lock()
            .map_err(|_| AuthError::Internal("Account store lock poisoned".to_string()))
    }

    /// Snapshot an account for test assertions
    pub fn get(&self, account_id: &AccountId) -> Option<Account> {
        self.accounts
            .lock()
            .ok()?
            .get(account_id.as_uuid())
            .cloned()
    }
}

impl AccountRepository for MemAccountStore {
    async fn insert(&self, account: &Account) -> AuthResult<()> {
        let mut accounts = self.lock()?;
        if accounts
            .values()
            .any(|a| a.email.as_str() == account.email.as_str())
        {
            return Err(AuthError::AlreadyExists);
        }
        accounts.insert(*account.account_id.as_uuid(), account.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let accounts = self.lock()?;
        Ok(accounts
            .values()
            .find(|a| a.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let accounts = self.lock()?;
        Ok(accounts.get(account_id.as_uuid()).cloned())
    }

    async fn record_failed_login(
        &self,
        account_id: &AccountId,
        now: DateTime<Utc>,
    ) -> AuthResult<u32> {
        let mut accounts = self.lock()?;
        let account = accounts
            .get_mut(account_id.as_uuid())
            .ok_or(AuthError::AccountNotFound)?;
        account.record_failed_login(now);
        Ok(account.failed_login_attempts)
    }

    async fn clear_failed_logins(&self, account_id: &AccountId) -> AuthResult<()> {
        let mut accounts = self.lock()?;
        let account = accounts
            .get_mut(account_id.as_uuid())
            .ok_or(AuthError::AccountNotFound)?;
        account.clear_failed_logins(Utc::now());
        Ok(())
    }

    async fn set_password_hash(
        &self,
        account_id: &AccountId,
        hash: &HashedPassword,
    ) -> AuthResult<()> {
        let mut accounts = self.lock()?;
        let account = accounts
            .get_mut(account_id.as_uuid())
            .ok_or(AuthError::AccountNotFound)?;
        account.set_password_hash(hash.clone(), Utc::now());
        Ok(())
    }
}
