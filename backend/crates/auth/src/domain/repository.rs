//! Repository Traits
//!
//! Interface to the credential store. Implementations live in the
//! infrastructure layer and must provide read-your-writes consistency
//! within a request.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::AuthResult;

/// Account repository trait
///
/// The failure-counter mutators are store-level primitives rather than
/// read-modify-write on the entity: two concurrent failed attempts must
/// both count, so the increment has to be serialized per record by the
/// store.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account
    async fn insert(&self, account: &Account) -> AuthResult<()>;

    /// Find an account by email (byte-wise match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Find an account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Atomically increment the failure counter and stamp the failure
    /// time; returns the post-increment count.
    async fn record_failed_login(
        &self,
        account_id: &AccountId,
        now: DateTime<Utc>,
    ) -> AuthResult<u32>;

    /// Zero the failure counter and clear the failure timestamp
    async fn clear_failed_logins(&self, account_id: &AccountId) -> AuthResult<()>;

    /// Replace the stored password hash; counters untouched
    async fn set_password_hash(
        &self,
        account_id: &AccountId,
        hash: &HashedPassword,
    ) -> AuthResult<()>;
}
