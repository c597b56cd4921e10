//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account store
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountStore {
    async fn insert(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                first_name,
                last_name,
                email,
                password_hash,
                is_admin,
                failed_login_attempts,
                last_failed_login,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.is_admin)
        .bind(account.failed_login_attempts as i32)
        .bind(account.last_failed_login)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                first_name,
                last_name,
                email,
                password_hash,
                is_admin,
                failed_login_attempts,
                last_failed_login,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                first_name,
                last_name,
                email,
                password_hash,
                is_admin,
                failed_login_attempts,
                last_failed_login,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn record_failed_login(
        &self,
        account_id: &AccountId,
        now: DateTime<Utc>,
    ) -> AuthResult<u32> {
        // Single-statement increment: concurrent failures serialize in
        // the database and every one of them counts.
        let (count,): (i32,) = sqlx::query_as(
            r#"
            UPDATE accounts
            SET failed_login_attempts = failed_login_attempts + 1,
                last_failed_login = $2,
                updated_at = $2
            WHERE account_id = $1
            RETURNING failed_login_attempts
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u32)
    }

    async fn clear_failed_logins(&self, account_id: &AccountId) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET failed_login_attempts = 0,
                last_failed_login = NULL,
                updated_at = $2
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_password_hash(
        &self,
        account_id: &AccountId,
        hash: &HashedPassword,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET password_hash = $2,
                updated_at = $3
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(hash.as_phc_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    is_admin: bool,
    failed_login_attempts: i32,
    last_failed_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Corrupt stored password hash: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::from_db(self.email),
            password_hash,
            is_admin: self.is_admin,
            failed_login_attempts: self.failed_login_attempts.max(0) as u32,
            last_failed_login: self.last_failed_login,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
