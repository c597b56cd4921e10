//! Use-case tests against the in-memory credential store
//!
//! Times are injected, so the lockout scenarios run deterministically.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::AuthError;
use crate::infra::memory::MemAccountStore;

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::with_secret("test-secret-key"))
}

fn at(minute: i64, second: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + minute * 60 + second, 0).unwrap()
}

fn register_input(email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}

async fn seed(store: &MemAccountStore, email: &str, password: &str) -> AccountId {
    let use_case = RegisterUseCase::new(Arc::new(store.clone()));
    let output = use_case
        .execute(register_input(email, password))
        .await
        .unwrap();
    output.account_id
}

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_fields_is_validation_failure() {
        let store = MemAccountStore::new();
        let use_case = RegisterUseCase::new(Arc::new(store));

        let mut input = register_input("ada@example.com", "correct horse");
        input.last_name = "   ".to_string();

        let err = use_case.execute(input).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingFields));
    }

    #[tokio::test]
    async fn test_new_account_has_zeroed_counters_and_no_plaintext() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;

        let account = store.get(&id).unwrap();
        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.last_failed_login.is_none());
        assert!(!account.is_admin);
        assert_ne!(account.password_hash.as_phc_string(), "correct horse");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_domain_failure() {
        let store = MemAccountStore::new();
        let first_id = seed(&store, "ada@example.com", "correct horse").await;
        let first_hash = store.get(&first_id).unwrap().password_hash;

        let use_case = RegisterUseCase::new(Arc::new(store.clone()));
        let err = use_case
            .execute(register_input("ada@example.com", "other password"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AlreadyExists));

        // First account untouched
        assert_eq!(store.get(&first_id).unwrap().password_hash, first_hash);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let store = MemAccountStore::new();
        let use_case = RegisterUseCase::new(Arc::new(store));

        let err = use_case
            .execute(register_input("not-an-email", "correct horse"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }
}

mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_email_is_domain_failure() {
        let store = MemAccountStore::new();
        let use_case = LoginUseCase::new(Arc::new(store), config());

        let err = use_case
            .execute(login_input("ghost@example.com", "whatever!"), at(0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UnknownEmail));
    }

    #[tokio::test]
    async fn test_missing_fields_is_validation_failure() {
        let store = MemAccountStore::new();
        let use_case = LoginUseCase::new(Arc::new(store), config());

        let err = use_case
            .execute(login_input("ada@example.com", "  "), at(0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingFields));
    }

    #[tokio::test]
    async fn test_wrong_password_increments_counter() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        let use_case = LoginUseCase::new(Arc::new(store.clone()), config());

        let now = at(0, 0);
        let err = use_case
            .execute(login_input("ada@example.com", "wrong horse"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongPassword { attempts_left: 2 }));

        let account = store.get(&id).unwrap();
        assert_eq!(account.failed_login_attempts, 1);
        assert_eq!(account.last_failed_login, Some(now));
    }

    #[tokio::test]
    async fn test_successful_login_resets_counters_and_issues_token() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        let use_case = LoginUseCase::new(Arc::new(store.clone()), config());

        // One failure first, so the reset is observable
        let _ = use_case
            .execute(login_input("ada@example.com", "wrong horse"), at(0, 0))
            .await
            .unwrap_err();

        let output = use_case
            .execute(login_input("ada@example.com", "correct horse"), at(1, 0))
            .await
            .unwrap();
        assert!(!output.token.is_empty());
        assert_eq!(output.account.failed_login_attempts, 0);

        let account = store.get(&id).unwrap();
        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.last_failed_login.is_none());
    }

    #[tokio::test]
    async fn test_lockout_scenario() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        let use_case = LoginUseCase::new(Arc::new(store.clone()), config());

        // Two prior failures on record
        store.record_failed_login(&id, at(0, 0)).await.unwrap();
        store.record_failed_login(&id, at(0, 0)).await.unwrap();

        // Third wrong password reaches the threshold: attemptsLeft 0,
        // but this attempt itself is not reported as locked
        let err = use_case
            .execute(login_input("ada@example.com", "wrong horse"), at(0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongPassword { attempts_left: 0 }));
        assert_eq!(store.get(&id).unwrap().failed_login_attempts, 3);

        // One minute later, even the correct password is denied and the
        // counters stay put
        let err = use_case
            .execute(login_input("ada@example.com", "correct horse"), at(1, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountLocked { minutes_left: 14 }));
        let account = store.get(&id).unwrap();
        assert_eq!(account.failed_login_attempts, 3);
        assert_eq!(account.last_failed_login, Some(at(0, 0)));

        // Sixteen minutes after the last failure the window has expired:
        // counters clear lazily and the correct password succeeds
        let output = use_case
            .execute(login_input("ada@example.com", "correct horse"), at(16, 0))
            .await
            .unwrap();
        assert!(!output.token.is_empty());
        let account = store.get(&id).unwrap();
        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.last_failed_login.is_none());
    }

    #[tokio::test]
    async fn test_expired_window_with_wrong_password_starts_over() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        let use_case = LoginUseCase::new(Arc::new(store.clone()), config());

        store.record_failed_login(&id, at(0, 0)).await.unwrap();
        store.record_failed_login(&id, at(0, 0)).await.unwrap();
        store.record_failed_login(&id, at(0, 0)).await.unwrap();

        // Window expired; counters reset before comparison, then the
        // wrong password counts as the first failure of a new run
        let err = use_case
            .execute(login_input("ada@example.com", "wrong horse"), at(20, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongPassword { attempts_left: 2 }));
        assert_eq!(store.get(&id).unwrap().failed_login_attempts, 1);
    }

    #[tokio::test]
    async fn test_stale_over_threshold_record_resets() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        let use_case = LoginUseCase::new(Arc::new(store.clone()), config());

        // Stale record beyond the threshold (window long expired)
        for _ in 0..5 {
            store.record_failed_login(&id, at(0, 0)).await.unwrap();
        }

        let err = use_case
            .execute(login_input("ada@example.com", "wrong horse"), at(60, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WrongPassword { attempts_left: 2 }));
    }
}

mod change_password_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_account_is_domain_failure() {
        let store = MemAccountStore::new();
        let use_case = ChangePasswordUseCase::new(Arc::new(store));

        let err = use_case
            .execute(ChangePasswordInput {
                account_id: AccountId::new(),
                old_password: "correct horse".to_string(),
                new_password: "new password".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_old_password_mismatch_leaves_hash_and_counters() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        store.record_failed_login(&id, at(0, 0)).await.unwrap();
        let before = store.get(&id).unwrap();

        let use_case = ChangePasswordUseCase::new(Arc::new(store.clone()));
        let err = use_case
            .execute(ChangePasswordInput {
                account_id: id,
                old_password: "wrong horse".to_string(),
                new_password: "new password".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::OldPasswordMismatch));

        let after = store.get(&id).unwrap();
        assert_eq!(after.password_hash, before.password_hash);
        assert_eq!(after.failed_login_attempts, 1);
    }

    #[tokio::test]
    async fn test_short_new_password_is_rejected() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        let before = store.get(&id).unwrap();

        let use_case = ChangePasswordUseCase::new(Arc::new(store.clone()));
        let err = use_case
            .execute(ChangePasswordInput {
                account_id: id,
                old_password: "correct horse".to_string(),
                new_password: "seven77".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordTooShort));

        assert_eq!(
            store.get(&id).unwrap().password_hash,
            before.password_hash
        );
    }

    #[tokio::test]
    async fn test_change_password_does_not_touch_counters() {
        let store = MemAccountStore::new();
        let id = seed(&store, "ada@example.com", "correct horse").await;
        store.record_failed_login(&id, at(0, 0)).await.unwrap();

        let use_case = ChangePasswordUseCase::new(Arc::new(store.clone()));
        use_case
            .execute(ChangePasswordInput {
                account_id: id,
                old_password: "correct horse".to_string(),
                new_password: "brand new password".to_string(),
            })
            .await
            .unwrap();

        let account = store.get(&id).unwrap();
        assert_eq!(account.failed_login_attempts, 1);
        assert_eq!(account.last_failed_login, Some(at(0, 0)));

        // New password logs in (and only then do the counters clear)
        let login = LoginUseCase::new(Arc::new(store.clone()), config());
        let output = login
            .execute(
                login_input("ada@example.com", "brand new password"),
                at(1, 0),
            )
            .await
            .unwrap();
        assert!(!output.token.is_empty());
        assert_eq!(store.get(&id).unwrap().failed_login_attempts, 0);
    }
}
