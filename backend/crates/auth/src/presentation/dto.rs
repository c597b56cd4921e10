//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::account::Account;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user_data: AccountView,
}

/// Safe projection of an account for response payloads
///
/// Deliberately excludes the password hash and the lockout counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: *account.account_id.as_uuid(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            is_admin: account.is_admin,
        }
    }
}

// ============================================================================
// Change Password
// ============================================================================

/// Change password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

// ============================================================================
// Generic envelope
// ============================================================================

/// Plain success/failure envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::email::Email;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_account_view_excludes_password_hash() {
        let hash = ClearTextPassword::new("correct horse".to_string())
            .unwrap()
            .hash()
            .unwrap();
        let account = Account::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            Email::new("ada@example.com").unwrap(),
            hash,
        );

        let view = AccountView::from(&account);
        let json = serde_json::to_string(&view).unwrap();

        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(json.contains("\"isAdmin\":false"));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("passwordHash"));
    }
}
