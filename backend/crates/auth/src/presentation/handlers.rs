//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AccountView, ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let input = RegisterInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "User created successfully.".to_string(),
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    // The clock enters here; everything below is deterministic in it
    let output = use_case.execute(input, Utc::now()).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "User logged in successfully.".to_string(),
        token: output.token,
        user_data: AccountView::from(&output.account),
    }))
}

// ============================================================================
// Change Password
// ============================================================================

/// POST /api/auth/change-password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone());

    let input = ChangePasswordInput {
        account_id: AccountId::from_uuid(req.user_id),
        old_password: req.old_password,
        new_password: req.new_password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Password changed successfully".to_string(),
    }))
}
