//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL store
pub fn auth_router(repo: PgAccountStore, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create an Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/change-password", post(handlers::change_password::<R>))
        .with_state(state)
}
