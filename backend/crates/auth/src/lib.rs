//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, lockout policy, repository traits
//! - `application/` - Use cases, token issuer, configuration
//! - `infra/` - Credential store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Account registration with email uniqueness
//! - Login issuing signed, time-bounded bearer tokens (1 hour)
//! - Failed-login lockout: 3 failures lock the account for 15 minutes,
//!   cleared lazily on the next attempt after the window expires
//! - Self-service password change (independent of the lockout counters)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt per hash
//! - Constant-time verification; no comparison at all while locked
//! - Response payloads never carry the password hash
//! - Stateless bearer tokens; expiry is the only invalidation path

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemAccountStore;
pub use infra::postgres::PgAccountStore;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
