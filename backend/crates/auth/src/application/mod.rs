//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod config;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::TokenIssuer;
