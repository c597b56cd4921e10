//! Domain Layer
//!
//! Entities, value objects, the lockout policy, and repository traits.

pub mod entity;
pub mod lockout;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use lockout::{LockoutPolicy, Verdict};
pub use repository::AccountRepository;
