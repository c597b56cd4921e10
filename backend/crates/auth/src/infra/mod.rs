//! Infrastructure Layer
//!
//! Credential store implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemAccountStore;
pub use postgres::PgAccountStore;
