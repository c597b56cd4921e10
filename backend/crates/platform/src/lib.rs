//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no business knowledge:
//! - Password hashing (Argon2id) and constant-time verification

pub mod password;
