//! Credential verification module
//!
//! Hashes account secrets and verifies presented secrets against stored
//! digests.

mod hasher;

pub use hasher::PasswordHasher;
