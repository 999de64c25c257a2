//! Domain-specific error types for account and token operations
//!
//! Error messages stay deliberately generic where detail would leak:
//! a failed credential check never reveals whether the username or the
//! secret was wrong.

use thiserror::Error;

/// Account lifecycle errors
#[derive(Error, Debug)]
pub enum AccountError {
    /// Unknown username or wrong secret; the two cases are
    /// indistinguishable to the caller by design.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account not found")]
    NotFound,

    #[error("Account already exists")]
    AlreadyExists,

    /// A store write reported no effect (zero rows affected).
    #[error("Operation had no effect: {operation}")]
    OperationFailed { operation: String },
}

/// Token validation and generation errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,

    #[error("Token expired")]
    Expired,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    GenerationFailed,
}
