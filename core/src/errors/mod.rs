//! Domain-specific error types and error handling.

mod types;

pub use types::{AccountError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// HTTP-style status hint for the presentation layer.
    ///
    /// The HTTP layer itself is a separate concern; this only records the
    /// status class each error kind maps to (404 for a missing account,
    /// 401 for failed credential or token checks, and so on).
    pub fn status_hint(&self) -> u16 {
        match self {
            DomainError::Validation { .. } => 400,
            DomainError::Database { .. } | DomainError::Internal { .. } => 500,
            DomainError::Account(AccountError::InvalidCredentials) => 401,
            DomainError::Account(AccountError::NotFound) => 404,
            DomainError::Account(AccountError::AlreadyExists) => 409,
            DomainError::Account(AccountError::OperationFailed { .. }) => 500,
            DomainError::Token(_) => 401,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hints() {
        assert_eq!(
            DomainError::from(AccountError::NotFound).status_hint(),
            404
        );
        assert_eq!(
            DomainError::from(AccountError::InvalidCredentials).status_hint(),
            401
        );
        assert_eq!(
            DomainError::from(AccountError::AlreadyExists).status_hint(),
            409
        );
        assert_eq!(DomainError::from(TokenError::Expired).status_hint(), 401);
        assert_eq!(
            DomainError::Validation {
                message: "bad input".to_string()
            }
            .status_hint(),
            400
        );
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let message = AccountError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("username not found"));
        assert!(!message.to_lowercase().contains("wrong"));
    }
}
