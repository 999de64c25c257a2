//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the KeyFort
//! backend. It provides concrete implementations for external services:
//!
//! - **Database**: MySQL account store using SQLx
//! - **Email**: transactional mail over an HTTP provider API, plus a
//!   mock sender for development and testing

pub mod database;
pub mod email;

use kf_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database {
                message: e.to_string(),
            },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_converts_to_domain_error() {
        let err = InfrastructureError::Email("delivery refused".to_string());
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::Internal { .. }));
        assert!(domain.to_string().contains("delivery refused"));
    }
}
