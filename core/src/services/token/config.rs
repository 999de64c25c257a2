//! Configuration for the token service

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Issuer claim stamped on and required of every token
    pub issuer: String,
    /// Audience claim stamped on and required of every token
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}
