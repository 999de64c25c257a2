//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying signed, expiring tokens
///
/// Stateless: a token is valid iff its signature checks out under the
/// presented secret and its expiry has not passed. No server-side session
/// storage is consulted.
pub struct TokenService {
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        Self { config }
    }

    /// Generates a signed token for a subject
    ///
    /// Pure function of its inputs and the current time.
    ///
    /// # Arguments
    ///
    /// * `subject` - Account id the token is scoped to, if any
    /// * `client_id` - Issuing client id embedded in the token
    /// * `secret` - Signing secret
    /// * `expires_in_secs` - Lifetime from issuance
    /// * `grants` - Scopes granted to the bearer
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(TokenError::GenerationFailed)` - Encoding failed
    pub fn generate(
        &self,
        subject: Option<i64>,
        client_id: &str,
        secret: &str,
        expires_in_secs: i64,
        grants: &[String],
    ) -> DomainResult<String> {
        let mut claims = Claims::new(subject, client_id, expires_in_secs, grants);
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();

        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|_| TokenError::GenerationFailed.into())
    }

    /// Verifies a token and returns its decoded claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the token is valid
    /// * `Err(TokenError::Expired)` - Token is past its expiry
    /// * `Err(TokenError::Invalid)` - Bad signature, issuer, audience, or format
    pub fn verify(&self, token: &str, secret: &str) -> DomainResult<Claims> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = true;
        // Zero leeway: expiry is an exact boundary
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                TokenError::Expired.into()
            } else {
                TokenError::Invalid.into()
            }
        })
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new(TokenServiceConfig::default())
    }
}
