//! Token claims for JWT-based authorization.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "keyfort";

/// JWT audience
pub const JWT_AUDIENCE: &str = "keyfort-api";

/// Grant authorizing a one-time account activation
pub const SCOPE_ACTIVATE_ACCOUNT: &str = "account:activate";

/// Grant authorizing API access on behalf of an account
pub const SCOPE_API_ACCESS: &str = "api:access";

/// Claims structure for JWT payload
///
/// Tokens are self-contained: validity is derived entirely from the
/// signature and the embedded expiry, never from server-side state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id); absent on tokens not tied to an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issuing client id
    pub cid: String,

    /// Scopes granted to the bearer
    pub grants: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims expiring `expires_in_secs` from now
    pub fn new(
        subject: Option<i64>,
        client_id: &str,
        expires_in_secs: i64,
        grants: &[String],
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expires_in_secs);

        Self {
            sub: subject.map(|id| id.to_string()),
            cid: client_id.to_string(),
            grants: grants.to_vec(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the subject account id, if the token carries one
    pub fn subject_id(&self) -> Option<i64> {
        self.sub.as_ref().and_then(|s| s.parse().ok())
    }

    /// Checks whether the claims carry a given grant
    pub fn has_grant(&self, scope: &str) -> bool {
        self.grants.iter().any(|g| g == scope)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
