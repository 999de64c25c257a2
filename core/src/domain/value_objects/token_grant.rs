//! Access token response handed back to callers.

use serde::{Deserialize, Serialize};

/// Signed access token plus its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    /// JWT access token
    pub access_token: String,

    /// Token type, always "Bearer"
    pub token_type: String,

    /// Expiry time in seconds from issuance
    pub expires_in: i64,

    /// Scopes embedded in the token
    pub grants: Vec<String>,
}

impl TokenGrant {
    /// Creates a new token grant
    pub fn new(access_token: String, expires_in: i64, grants: Vec<String>) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            grants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_grant_creation() {
        let grant = TokenGrant::new(
            "signed.jwt.token".to_string(),
            900,
            vec!["api:access".to_string()],
        );

        assert_eq!(grant.token_type, "Bearer");
        assert_eq!(grant.expires_in, 900);
        assert_eq!(grant.grants, vec!["api:access".to_string()]);
    }

    #[test]
    fn test_token_grant_serialization() {
        let grant = TokenGrant::new("token".to_string(), 900, vec![]);
        let json = serde_json::to_string(&grant).unwrap();
        let deserialized: TokenGrant = serde_json::from_str(&json).unwrap();
        assert_eq!(grant, deserialized);
    }
}
