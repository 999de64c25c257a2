//! Authentication and token signing configuration

use serde::{Deserialize, Serialize};

/// A registered OAuth-style client allowed to request tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Client identifier
    pub id: String,

    /// Scopes granted to tokens issued for this client
    pub grants: Vec<String>,

    /// Access token expiry in seconds for this client
    pub access_token_expiry_secs: i64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(id: impl Into<String>, grants: Vec<String>, access_token_expiry_secs: i64) -> Self {
        Self {
            id: id.into(),
            grants,
            access_token_expiry_secs,
        }
    }
}

/// Token signing and client registry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared secret used to sign access and activation tokens
    pub token_secret: String,

    /// Client id stamped on activation tokens issued at account creation
    pub activation_client_id: String,

    /// Activation token expiry in seconds
    pub activation_token_expiry_secs: i64,

    /// Registered clients
    pub clients: Vec<ClientConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::from("development-secret-please-change-in-production"),
            activation_client_id: String::from("keyfort-web"),
            activation_token_expiry_secs: 86400, // 24 hours
            clients: vec![ClientConfig::new(
                "keyfort-web",
                vec![String::from("api:access")],
                900, // 15 minutes
            )],
        }
    }
}

impl AuthConfig {
    /// Create a new authentication configuration with a signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let token_secret = std::env::var("TOKEN_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let activation_client_id =
            std::env::var("ACTIVATION_CLIENT_ID").unwrap_or_else(|_| "keyfort-web".to_string());
        let activation_token_expiry_secs = std::env::var("ACTIVATION_TOKEN_EXPIRY_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);

        Self {
            token_secret,
            activation_client_id,
            activation_token_expiry_secs,
            ..Default::default()
        }
    }

    /// Look up a registered client by id
    pub fn find_client(&self, client_id: &str) -> Option<&ClientConfig> {
        self.clients.iter().find(|c| c.id == client_id)
    }

    /// Register an additional client
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.clients.push(client);
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.token_secret == "development-secret-please-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.activation_token_expiry_secs, 86400);
        assert!(config.is_using_default_secret());
        assert!(config.find_client("keyfort-web").is_some());
        assert!(config.find_client("unknown").is_none());
    }

    #[test]
    fn test_auth_config_with_client() {
        let config = AuthConfig::new("my-secret").with_client(ClientConfig::new(
            "mobile",
            vec![String::from("api:access")],
            1800,
        ));

        assert!(!config.is_using_default_secret());
        let client = config.find_client("mobile").unwrap();
        assert_eq!(client.access_token_expiry_secs, 1800);
    }
}
