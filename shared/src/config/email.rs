//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Configuration for outbound email and activation links
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Address used as the sender of transactional email
    pub from_address: String,

    /// Base URL of the web client, used to build activation deep links
    pub client_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_address: String::from("no-reply@keyfort.io"),
            client_base_url: String::from("https://app.keyfort.io"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let from_address = std::env::var("EMAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "no-reply@keyfort.io".to_string());
        let client_base_url = std::env::var("CLIENT_BASE_URL")
            .unwrap_or_else(|_| "https://app.keyfort.io".to_string());

        Self {
            from_address,
            client_base_url,
        }
    }

    /// Set the sender address
    pub fn with_from_address(mut self, from: impl Into<String>) -> Self {
        self.from_address = from.into();
        self
    }

    /// Set the client base URL
    pub fn with_client_base_url(mut self, url: impl Into<String>) -> Self {
        self.client_base_url = url.into();
        self
    }
}
