//! Configuration for the account service

use kf_shared::config::{AppConfig, AuthConfig, EmailConfig};

/// Configuration for the account service
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Token signing secret and registered clients
    pub auth: AuthConfig,
    /// Sender address and activation link base
    pub email: EmailConfig,
}

impl AccountServiceConfig {
    /// Extract the service configuration from the application config
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            auth: config.auth.clone(),
            email: config.email.clone(),
        }
    }

    /// Build the activation deep link for a token
    pub fn activation_link(&self, token: &str) -> String {
        format!(
            "{}/account/activate?token={}",
            self.email.client_base_url.trim_end_matches('/'),
            token
        )
    }
}
