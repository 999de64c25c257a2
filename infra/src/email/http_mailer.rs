//! HTTP email service implementation
//!
//! Sends transactional mail through a provider's HTTP API (Mailgun-style
//! `/messages` endpoint with API-key basic auth). Failures propagate once
//! to the caller; there is no retry logic at this layer.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use kf_core::errors::{DomainError, DomainResult};
use kf_core::services::email::{mask_email, ActivationEmail, EmailService};
use kf_shared::validation::validators;

use crate::InfrastructureError;

/// HTTP email provider configuration
#[derive(Debug, Clone)]
pub struct HttpEmailConfig {
    /// Base URL of the provider API (e.g. `https://api.mailprovider.com/v3/mg.keyfort.io`)
    pub api_base_url: String,
    /// Provider API key
    pub api_key: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl HttpEmailConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_base_url = std::env::var("EMAIL_API_BASE_URL")
            .map_err(|_| InfrastructureError::Config("EMAIL_API_BASE_URL not set".to_string()))?;
        let api_key = std::env::var("EMAIL_API_KEY")
            .map_err(|_| InfrastructureError::Config("EMAIL_API_KEY not set".to_string()))?;

        Ok(Self {
            api_base_url,
            api_key,
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// HTTP email service implementation
pub struct HttpEmailService {
    client: reqwest::Client,
    config: HttpEmailConfig,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    pub fn new(config: HttpEmailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(api_base_url = %config.api_base_url, "HTTP email service initialized");
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(HttpEmailConfig::from_env()?)
    }
}

/// Build the subject and plain-text body of an activation message
fn build_activation_message(email: &ActivationEmail) -> (String, String) {
    let subject = "Activate your KeyFort account".to_string();
    let body = format!(
        "Hi {},\n\n\
         Your account has been created. Follow the link below to activate it:\n\n\
         {}\n\n\
         If you did not expect this email, you can safely ignore it.\n",
        email.name, email.activation_link
    );
    (subject, body)
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send_account_activation(
        &self,
        to: &str,
        from: &str,
        email: &ActivationEmail,
    ) -> DomainResult<()> {
        if !validators::is_valid_email(to) {
            return Err(DomainError::Validation {
                message: format!("Invalid recipient address: {}", mask_email(to)),
            });
        }

        let (subject, body) = build_activation_message(email);
        let url = format!(
            "{}/messages",
            self.config.api_base_url.trim_end_matches('/')
        );

        debug!(to = %mask_email(to), "Submitting activation email");
        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&[
                ("from", from),
                ("to", to),
                ("subject", subject.as_str()),
                ("text", body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::from(InfrastructureError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::from(InfrastructureError::Email(format!(
                "Provider returned {}: {}",
                status, detail
            ))));
        }

        let message_id = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("id").and_then(|id| id.as_str()).map(String::from));

        info!(
            target: "email_service",
            provider = "http",
            to = %mask_email(to),
            message_id = message_id.as_deref().unwrap_or("unknown"),
            "Activation email sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_message_contains_name_and_link() {
        let email = ActivationEmail {
            name: "Alice".to_string(),
            activation_link: "https://app.keyfort.io/account/activate?token=abc".to_string(),
        };

        let (subject, body) = build_activation_message(&email);
        assert!(subject.contains("Activate"));
        assert!(body.contains("Hi Alice"));
        assert!(body.contains("https://app.keyfort.io/account/activate?token=abc"));
    }

    #[test]
    fn test_config_default_timeout() {
        let config = HttpEmailConfig {
            api_base_url: "https://api.example.com/v3/mg".to_string(),
            api_key: "key".to_string(),
            request_timeout_secs: 30,
        };
        let service = HttpEmailService::new(config).unwrap();
        assert_eq!(service.config.request_timeout_secs, 30);
    }
}
