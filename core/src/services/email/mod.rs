//! Email sender contract used by the account service
//!
//! The account service only needs to hand off an activation message;
//! delivery mechanics live behind this trait in the infrastructure layer.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Content of an account activation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEmail {
    /// Recipient's given name, used in the greeting
    pub name: String,
    /// Deep link that completes the activation
    pub activation_link: String,
}

/// Email sender trait for transactional account mail
///
/// Implementations include an HTTP mail API client and a mock for
/// development and testing.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an account activation email
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient address
    /// * `from` - Sender address
    /// * `email` - Activation message content
    async fn send_account_activation(
        &self,
        to: &str,
        from: &str,
        email: &ActivationEmail,
    ) -> DomainResult<()>;
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the domain.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("b@x.io"), "b***@x.io");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
