//! Mock email service implementation
//!
//! Logs activation messages instead of delivering them. Used in
//! development and as a stand-in sender in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use kf_core::errors::{DomainError, DomainResult};
use kf_core::services::email::{mask_email, ActivationEmail, EmailService};
use kf_shared::validation::validators;

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs messages instead of sending them
/// - Validates recipient addresses
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    sent_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            sent_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock service that fails every send
    pub fn failing() -> Self {
        Self {
            sent_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages sent
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.sent_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
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

        if self.simulate_failure {
            warn!(to = %mask_email(to), "Mock email service simulating failure");
            return Err(DomainError::Internal {
                message: "Simulated email delivery failure".to_string(),
            });
        }

        let count = self.sent_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(to),
            from = %from,
            name = %email.name,
            link = %email.activation_link,
            message_number = count,
            "Activation email sent (mock)"
        );

        Ok(())
    }
}
