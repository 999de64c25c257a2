//! Shared mocks for account service tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::{DomainError, DomainResult};
use crate::services::email::{ActivationEmail, EmailService};

/// A message captured by the recording mailer
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub from: String,
    pub name: String,
    pub activation_link: String,
}

/// Email service that records every message instead of sending it
pub struct RecordingEmailService {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    fail: bool,
}

impl RecordingEmailService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A mailer whose every send fails
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send_account_activation(
        &self,
        to: &str,
        from: &str,
        email: &ActivationEmail,
    ) -> DomainResult<()> {
        if self.fail {
            return Err(DomainError::Internal {
                message: "Simulated email delivery failure".to_string(),
            });
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            from: from.to_string(),
            name: email.name.clone(),
            activation_link: email.activation_link.clone(),
        });
        Ok(())
    }
}
