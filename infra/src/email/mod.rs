//! Email sender implementations
//!
//! Implementations of the core `EmailService` trait:
//! - `HttpEmailService` - transactional mail over an HTTP provider API
//! - `MockEmailService` - logging implementation for development and testing

pub mod http_mailer;
pub mod mock_mailer;

pub use http_mailer::{HttpEmailConfig, HttpEmailService};
pub use mock_mailer::MockEmailService;
