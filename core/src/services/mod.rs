//! Business services orchestrating the domain layer.

pub mod account;
pub mod email;
pub mod password;
pub mod token;

pub use account::{AccountService, AccountServiceConfig};
pub use email::{ActivationEmail, EmailService};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
