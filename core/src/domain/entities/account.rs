//! Account entity representing an identity record in the KeyFort system.

use chrono::{DateTime, Utc};
use kf_shared::validation::{validators, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account entity backed by a row in the account store
///
/// An account is created inactive by an administrative actor and becomes
/// active exactly once, when a valid activation token for its id is
/// presented. Username and email are unique across all accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Login name, unique across all accounts
    pub username: String,

    /// Email address, unique across all accounts
    pub email: String,

    /// Salted one-way digest of the account secret
    pub password_hash: String,

    /// Given name used in correspondence
    pub first_name: String,

    /// Whether the account has been activated
    pub active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,

    /// Actor that created the account
    pub created_by: i64,

    /// Actor that last updated the account
    pub updated_by: i64,
}

impl Account {
    /// Checks if the account is awaiting activation
    pub fn is_pending(&self) -> bool {
        !self.active
    }

    /// Marks the account as active
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }
}

/// Input for creating a new account
///
/// Transient: carries the plaintext secret from the caller to the hasher
/// and is never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .finish()
    }
}

impl Validate for NewAccount {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::length_between(&self.username, 3, 64) {
            errors.add_error("username", "must be 3-64 characters", "INVALID_LENGTH");
        } else if !validators::is_valid_username(&self.username) {
            errors.add_error("username", "contains invalid characters", "INVALID_FORMAT");
        }

        if !validators::is_valid_email(&self.email) {
            errors.add_error("email", "invalid email address", "INVALID_EMAIL");
        }

        if !validators::length_between(&self.password, 8, 128) {
            errors.add_error("password", "must be 8-128 characters", "INVALID_LENGTH");
        }

        if !validators::not_empty(&self.first_name) {
            errors.add_error("first_name", "must not be empty", "REQUIRED_FIELD");
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}

/// Fully stamped account row handed to the store on creation
///
/// Carries everything except the id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: i64,
    pub updated_by: i64,
}

impl AccountRecord {
    /// Builds the account entity once the store has assigned an id
    pub fn into_account(self, id: i64) -> Account {
        Account {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            created_by: self.created_by,
            updated_by: self.updated_by,
        }
    }
}

/// Partial update to an existing account
///
/// Absent fields are left untouched. A present `password` is hashed by the
/// service before it reaches the store.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AccountUpdate {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for AccountUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountUpdate")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        let now = Utc::now();
        Account {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            first_name: "Alice".to_string(),
            active: false,
            created_at: now,
            updated_at: now,
            created_by: 1,
            updated_by: 1,
        }
    }

    #[test]
    fn test_new_account_is_pending() {
        let account = sample_account();
        assert!(account.is_pending());
        assert!(!account.active);
    }

    #[test]
    fn test_activation_transition() {
        let mut account = sample_account();
        account.activate();
        assert!(account.active);
        assert!(!account.is_pending());
    }

    #[test]
    fn test_record_into_account() {
        let now = Utc::now();
        let record = AccountRecord {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "digest".to_string(),
            first_name: "Bob".to_string(),
            active: false,
            created_at: now,
            updated_at: now,
            created_by: 7,
            updated_by: 7,
        };

        let account = record.into_account(42);
        assert_eq!(account.id, 42);
        assert_eq!(account.username, "bob");
        assert_eq!(account.created_by, 7);
        assert!(!account.active);
    }

    #[test]
    fn test_new_account_validation() {
        let valid = NewAccount {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct-horse".to_string(),
            first_name: "Alice".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = NewAccount {
            username: "al".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            first_name: "".to_string(),
        };
        let errors = invalid.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 4);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let new_account = NewAccount {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2-hunter2".to_string(),
            first_name: "Alice".to_string(),
        };
        let debug = format!("{:?}", new_account);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));

        let update = AccountUpdate {
            id: 1,
            password: Some("hunter2-hunter2".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", update);
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_account_serialization() {
        let account = sample_account();
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
