//! Account repository trait defining the interface for account persistence.
//!
//! The store is addressed through `{field, value}` predicates rather than
//! backend-specific query objects, so implementations can range from an
//! in-memory map to a relational database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::account::{Account, AccountRecord};
use crate::errors::DomainError;

/// Field of the account record a predicate can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Id,
    Username,
    Email,
}

impl AccountField {
    /// Column name in the backing store
    pub fn column(&self) -> &'static str {
        match self {
            AccountField::Id => "id",
            AccountField::Username => "username",
            AccountField::Email => "email",
        }
    }
}

/// Value bound to a predicate field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A single `{field, value}` lookup predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: AccountField,
    pub value: FieldValue,
}

impl Predicate {
    /// Creates a predicate for an arbitrary field
    pub fn new(field: AccountField, value: impl Into<FieldValue>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Predicate matching an account by id
    pub fn id(id: i64) -> Self {
        Self::new(AccountField::Id, id)
    }

    /// Predicate matching an account by username
    pub fn username(username: impl Into<String>) -> Self {
        Self::new(AccountField::Username, username.into())
    }

    /// Predicate matching an account by email
    pub fn email(email: impl Into<String>) -> Self {
        Self::new(AccountField::Email, email.into())
    }
}

/// Partial update applied to accounts matching a predicate
///
/// Absent fields are left untouched by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub password_hash: Option<String>,
    pub active: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<i64>,
}

impl AccountChanges {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.password_hash.is_none()
            && self.active.is_none()
            && self.updated_at.is_none()
            && self.updated_by.is_none()
    }

    /// Change set that activates an account, stamped with the acting id
    pub fn activation(updated_by: i64) -> Self {
        Self {
            active: Some(true),
            updated_at: Some(Utc::now()),
            updated_by: Some(updated_by),
            ..Default::default()
        }
    }
}

/// Repository trait for account persistence operations
///
/// Implementations handle the actual storage while maintaining the
/// abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find a single account matching the predicate
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account matches; absence is not an error here
    /// * `Err(DomainError)` - Store error occurred
    async fn find_one(&self, predicate: &Predicate) -> Result<Option<Account>, DomainError>;

    /// Persist a new account record; the store assigns the id
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account with its assigned id
    /// * `Err(DomainError)` - Creation failed; a uniqueness violation on
    ///   username or email surfaces as `AccountError::AlreadyExists`
    async fn create(&self, record: AccountRecord) -> Result<Account, DomainError>;

    /// Apply a partial update to all accounts matching the predicate
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows affected (zero when nothing matched)
    /// * `Err(DomainError)` - Store error occurred
    async fn update(
        &self,
        changes: AccountChanges,
        predicate: &Predicate,
    ) -> Result<u64, DomainError>;
}
