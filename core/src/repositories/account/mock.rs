//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::{Account, AccountRecord};
use crate::errors::{AccountError, DomainError};

use super::trait_::{AccountChanges, AccountField, AccountRepository, FieldValue, Predicate};

/// In-memory account repository for testing
///
/// Enforces the same username/email uniqueness the relational store does
/// and assigns monotonically increasing ids.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: AtomicI64,
    update_calls: AtomicU64,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            update_calls: AtomicU64::new(0),
        }
    }

    /// Number of accounts currently stored
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Number of times `update` has been called
    pub fn update_calls(&self) -> u64 {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn matches(account: &Account, predicate: &Predicate) -> bool {
        match (&predicate.field, &predicate.value) {
            (AccountField::Id, FieldValue::Int(id)) => account.id == *id,
            (AccountField::Username, FieldValue::Text(username)) => {
                account.username == *username
            }
            (AccountField::Email, FieldValue::Text(email)) => account.email == *email,
            _ => false,
        }
    }

    fn apply(account: &mut Account, changes: &AccountChanges) {
        if let Some(username) = &changes.username {
            account.username = username.clone();
        }
        if let Some(email) = &changes.email {
            account.email = email.clone();
        }
        if let Some(first_name) = &changes.first_name {
            account.first_name = first_name.clone();
        }
        if let Some(password_hash) = &changes.password_hash {
            account.password_hash = password_hash.clone();
        }
        if let Some(active) = changes.active {
            account.active = active;
        }
        if let Some(updated_at) = changes.updated_at {
            account.updated_at = updated_at;
        }
        if let Some(updated_by) = changes.updated_by {
            account.updated_by = updated_by;
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_one(&self, predicate: &Predicate) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| Self::matches(a, predicate))
            .cloned())
    }

    async fn create(&self, record: AccountRecord) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        // The relational store enforces these as unique constraints
        if accounts
            .values()
            .any(|a| a.username == record.username || a.email == record.email)
        {
            return Err(AccountError::AlreadyExists.into());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let account = record.into_account(id);
        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update(
        &self,
        changes: AccountChanges,
        predicate: &Predicate,
    ) -> Result<u64, DomainError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        if changes.is_empty() {
            return Err(DomainError::Validation {
                message: "Empty change set".to_string(),
            });
        }

        let mut accounts = self.accounts.write().await;
        let mut affected = 0;
        for account in accounts.values_mut() {
            if Self::matches(account, predicate) {
                Self::apply(account, &changes);
                affected += 1;
            }
        }
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record(username: &str, email: &str) -> AccountRecord {
        let now = Utc::now();
        AccountRecord {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "digest".to_string(),
            first_name: "Test".to_string(),
            active: false,
            created_at: now,
            updated_at: now,
            created_by: 1,
            updated_by: 1,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MockAccountRepository::new();

        let first = repo.create(sample_record("a", "a@x.com")).await.unwrap();
        let second = repo.create(sample_record("b", "b@x.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_create_enforces_uniqueness() {
        let repo = MockAccountRepository::new();
        repo.create(sample_record("alice", "alice@x.com"))
            .await
            .unwrap();

        let same_username = repo.create(sample_record("alice", "other@x.com")).await;
        assert!(matches!(
            same_username,
            Err(DomainError::Account(AccountError::AlreadyExists))
        ));

        let same_email = repo.create(sample_record("other", "alice@x.com")).await;
        assert!(matches!(
            same_email,
            Err(DomainError::Account(AccountError::AlreadyExists))
        ));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_find_one_by_each_field() {
        let repo = MockAccountRepository::new();
        let created = repo
            .create(sample_record("alice", "alice@x.com"))
            .await
            .unwrap();

        let by_id = repo.find_one(&Predicate::id(created.id)).await.unwrap();
        assert_eq!(by_id.unwrap().username, "alice");

        let by_username = repo.find_one(&Predicate::username("alice")).await.unwrap();
        assert!(by_username.is_some());

        let by_email = repo.find_one(&Predicate::email("alice@x.com")).await.unwrap();
        assert!(by_email.is_some());

        let missing = repo.find_one(&Predicate::username("nobody")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_changes_and_counts_rows() {
        let repo = MockAccountRepository::new();
        let created = repo
            .create(sample_record("alice", "alice@x.com"))
            .await
            .unwrap();

        let affected = repo
            .update(AccountChanges::activation(9), &Predicate::id(created.id))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let account = repo
            .find_one(&Predicate::id(created.id))
            .await
            .unwrap()
            .unwrap();
        assert!(account.active);
        assert_eq!(account.updated_by, 9);

        let missed = repo
            .update(AccountChanges::activation(9), &Predicate::id(999))
            .await
            .unwrap();
        assert_eq!(missed, 0);
        assert_eq!(repo.update_calls(), 2);
    }
}
