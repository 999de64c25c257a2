//! MySQL implementation of the AccountRepository trait.
//!
//! Expects an `accounts` table with an auto-increment `id` primary key
//! and unique indexes on `username` and `email`; those indexes are the
//! final guard against duplicate accounts under concurrent creates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use kf_core::domain::entities::account::{Account, AccountRecord};
use kf_core::errors::{AccountError, DomainError};
use kf_core::repositories::{
    AccountChanges, AccountField, AccountRepository, FieldValue, Predicate,
};

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        Ok(Account {
            id: row
                .try_get("id")
                .map_err(|e| Self::column_error("id", &e))?,
            username: row
                .try_get("username")
                .map_err(|e| Self::column_error("username", &e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::column_error("email", &e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| Self::column_error("password_hash", &e))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| Self::column_error("first_name", &e))?,
            active: row
                .try_get("active")
                .map_err(|e| Self::column_error("active", &e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::column_error("created_at", &e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| Self::column_error("updated_at", &e))?,
            created_by: row
                .try_get("created_by")
                .map_err(|e| Self::column_error("created_by", &e))?,
            updated_by: row
                .try_get("updated_by")
                .map_err(|e| Self::column_error("updated_by", &e))?,
        })
    }

    fn column_error(column: &str, err: &sqlx::Error) -> DomainError {
        DomainError::Database {
            message: format!("Failed to get {}: {}", column, err),
        }
    }

    fn is_unique_violation(err: &sqlx::Error) -> bool {
        match err {
            sqlx::Error::Database(db) => db.is_unique_violation(),
            _ => false,
        }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_one(&self, predicate: &Predicate) -> Result<Option<Account>, DomainError> {
        let query = match predicate.field {
            AccountField::Id => {
                r#"
                SELECT id, username, email, password_hash, first_name,
                       active, created_at, updated_at, created_by, updated_by
                FROM accounts
                WHERE id = ?
                LIMIT 1
                "#
            }
            AccountField::Username => {
                r#"
                SELECT id, username, email, password_hash, first_name,
                       active, created_at, updated_at, created_by, updated_by
                FROM accounts
                WHERE username = ?
                LIMIT 1
                "#
            }
            AccountField::Email => {
                r#"
                SELECT id, username, email, password_hash, first_name,
                       active, created_at, updated_at, created_by, updated_by
                FROM accounts
                WHERE email = ?
                LIMIT 1
                "#
            }
        };

        let query = sqlx::query(query);
        let query = match &predicate.value {
            FieldValue::Int(value) => query.bind(*value),
            FieldValue::Text(value) => query.bind(value.clone()),
        };

        let result = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, record: AccountRecord) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                username, email, password_hash, first_name,
                active, created_at, updated_at, created_by, updated_by
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&record.username)
            .bind(&record.email)
            .bind(&record.password_hash)
            .bind(&record.first_name)
            .bind(record.active)
            .bind(record.created_at)
            .bind(record.updated_at)
            .bind(record.created_by)
            .bind(record.updated_by)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if Self::is_unique_violation(&e) {
                    DomainError::from(AccountError::AlreadyExists)
                } else {
                    DomainError::Database {
                        message: format!("Failed to create account: {}", e),
                    }
                }
            })?;

        let id = result.last_insert_id() as i64;
        Ok(record.into_account(id))
    }

    async fn update(
        &self,
        changes: AccountChanges,
        predicate: &Predicate,
    ) -> Result<u64, DomainError> {
        if changes.is_empty() {
            return Err(DomainError::Validation {
                message: "Empty change set".to_string(),
            });
        }

        let mut builder: QueryBuilder<MySql> = QueryBuilder::new("UPDATE accounts SET ");
        {
            let mut assignments = builder.separated(", ");
            if let Some(username) = &changes.username {
                assignments.push("username = ");
                assignments.push_bind_unseparated(username.clone());
            }
            if let Some(email) = &changes.email {
                assignments.push("email = ");
                assignments.push_bind_unseparated(email.clone());
            }
            if let Some(first_name) = &changes.first_name {
                assignments.push("first_name = ");
                assignments.push_bind_unseparated(first_name.clone());
            }
            if let Some(password_hash) = &changes.password_hash {
                assignments.push("password_hash = ");
                assignments.push_bind_unseparated(password_hash.clone());
            }
            if let Some(active) = changes.active {
                assignments.push("active = ");
                assignments.push_bind_unseparated(active);
            }
            if let Some(updated_at) = changes.updated_at {
                assignments.push("updated_at = ");
                assignments.push_bind_unseparated(updated_at);
            }
            if let Some(updated_by) = changes.updated_by {
                assignments.push("updated_by = ");
                assignments.push_bind_unseparated(updated_by);
            }
        }

        builder.push(" WHERE ");
        builder.push(predicate.field.column());
        builder.push(" = ");
        match &predicate.value {
            FieldValue::Int(value) => {
                builder.push_bind(*value);
            }
            FieldValue::Text(value) => {
                builder.push_bind(value.clone());
            }
        }

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update account: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
