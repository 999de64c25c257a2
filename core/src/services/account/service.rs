//! Main account lifecycle service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::account::{Account, AccountRecord, AccountUpdate, NewAccount};
use crate::domain::entities::token::SCOPE_ACTIVATE_ACCOUNT;
use crate::domain::value_objects::{Credentials, TokenGrant};
use crate::errors::{AccountError, DomainError, DomainResult, TokenError};
use crate::repositories::{AccountChanges, AccountField, AccountRepository, FieldValue, Predicate};
use crate::services::email::{mask_email, ActivationEmail, EmailService};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use kf_shared::validation::Validate;

use super::config::AccountServiceConfig;

/// Account lifecycle service
///
/// Orchestrates the account store, the password hasher, the token service
/// and the email sender to implement verification, lookup, activation,
/// creation and update. Collaborators are injected through the
/// constructor and resolved once at process start.
pub struct AccountService<R, M>
where
    R: AccountRepository,
    M: EmailService,
{
    /// Account store for persistence operations
    repository: Arc<R>,
    /// Sender for transactional account email
    mailer: Arc<M>,
    /// Stateless token issuance and verification
    token_service: TokenService,
    /// Secret hashing and verification
    password_hasher: PasswordHasher,
    /// Service configuration
    config: AccountServiceConfig,
}

impl<R, M> AccountService<R, M>
where
    R: AccountRepository,
    M: EmailService,
{
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `repository` - Account store
    /// * `mailer` - Email sender for activation messages
    /// * `token_service` - Token issuance and verification
    /// * `password_hasher` - Secret hashing and verification
    /// * `config` - Service configuration
    pub fn new(
        repository: Arc<R>,
        mailer: Arc<M>,
        token_service: TokenService,
        password_hasher: PasswordHasher,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            repository,
            mailer,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Verify a credential pair and return the matching account
    ///
    /// An unknown username and a wrong secret produce the exact same
    /// error kind and message, so a caller cannot learn which one failed.
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - Credentials check out
    /// * `Err(AccountError::InvalidCredentials)` - Unknown username or wrong secret
    pub async fn verify(&self, credentials: &Credentials) -> DomainResult<Account> {
        let account = self
            .repository
            .find_one(&Predicate::username(credentials.username.clone()))
            .await?;

        let Some(account) = account else {
            warn!(username = %credentials.username, "Credential verification failed");
            return Err(AccountError::InvalidCredentials.into());
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &account.password_hash)
        {
            warn!(username = %credentials.username, "Credential verification failed");
            return Err(AccountError::InvalidCredentials.into());
        }

        debug!(account_id = account.id, "Credentials verified");
        Ok(account)
    }

    /// Find an account by id
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - Account found
    /// * `Err(AccountError::NotFound)` - No account with this id (404 hint)
    pub async fn find(&self, id: i64) -> DomainResult<Account> {
        self.repository
            .find_one(&Predicate::id(id))
            .await?
            .ok_or_else(|| AccountError::NotFound.into())
    }

    /// Find an account by an arbitrary field
    ///
    /// Unlike [`find`](Self::find), absence is `Ok(None)` rather than an
    /// error; this is the lookup used for uniqueness checks.
    pub async fn find_by_field(
        &self,
        field: AccountField,
        value: impl Into<FieldValue>,
    ) -> DomainResult<Option<Account>> {
        self.repository
            .find_one(&Predicate::new(field, value))
            .await
    }

    /// Activate the account referenced by an activation token
    ///
    /// The token is verified against the shared signing secret before the
    /// store is touched; a token without a subject id never reaches the
    /// store. Activation that affects no rows is fatal: the account
    /// vanished between verification and update.
    pub async fn activate(&self, token: &str) -> DomainResult<()> {
        // Step 1: Verify signature and expiry
        let claims = self
            .token_service
            .verify(token, &self.config.auth.token_secret)?;

        // Step 2: The token must be scoped to a specific account
        let subject = claims.subject_id().ok_or(TokenError::MissingClaim {
            claim: "sub".to_string(),
        })?;

        // Step 3: Flip the active flag on that account
        let affected = self
            .repository
            .update(AccountChanges::activation(subject), &Predicate::id(subject))
            .await?;

        if affected == 0 {
            warn!(account_id = subject, "Activation affected no rows");
            return Err(AccountError::OperationFailed {
                operation: "activate".to_string(),
            }
            .into());
        }

        info!(account_id = subject, "Account activated");
        Ok(())
    }

    /// Create a new, inactive account and send its activation email
    ///
    /// Uniqueness is pre-checked on username first, then email; either
    /// hit blocks creation. The store's own unique constraints remain the
    /// last line of defense under concurrent creates.
    ///
    /// # Arguments
    ///
    /// * `new_account` - Profile fields and plaintext secret
    /// * `created_by` - Acting administrative account id
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The stored account, inactive, with hashed secret
    /// * `Err(AccountError::AlreadyExists)` - Username or email taken
    pub async fn create(&self, new_account: NewAccount, created_by: i64) -> DomainResult<Account> {
        // Step 1: Validate input
        new_account
            .validate()
            .map_err(|e| DomainError::Validation {
                message: e.summary(),
            })?;

        // Step 2: Uniqueness pre-checks, username before email
        if self
            .repository
            .find_one(&Predicate::username(new_account.username.clone()))
            .await?
            .is_some()
        {
            return Err(AccountError::AlreadyExists.into());
        }
        if self
            .repository
            .find_one(&Predicate::email(new_account.email.clone()))
            .await?
            .is_some()
        {
            return Err(AccountError::AlreadyExists.into());
        }

        // Step 3: Hash the secret and stamp audit fields
        let password_hash = self.password_hasher.hash(&new_account.password)?;
        let now = Utc::now();
        let record = AccountRecord {
            username: new_account.username,
            email: new_account.email,
            password_hash,
            first_name: new_account.first_name,
            active: false,
            created_at: now,
            updated_at: now,
            created_by,
            updated_by: created_by,
        };

        // Step 4: Persist
        let account = self.repository.create(record).await?;

        // Step 5: Issue the activation token and send the email
        let token = self.token_service.generate(
            Some(account.id),
            &self.config.auth.activation_client_id,
            &self.config.auth.token_secret,
            self.config.auth.activation_token_expiry_secs,
            &[SCOPE_ACTIVATE_ACCOUNT.to_string()],
        )?;
        let message = ActivationEmail {
            name: account.first_name.clone(),
            activation_link: self.config.activation_link(&token),
        };
        self.mailer
            .send_account_activation(&account.email, &self.config.email.from_address, &message)
            .await?;

        info!(
            account_id = account.id,
            email = %mask_email(&account.email),
            "Account created, activation email sent"
        );
        Ok(account)
    }

    /// Apply a partial update to an account
    ///
    /// Stamps the audit fields and hashes a new secret when one is
    /// present. An update that affects no rows is surfaced as a failure.
    ///
    /// # Arguments
    ///
    /// * `update` - Target id and the fields to change
    /// * `updated_by` - Acting account id
    pub async fn update(&self, update: AccountUpdate, updated_by: i64) -> DomainResult<()> {
        let mut changes = AccountChanges {
            username: update.username,
            email: update.email,
            first_name: update.first_name,
            updated_at: Some(Utc::now()),
            updated_by: Some(updated_by),
            ..Default::default()
        };

        if let Some(password) = update.password {
            changes.password_hash = Some(self.password_hasher.hash(&password)?);
        }

        let affected = self
            .repository
            .update(changes, &Predicate::id(update.id))
            .await?;

        if affected == 0 {
            return Err(AccountError::OperationFailed {
                operation: "update".to_string(),
            }
            .into());
        }

        debug!(account_id = update.id, "Account updated");
        Ok(())
    }

    /// Verify credentials and issue an access token for a client
    ///
    /// # Arguments
    ///
    /// * `credentials` - Username and secret to verify
    /// * `client_id` - Registered client requesting the token
    pub async fn login(
        &self,
        credentials: &Credentials,
        client_id: &str,
    ) -> DomainResult<TokenGrant> {
        let account = self.verify(credentials).await?;
        let grant = self.issue_access_token(&account, client_id)?;

        info!(account_id = account.id, client_id, "Access token issued");
        Ok(grant)
    }

    /// Mint an access token for an already-verified account
    ///
    /// The client's configured grants and expiry apply.
    pub fn issue_access_token(
        &self,
        account: &Account,
        client_id: &str,
    ) -> DomainResult<TokenGrant> {
        let client = self
            .config
            .auth
            .find_client(client_id)
            .ok_or_else(|| DomainError::Validation {
                message: format!("Unknown client: {}", client_id),
            })?;

        let token = self.token_service.generate(
            Some(account.id),
            &client.id,
            &self.config.auth.token_secret,
            client.access_token_expiry_secs,
            &client.grants,
        )?;

        Ok(TokenGrant::new(
            token,
            client.access_token_expiry_secs,
            client.grants.clone(),
        ))
    }
}
