/**
 * Accounts
 *
 * This module implements registration, login and the per-user status line.
 * It is shared by the REST handlers and the GraphQL resolvers so both
 * surfaces apply identical rules.
 *
 * # Validation
 *
 * - Email must be well formed; it is stored trimmed and lower-cased
 * - Password must be at least 5 characters once trimmed
 * - Name must not be empty
 *
 * All violations are reported together.
 */

use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::FeedStore;
use crate::shared::error::{has_min_len, is_valid_email};
use crate::shared::{User, Violations};

/// Minimum password length (after trimming)
pub const MIN_PASSWORD_LEN: usize = 5;

/// Registration input
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Token handed out by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthData {
    pub token: String,
    pub user_id: Uuid,
}

/// Registration, login and status management
pub struct AccountService {
    store: Arc<dyn FeedStore>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(store: Arc<dyn FeedStore>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - malformed email, short password or empty name
    /// * `Conflict` - the email is already registered
    pub async fn signup(&self, account: NewAccount) -> BackendResult<User> {
        let email = account.email.trim().to_lowercase();
        let name = account.name.trim().to_string();

        let mut violations = Violations::new();
        violations.check("email", is_valid_email(&email), "E-Mail is invalid.");
        violations.check(
            "password",
            has_min_len(&account.password, MIN_PASSWORD_LEN),
            "Password too short!",
        );
        violations.check("name", !name.is_empty(), "Name is required.");
        violations
            .into_result()
            .map_err(|v| BackendError::invalid_input("Validation failed.", v))?;

        if self.store.find_user_by_email(&email).await?.is_some() {
            tracing::warn!("Signup rejected, email already registered: {}", email);
            return Err(BackendError::conflict("User already exists!"));
        }

        let password = account.password;
        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| BackendError::internal(format!("failed to hash password: {}", e)))?;

        let user = User::new(email, name, password_hash);
        self.store.insert_user(&user).await?;

        tracing::info!("User created successfully: {} ({})", user.name, user.email);
        Ok(user)
    }

    /// Check credentials and issue an identity token
    ///
    /// # Errors
    ///
    /// * `Unauthenticated` - unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> BackendResult<AuthData> {
        let email = email.trim().to_lowercase();
        let user = self.store.find_user_by_email(&email).await?.ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            BackendError::unauthenticated("A user with this email could not be found.")
        })?;

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| BackendError::internal(format!("verification task failed: {}", e)))?
            .map_err(|e| BackendError::internal(format!("password verification error: {}", e)))?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(BackendError::unauthenticated("Wrong password!"));
        }

        let token = self.tokens.create_token(user.id, &user.email)?;
        tracing::info!("User logged in successfully: {}", user.id);

        Ok(AuthData {
            token,
            user_id: user.id,
        })
    }

    /// Load the caller's own record
    pub async fn current_user(&self, user_id: Uuid) -> BackendResult<User> {
        self.store.find_user(user_id).await?.ok_or_else(|| {
            tracing::warn!("Authenticated user no longer exists: {}", user_id);
            BackendError::unauthenticated("A user with this id could not be found.")
        })
    }

    pub async fn status(&self, user_id: Uuid) -> BackendResult<String> {
        Ok(self.current_user(user_id).await?.status)
    }

    /// Replace the caller's status; the post list is not touched
    pub async fn set_status(&self, user_id: Uuid, status: String) -> BackendResult<User> {
        let user = self.store.set_status(user_id, &status).await?.ok_or_else(|| {
            tracing::warn!("Status update for unknown user: {}", user_id);
            BackendError::unauthenticated("A user with this id could not be found.")
        })?;

        tracing::info!("Status updated for user: {}", user_id);
        Ok(user)
    }
}
