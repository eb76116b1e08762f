//! Authentication Module
//!
//! Account registration, login and identity tokens.
//!
//! - **`sessions`** - JWT issuing and verification ([`TokenService`])
//! - **`users`** - signup, login and status ([`AccountService`])
//! - **`handlers`** - REST handlers for `/auth/signup` and `/auth/login`
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── sessions.rs     - JWT token management
//! ├── users.rs        - Account operations
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt on a blocking thread before storage
//! - Tokens are HS256 JWTs carrying the user id and email, valid for one hour
//! - Every token failure is a 401, never a 500
//!
//! # Example
//!
//! ```rust,ignore
//! use feedhub::backend::auth::TokenService;
//!
//! let tokens = TokenService::new("secret");
//! let token = tokens.create_token(user_id, "a@x.com")?;
//! let identity = tokens.verify_token(&token)?;
//! ```

/// JWT token generation and validation
pub mod sessions;

/// Registration, login and status
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, signup, LoginRequest, LoginResponse, SignupRequest, SignupResponse};
pub use sessions::{Identity, TokenService, TOKEN_TTL_SECS};
pub use users::{AccountService, AuthData, NewAccount};
