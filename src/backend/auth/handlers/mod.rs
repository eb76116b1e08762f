//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! - **`signup`** - PUT /auth/signup
//! - **`login`** - POST /auth/login
//!
//! Neither endpoint requires a token.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

pub use login::login;
pub use signup::signup;
