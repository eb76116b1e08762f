//! Common test utilities and helpers
//!
//! - Test application over the in-memory store
//! - Authentication helpers
//! - Multipart body builder
//! - Custom assertion macros

pub mod app;
pub mod auth_helpers;
pub mod multipart;

pub use app::*;
pub use auth_helpers::*;
pub use multipart::*;
