//! Integration tests against the assembled router

pub mod api;
pub mod realtime;
