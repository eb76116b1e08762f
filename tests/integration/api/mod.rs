//! API integration tests

pub mod auth_test;
pub mod feed_test;
pub mod graphql_test;
pub mod status_test;
