//! Real-time integration tests
