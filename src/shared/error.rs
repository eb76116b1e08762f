//! Validation Violations
//!
//! Field-level validation failures shared by the REST and GraphQL surfaces.
//! Validation never stops at the first problem: every check runs and all
//! violations are reported together.
//!
//! # Usage
//!
//! ```rust
//! use feedhub::shared::error::Violations;
//!
//! let mut violations = Violations::new();
//! violations.check("title", "abc".len() >= 5, "Title is invalid.");
//! assert!(violations.into_result().is_err());
//! ```
use serde::{Deserialize, Serialize};

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Input field the violation refers to
    pub field: String,
    /// Human-readable explanation
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collector for validation results
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field` unless `ok` holds
    pub fn check(&mut self, field: &str, ok: bool, message: &str) {
        if !ok {
            self.0.push(Violation::new(field, message));
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise every violation
    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

/// Check that `value` has at least `min` characters once trimmed
pub fn has_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Basic structural email check: one `@`, a non-empty local part and a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
