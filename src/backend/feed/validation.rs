//! Post input validation
//!
//! Runs before any store access. Every check runs, so a request with a short
//! title and a missing image hears about both.

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::error::has_min_len;
use crate::shared::{CreatePostInput, UpdatePostInput, Violations};

/// Minimum title and content length (after trimming)
pub const MIN_TEXT_LEN: usize = 5;

/// Message carried by every rejected post payload
pub const VALIDATION_FAILED: &str = "Validation failed, entered data is incorrect.";

fn check_text(violations: &mut Violations, title: &str, content: &str) {
    violations.check("title", has_min_len(title, MIN_TEXT_LEN), "Title is invalid.");
    violations.check(
        "content",
        has_min_len(content, MIN_TEXT_LEN),
        "Content is invalid.",
    );
}

fn finish(violations: Violations) -> BackendResult<()> {
    violations
        .into_result()
        .map_err(|v| BackendError::invalid_input(VALIDATION_FAILED, v))
}

/// Validate a new post; the image is mandatory
pub fn validate_create(input: &CreatePostInput) -> BackendResult<()> {
    let mut violations = Violations::new();
    check_text(&mut violations, &input.title, &input.content);
    violations.check(
        "image",
        !input.image_url.trim().is_empty(),
        "No image provided.",
    );
    finish(violations)
}

/// Validate a post update
///
/// The image may be the keep-current sentinel but never empty.
pub fn validate_update(input: &UpdatePostInput) -> BackendResult<()> {
    let mut violations = Violations::new();
    check_text(&mut violations, &input.title, &input.content);
    violations.check(
        "image",
        !input.image_url.trim().is_empty(),
        "No file picked.",
    );
    finish(violations)
}
