//! Input sanitization functions
//!
//! Sanitizers reshape a string into canonical form without ever rejecting
//! it. Validation with accept/reject semantics lives in
//! [`crate::validators`].

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    /// A maximal run of dot or hyphen separators in an application identifier
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[.-]+").unwrap();
}

/// Normalize an application identifier into its canonical form.
///
/// Lowercases the whole string, then collapses every run of `.` or `-`
/// characters into a single `-`. Accepts any input string and is idempotent:
/// `org.example..test---app` becomes `org-example-test-app`.
pub fn sanitize_application_id(application_id: &str) -> String {
    SEPARATOR_RUN
        .replace_all(&application_id.to_lowercase(), "-")
        .into_owned()
}

/// Cap a string at `max_length` bytes, warning when data is lost.
///
/// The cut lands on the largest char boundary at or below `max_length`, so
/// a multi-byte sequence is never split. Strings already within bounds are
/// returned unchanged.
pub fn truncate_with_warning(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        return value.to_string();
    }

    let mut take = max_length;
    while take > 0 && !value.is_char_boundary(take) {
        take -= 1;
    }

    warn!(
        original_length = value.len(),
        max_length, "truncating over-long string value"
    );
    value[..take].to_string()
}
