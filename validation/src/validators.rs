//! Field validators for input validation
//!
//! Boolean acceptance tests against a grammar, with no reshaping. Every
//! validator is total: malformed input, including strings that fail to parse
//! as a URL at all, comes back as `false` rather than an error.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

/// Maximum accepted length, in bytes, for a raw HTTP header value.
pub const HEADER_VALUE_MAX_LENGTH: usize = 20;

lazy_static! {
    /// Allow-list for raw HTTP header values: ASCII letters, digits, hyphen
    static ref HEADER_VALUE_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9-]+$").unwrap();
}

/// Validate that a string is an absolute `http` or `https` URL with a
/// non-empty host.
///
/// A bare scheme with no authority (`"http://"`) is rejected. Parse failures
/// are absorbed internally and reported as `false`; no caller ever observes
/// a parse error from this function.
pub fn validate_url(candidate: &str) -> bool {
    let parsed = match Url::parse(candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    parsed.host_str().map_or(false, |host| !host.is_empty())
}

/// Validate that a string is usable as a raw HTTP header value.
///
/// Accepts non-empty strings of at most [`HEADER_VALUE_MAX_LENGTH`] bytes
/// drawn from the allow-list of ASCII letters, digits, and hyphen. No
/// whitespace, no control characters, no shell-metacharacter-like symbols.
pub fn validate_header(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= HEADER_VALUE_MAX_LENGTH
        && HEADER_VALUE_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_works_correctly() {
        // Invalid values
        assert!(!validate_url(""));
        assert!(!validate_url("clearly not a url"));
        assert!(!validate_url("ftp://wrong.protocol"));
        assert!(!validate_url("custom://wrong.protocol"));
        assert!(!validate_url("http://"));
        assert!(!validate_url("file:///etc/hosts"));

        // Valid values
        assert!(validate_url("http://incoming.telemetry.example.org"));
        assert!(validate_url("http://localhost/"));
        assert!(validate_url("https://incoming.telemetry.example.org"));
        assert!(validate_url("https://localhost:3000/"));
    }

    #[test]
    fn validate_header_works_correctly() {
        // Invalid values
        assert!(!validate_header(""));
        assert!(!validate_header("invalid_value"));
        assert!(!validate_header("invalid value"));
        assert!(!validate_header("!nv@lid-val*e"));
        assert!(!validate_header("invalid-value-because-way-too-long"));

        // Valid values
        assert!(validate_header("valid-value"));
        assert!(validate_header("-also-valid-value"));
    }

    #[test]
    fn validate_header_length_boundary() {
        let at_limit = "a".repeat(HEADER_VALUE_MAX_LENGTH);
        let over_limit = "a".repeat(HEADER_VALUE_MAX_LENGTH + 1);
        assert!(validate_header(&at_limit));
        assert!(!validate_header(&over_limit));
    }
}
