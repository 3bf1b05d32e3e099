//! Configuration acceptance
//!
//! Wires the sanitizers and validators into the configuration object the
//! host hands over at initialization. Structural problems (a bad server
//! endpoint, a missing application id) reject the configuration; invalid
//! debug options are best-effort and are dropped with a warning instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::builder::{FieldError, Validatable, ValidationBuilder};
use crate::sanitizers::sanitize_application_id;
use crate::validators::{validate_header, validate_url};

/// Maximum number of source tags attached to outgoing payloads.
pub const MAX_SOURCE_TAGS: usize = 5;

/// Error returned when a configuration cannot be accepted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration rejected: {}", join_errors(.0))]
    Invalid(Vec<FieldError>),
}

impl ConfigError {
    /// The field-level errors behind the rejection.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ConfigError::Invalid(errors) => errors,
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Host-supplied configuration, prior to acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Reverse-DNS style application identifier, e.g. `org.example.app`.
    pub application_id: String,
    /// Absolute http(s) endpoint payloads are submitted to.
    pub server_endpoint: String,
    /// Debug view tag, forwarded verbatim as an HTTP header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_view_tag: Option<String>,
    /// Source tags, each forwarded as part of an HTTP header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tags: Option<Vec<String>>,
}

impl Validatable for Configuration {
    fn sanitize(&mut self) {
        self.application_id = sanitize_application_id(&self.application_id);
    }

    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        builder.check("application_id", || {
            if self.application_id.is_empty() {
                return Err("application_id is required".to_string());
            }
            Ok(())
        });

        builder.check("server_endpoint", || {
            if validate_url(&self.server_endpoint) {
                Ok(())
            } else {
                Err("must be an absolute http or https URL with a host".to_string())
            }
        });

        builder.build()
    }
}

impl Configuration {
    /// Sanitize, scrub invalid debug options, and validate.
    ///
    /// This is the single entry point the host calls before adopting a
    /// configuration. Debug options never cause rejection: an invalid
    /// `debug_view_tag` or `source_tags` list is dropped with a warning.
    pub fn accept(mut self) -> Result<Self, ConfigError> {
        self.sanitize();
        self.scrub_debug_options();
        self.validate().map_err(ConfigError::Invalid)?;
        Ok(self)
    }

    fn scrub_debug_options(&mut self) {
        if let Some(tag) = self.debug_view_tag.take() {
            if validate_header(&tag) {
                self.debug_view_tag = Some(tag);
            } else {
                warn!(%tag, "discarding invalid debug view tag");
            }
        }

        // Source tags are all-or-nothing: one bad entry discards the list.
        if let Some(tags) = self.source_tags.take() {
            let acceptable = !tags.is_empty()
                && tags.len() <= MAX_SOURCE_TAGS
                && tags.iter().all(|tag| validate_header(tag));
            if acceptable {
                self.source_tags = Some(tags);
            } else {
                warn!(count = tags.len(), "discarding invalid source tags");
            }
        }
    }
}
