//! Input-validation and normalization primitives for the Pulse SDK.
//!
//! The host hands this crate values of unknown, potentially hostile origin:
//! deserialized JSON, user-supplied configuration, debug options. Everything
//! here is defensive by contract. The leaf primitives are total functions
//! that absorb malformed input into a negative classification or a reshaped
//! string; only configuration acceptance can fail, and it fails with
//! accumulated field errors.
//!
//! - [`guards`]: type predicates over [`value::RawValue`]
//! - [`sanitizers`]: canonical string reshaping, never rejects
//! - [`validators`]: boolean acceptance grammars, never reshapes
//! - [`config`]: the acceptance flow host configuration goes through
//! - [`context`]: the testing flag and the test-only gate

pub mod builder;
pub mod config;
pub mod context;
pub mod guards;
pub mod sanitizers;
pub mod validators;
pub mod value;

pub use builder::{FieldError, Validatable, ValidationBuilder};
pub use config::{ConfigError, Configuration, MAX_SOURCE_TAGS};
pub use context::{test_only, Context, TestOnly};
pub use guards::{is_boolean, is_integer, is_number, is_object, is_string, is_undefined};
pub use sanitizers::{sanitize_application_id, truncate_with_warning};
pub use validators::{validate_header, validate_url, HEADER_VALUE_MAX_LENGTH};
pub use value::RawValue;
