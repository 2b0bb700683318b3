//! errors.rs - Custom error types for the substitute-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `substitute-core` library.
///
/// Every variant describes a configuration defect detected at startup; the
/// substitution engine itself is infallible once a rule list has been built.
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SubstituteError {
    #[error("Failed to compile substitution pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Substitute configuration must be a mapping or a list of single-entry mappings, got {0}")]
    UnsupportedShape(String),

    #[error("Substitute rule entry cannot be destructured into a pattern/replacement string pair: {0}")]
    InvalidPair(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
