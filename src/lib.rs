// substitute-core/src/lib.rs
//! # Substitute Core Library
//!
//! `substitute-core` provides the fundamental, host-independent logic for
//! rule-based canonicalization of template field values. Given an ordered
//! list of `(pattern, replacement)` rules, it rewrites an input string by
//! applying the first matching rule and returning its result, leaving the
//! string unchanged when no rule matches. A host templating system registers
//! the engine as a named field-transformation function, typically to derive
//! filesystem-safe or canonicalized names from metadata fields.
//!
//! The library is designed to be pure and stateless: rule compilation runs
//! once at startup against configuration the host has already parsed, and
//! the resulting engine is an immutable value the host owns and shares
//! read-only across any number of concurrent callers. There is no I/O, no
//! global registry, and no module-level state.
//!
//! ## Modules
//!
//! * `config`: Defines [`RuleSource`], the two accepted configuration shapes
//!   and the shape-detection logic over the host's parsed value tree.
//! * `compiler`: Compiles a `RuleSource` into an ordered, immutable
//!   [`SubstituteRules`] list of case-insensitive regexes.
//! * `engine`: Implements [`Substituter`], the first-match-wins substitution
//!   engine, and the [`FieldFunction`] trait the host calls through.
//! * `errors`: Defines [`SubstituteError`] for startup-time configuration
//!   failures.
//!
//! ## Public API
//!
//! **Configuration & Rules**
//!
//! * [`RuleSource`]: The parsed rule configuration, tagged by shape
//!   (ordered list of single-entry mappings, or the deprecated plain
//!   mapping). Built with [`RuleSource::from_value`] or via `serde`.
//! * [`compile_rules`]: Compiles the ordered pairs into [`SubstituteRules`].
//!
//! **Substitution Engine**
//!
//! * [`Substituter`]: Owns the compiled rules and applies them with
//!   first-match-wins semantics.
//! * [`FieldFunction`]: The seam between this crate and the host's
//!   template-function table.
//!
//! ## Usage Example
//!
//! ```rust
//! use substitute_core::Substituter;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // The host hands over its already-parsed configuration section.
//!     let config: serde_yml::Value = serde_yml::from_str(
//!         "- '^the ': ''\n- 'feat\\.': 'ft.'",
//!     )?;
//!
//!     let substituter = Substituter::from_value(&config)?;
//!
//!     // First matching rule wins; matching is case-insensitive.
//!     assert_eq!(substituter.substitute(Some("The Kinks")), "Kinks");
//!     assert_eq!(substituter.substitute(Some("A Feat. B")), "A ft. B");
//!     assert_eq!(substituter.substitute(Some("unmatched")), "unmatched");
//!     assert_eq!(substituter.substitute(None), "");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Startup-time failures (unsupported configuration shapes, entries that are
//! not string pairs, invalid regex patterns) are reported through
//! [`SubstituteError`]; the `Substituter` constructors wrap them in
//! `anyhow::Error` with context so the host can decide its abort policy.
//! Substitution itself never fails: any rule list plus any input yields a
//! string.
//!
//! ## Design Principles
//!
//! * **First-match-wins:** Exactly one rule is applied per call. The rule
//!   list is a priority order, not a pipeline.
//! * **Host-owned lifecycle:** Compilation happens once; the compiled engine
//!   is a plain owned value, shared read-only.
//! * **Explicit shapes:** Configuration shape detection is a tagged-variant
//!   check with a clear error for anything unrecognized, and a deprecation
//!   warning for the shape that cannot guarantee rule order.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod compiler;
pub mod config;
pub mod engine;
pub mod errors;

/// Re-exports the configuration shapes and shape detection.
pub use config::RuleSource;

/// Re-exports the custom error type for clear error reporting.
pub use errors::SubstituteError;

/// Re-exports the substitution engine and the host-facing function trait.
pub use engine::{FieldFunction, Substituter};

/// Re-exports the rule list types and low-level compilation entry point.
pub use compiler::{compile_rules, SubstituteRule, SubstituteRules, DEPRECATION_NOTICE};
