//! Dialect-aware normalization of SQL identifiers.
//!
//! Names coming from source systems (API fields, spreadsheet headers, JSON
//! keys) are turned into identifiers a destination warehouse accepts:
//! accents are stripped, illegal characters are rewritten, case is folded the
//! way the dialect folds it, reserved words are quoted and over-long names
//! are shortened by middle elision.
//!
//! The entry point is [`NameTransformer`]. With the `templating` feature the
//! [`templater`] module can render the emitted references to plain SQL.

pub mod error;
pub mod quoting;
pub mod rules;
#[cfg(feature = "templating")]
pub mod templater;
pub mod transformer;
pub mod transliterate;
pub mod truncate;
pub mod types;

pub use error::{IdentifierError, NamingError, Position};
pub use quoting::{needs_quotes, parse_quoted_identifier, quote_identifier};
pub use rules::{is_reserved_keyword, BareCharset, CaseFolding, DialectSpec};
#[cfg(feature = "templating")]
pub use templater::{render_reference, render_template_reference, TemplateError};
pub use transformer::NameTransformer;
pub use transliterate::{strip_accents, transform_json_naming, transform_standard_naming};
pub use truncate::{truncate_identifier, TRUNCATION_MARKER};
pub use types::{Dialect, NamingContext, NamingOptions, NormalizedName, RenderMode};

// Test utilities (must be at end of file)
#[cfg(test)]
pub mod test_utils;
