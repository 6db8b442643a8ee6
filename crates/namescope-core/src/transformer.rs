//! Per-dialect name normalization.
//!
//! [`NameTransformer`] composes the transliteration, case folding, quoting and
//! truncation stages for one dialect. Schema and table names always come out
//! as bare tokens; column names come out as a bare token when the dialect
//! accepts them unquoted and as an `adapter.quote(...)` template call
//! otherwise.
//!
//! ```
//! use namescope_core::{Dialect, NameTransformer, RenderMode};
//!
//! let postgres = NameTransformer::new(Dialect::Postgres);
//! assert_eq!(postgres.normalize_table_name("Identifier Name"), "identifier_name");
//! assert_eq!(
//!     postgres.normalize_column_name("Identifier Name", RenderMode::Plain),
//!     "{{ adapter.quote('Identifier Name') }}"
//! );
//! ```

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::NamingError;
use crate::quoting;
use crate::rules::DialectSpec;
use crate::transliterate::{is_identifier_start, transform_standard_naming};
use crate::truncate::truncate_identifier;
use crate::types::{Dialect, NamingContext, NamingOptions, NormalizedName, RenderMode};

/// Normalizes source names for one dialect.
///
/// Cheap to copy and safe to share between threads; it only holds the dialect
/// selector and options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTransformer {
    dialect: Dialect,
    options: NamingOptions,
}

/// A column name after the quoting decision.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ColumnReference {
    /// Usable as written.
    Bare(String),
    /// Escaped text to pass to the dialect quoting function.
    Quoted(String),
}

impl ColumnReference {
    fn render(&self, mode: RenderMode) -> String {
        match (self, mode) {
            (Self::Bare(token), RenderMode::Plain) => token.clone(),
            (Self::Bare(token), RenderMode::Template) => format!("'{token}'"),
            (Self::Quoted(text), RenderMode::Plain) => format!("{{{{ adapter.quote('{text}') }}}}"),
            (Self::Quoted(text), RenderMode::Template) => format!("adapter.quote('{text}')"),
        }
    }
}

impl NameTransformer {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_options(dialect, NamingOptions::default())
    }

    pub fn with_options(dialect: Dialect, options: NamingOptions) -> Self {
        Self { dialect, options }
    }

    /// Builds a transformer from a dialect name such as `"Postgres"` or `"bigquery"`.
    pub fn from_dialect_name(name: &str) -> Result<Self, NamingError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn options(&self) -> &NamingOptions {
        &self.options
    }

    fn spec(&self) -> &'static DialectSpec {
        self.dialect.spec()
    }

    /// See [`quoting::needs_quotes`].
    pub fn needs_quotes(&self, name: &str) -> bool {
        quoting::needs_quotes(name, self.dialect)
    }

    /// Length schema and table names are truncated to.
    ///
    /// A `length_limit` is clamped to `1..=max_identifier_length` so a token
    /// is never empty and never longer than the database accepts.
    pub fn max_name_length(&self) -> usize {
        let spec = self.spec();
        match self.options.length_limit {
            Some(limit) => limit.clamp(1, spec.max_identifier_length),
            None => spec.truncation_budget(),
        }
    }

    /// Truncates `name` to [`Self::max_name_length`].
    pub fn truncate_identifier_name(&self, name: &str) -> String {
        let limit = self.max_name_length();
        let truncated = truncate_identifier(name, limit);

        #[cfg(feature = "tracing")]
        if truncated != name {
            debug!(
                dialect = %self.dialect,
                from_len = name.chars().count(),
                to_len = truncated.chars().count(),
                "Truncating {name} to {truncated}"
            );
        }

        truncated
    }

    pub fn normalize_schema_name(&self, raw: &str) -> String {
        self.standard_token(raw, self.options.truncate)
    }

    pub fn normalize_table_name(&self, raw: &str) -> String {
        self.standard_token(raw, self.options.truncate)
    }

    /// Normalizes a column name.
    ///
    /// Returns the bare token when the dialect accepts the name unquoted and a
    /// call to the dialect quoting function otherwise; `mode` picks between the
    /// stand-alone and the embedded form. Column names are never truncated.
    pub fn normalize_column_name(&self, raw: &str, mode: RenderMode) -> String {
        self.column_reference(raw).render(mode)
    }

    /// Normalizes `raw` for `context`, returning every rendering at once.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(dialect = %self.dialect))
    )]
    pub fn normalize(&self, raw: &str, context: NamingContext) -> NormalizedName {
        let normalized = self.standard_token(raw, self.options.truncate);

        let (rendered_reference, template_reference, quoted) = if context.truncates() {
            let template = format!("'{normalized}'");
            (normalized.clone(), template, false)
        } else {
            let reference = self.column_reference(raw);
            let quoted = matches!(reference, ColumnReference::Quoted(_));
            (
                reference.render(RenderMode::Plain),
                reference.render(RenderMode::Template),
                quoted,
            )
        };

        NormalizedName {
            raw: raw.to_string(),
            context,
            normalized,
            rendered_reference,
            template_reference,
            quoted,
        }
    }

    /// Bare-token pipeline shared by every context.
    fn standard_token(&self, raw: &str, truncate: bool) -> String {
        let spec = self.spec();
        let name = self.apply_naming_conventions(transform_standard_naming(raw));
        let name = spec.fold(&name, self.needs_quotes(&name));
        if truncate {
            self.truncate_identifier_name(&name)
        } else {
            name
        }
    }

    /// Gives every name a first character; BigQuery also needs it to be a
    /// letter or underscore.
    fn apply_naming_conventions(&self, mut name: String) -> String {
        let needs_prefix = match name.chars().next() {
            None => true,
            Some(first) => self.spec().prefixes_leading_digit && !is_identifier_start(first),
        };
        if needs_prefix {
            name.insert(0, '_');
        }
        name
    }

    fn column_reference(&self, raw: &str) -> ColumnReference {
        let spec = self.spec();
        let name = if spec.prefixes_leading_digit {
            self.apply_naming_conventions(transform_standard_naming(raw))
        } else {
            raw.to_string()
        };

        if !self.needs_quotes(&name) {
            return ColumnReference::Bare(spec.fold(&name, false));
        }

        let mut escaped = name.replace('\\', "\\\\");
        if spec.doubles_embedded_quotes {
            escaped = escaped.replace('"', "\"\"");
        }
        if spec.replaces_backticks {
            escaped = escaped.replace('`', "_");
        }
        let escaped = escaped.replace('\'', "\\'");
        ColumnReference::Quoted(spec.fold(&escaped, true))
    }
}
