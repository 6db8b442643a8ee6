//! Per-dialect identifier rules.
//!
//! Each dialect is described by one immutable [`DialectSpec`] record. Records
//! are plain `static` data looked up through [`crate::Dialect::spec`].

mod reserved_keywords;

pub use reserved_keywords::is_reserved_keyword;

use crate::Dialect;

/// Characters reserved at the end of a truncated name for suffixes appended
/// downstream: 12 for generated model suffixes and 8 for a hashed suffix used
/// to break truncation collisions.
pub const RESERVED_SUFFIX_LENGTH: usize = 20;

/// Case folding a dialect applies to unquoted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFolding {
    /// Keep the case as written (BigQuery)
    None,
    /// Fold to uppercase (Snowflake)
    Upper,
    /// Fold to lowercase (Postgres, Redshift, MySQL)
    Lower,
}

impl CaseFolding {
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseFolding::None => name.to_string(),
            CaseFolding::Upper => name.to_uppercase(),
            CaseFolding::Lower => name.to_lowercase(),
        }
    }
}

/// Which characters a dialect accepts in a bare identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BareCharset {
    /// `[A-Za-z_][A-Za-z0-9_]*`; anything else must be quoted.
    Strict,
    /// Only reserved words force quoting; illegal characters are rewritten by
    /// the naming conventions instead.
    Lenient,
}

/// Identifier rules of one dialect.
#[derive(Debug)]
pub struct DialectSpec {
    pub dialect: Dialect,
    /// Character wrapping a quoted identifier on both sides.
    pub quote_char: char,
    /// Longest identifier the database accepts.
    pub max_identifier_length: usize,
    /// Uppercase reserved words.
    pub reserved_words: &'static [&'static str],
    /// Whether unquoted identifiers are matched case-insensitively.
    pub unquoted_case_insensitive: bool,
    pub fold_case: CaseFolding,
    /// Redshift folds quoted identifiers as well.
    pub folds_quoted_identifiers: bool,
    pub bare_charset: BareCharset,
    /// Prefix `_` to names that do not start with a letter or underscore,
    /// and standardize column names too.
    pub prefixes_leading_digit: bool,
    /// Double `"` inside a quoted name.
    pub doubles_embedded_quotes: bool,
    /// Replace backticks inside a quoted name with `_`.
    pub replaces_backticks: bool,
}

impl DialectSpec {
    /// Length schema and table names are truncated to.
    pub const fn truncation_budget(&self) -> usize {
        self.max_identifier_length.saturating_sub(RESERVED_SUFFIX_LENGTH)
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        is_reserved_keyword(self.dialect, word)
    }

    /// Applies the dialect case policy.
    ///
    /// Unquoted names are folded unless they still need quoting; quoted names
    /// are folded only by dialects that fold quoted identifiers too.
    pub fn fold(&self, name: &str, quoted: bool) -> String {
        if !self.unquoted_case_insensitive {
            return name.to_string();
        }
        if self.folds_quoted_identifiers || !quoted {
            self.fold_case.apply(name)
        } else {
            name.to_string()
        }
    }
}

pub static BIGQUERY: DialectSpec = DialectSpec {
    dialect: Dialect::Bigquery,
    quote_char: '`',
    max_identifier_length: 1024,
    reserved_words: reserved_keywords::BIGQUERY,
    unquoted_case_insensitive: false,
    fold_case: CaseFolding::None,
    folds_quoted_identifiers: false,
    bare_charset: BareCharset::Lenient,
    prefixes_leading_digit: true,
    doubles_embedded_quotes: true,
    replaces_backticks: false,
};

pub static MYSQL: DialectSpec = DialectSpec {
    dialect: Dialect::Mysql,
    quote_char: '`',
    max_identifier_length: 64,
    reserved_words: reserved_keywords::MYSQL,
    unquoted_case_insensitive: true,
    fold_case: CaseFolding::Lower,
    folds_quoted_identifiers: false,
    bare_charset: BareCharset::Strict,
    prefixes_leading_digit: false,
    doubles_embedded_quotes: false,
    replaces_backticks: true,
};

pub static POSTGRES: DialectSpec = DialectSpec {
    dialect: Dialect::Postgres,
    quote_char: '"',
    max_identifier_length: 63,
    reserved_words: reserved_keywords::POSTGRES,
    unquoted_case_insensitive: true,
    fold_case: CaseFolding::Lower,
    folds_quoted_identifiers: false,
    bare_charset: BareCharset::Strict,
    prefixes_leading_digit: false,
    doubles_embedded_quotes: true,
    replaces_backticks: false,
};

pub static REDSHIFT: DialectSpec = DialectSpec {
    dialect: Dialect::Redshift,
    quote_char: '"',
    max_identifier_length: 127,
    reserved_words: reserved_keywords::REDSHIFT,
    unquoted_case_insensitive: true,
    fold_case: CaseFolding::Lower,
    folds_quoted_identifiers: true,
    bare_charset: BareCharset::Strict,
    prefixes_leading_digit: false,
    doubles_embedded_quotes: true,
    replaces_backticks: false,
};

pub static SNOWFLAKE: DialectSpec = DialectSpec {
    dialect: Dialect::Snowflake,
    quote_char: '"',
    max_identifier_length: 255,
    reserved_words: reserved_keywords::SNOWFLAKE,
    unquoted_case_insensitive: true,
    fold_case: CaseFolding::Upper,
    folds_quoted_identifiers: false,
    bare_charset: BareCharset::Strict,
    prefixes_leading_digit: false,
    doubles_embedded_quotes: true,
    replaces_backticks: false,
};
