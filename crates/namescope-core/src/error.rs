//! Error types for identifier normalization.
//!
//! # Error Handling Strategy
//!
//! Normalization itself is total: every input string maps to some output and
//! none of the `normalize_*` functions return a `Result`. Errors only arise at
//! the edges of the crate:
//!
//! - [`NamingError::UnknownDialect`] and [`NamingError::InvalidOptions`] are
//!   configuration errors, raised while building a transformer.
//! - [`NamingError::InvalidIdentifier`] is returned when a rendered identifier
//!   is parsed back with the dialect's SQL parser and turns out not to be a
//!   single valid identifier.

use crate::types::Dialect;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::trace;

/// Errors raised by the naming API.
#[derive(Debug, Error)]
pub enum NamingError {
    /// The dialect name does not match any supported dialect.
    #[error("unknown dialect: {name}")]
    UnknownDialect { name: String },

    /// A naming options document could not be deserialized.
    #[error("invalid naming options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    /// Text is not a single identifier in the given dialect.
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
}

/// Failure to read text back as one dialect identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierError {
    /// Human-readable error message.
    pub message: String,
    /// Position reported by the parser, if available.
    pub position: Option<Position>,
    /// Dialect the text was parsed with.
    pub dialect: Dialect,
}

/// Position information for an identifier error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl IdentifierError {
    pub fn new(message: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            message: message.into(),
            position: None,
            dialect,
        }
    }

    /// Wraps a `sqlparser` error, keeping the reported position.
    pub fn from_parser_error(err: sqlparser::parser::ParserError, dialect: Dialect) -> Self {
        let message = err.to_string();
        let position = Self::parse_position_from_message(&message);
        Self {
            message,
            position,
            dialect,
        }
    }

    /// Parses position from sqlparser error message format.
    ///
    /// sqlparser uses format like "Expected ..., found ... at Line: X, Column: Y".
    /// Returns `None` when the expected format is not found.
    fn parse_position_from_message(message: &str) -> Option<Position> {
        static POSITION_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = POSITION_REGEX.get_or_init(|| {
            Regex::new(r"Line:\s*(\d+)\s*,\s*Column:\s*(\d+)").expect("Invalid regex pattern")
        });

        let result = re.captures(message).and_then(|caps| {
            let line: usize = caps.get(1)?.as_str().parse().ok()?;
            let column: usize = caps.get(2)?.as_str().parse().ok()?;
            Some(Position { line, column })
        });

        #[cfg(feature = "tracing")]
        if result.is_none() && (message.contains("Line") || message.contains("Column")) {
            trace!(
                "Failed to parse position from error message that appears to contain position info: {}",
                message
            );
        }

        result
    }
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} identifier", self.dialect)?;

        if let Some(pos) = self.position {
            write!(f, " at line {}, column {}", pos.line, pos.column)?;
        }

        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for IdentifierError {}
