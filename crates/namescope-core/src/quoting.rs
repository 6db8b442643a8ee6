//! Deciding when a name must be quoted, and what quoting looks like.

use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;
#[cfg(feature = "tracing")]
use tracing::trace;

use crate::error::{IdentifierError, NamingError};
use crate::rules::BareCharset;
use crate::transliterate::{is_identifier_char, is_identifier_start};
use crate::Dialect;

/// Returns true if `name` cannot be used as a bare identifier in `dialect`.
///
/// Empty names and reserved words always need quoting. Dialects with a strict
/// bare charset also quote names that start with anything but a letter or
/// underscore, or that contain characters outside `[A-Za-z0-9_]`. Case alone
/// never forces quoting.
pub fn needs_quotes(name: &str, dialect: Dialect) -> bool {
    let spec = dialect.spec();
    let result = name.is_empty()
        || spec.is_reserved(name)
        || match spec.bare_charset {
            BareCharset::Lenient => false,
            BareCharset::Strict => {
                !name.chars().next().is_some_and(is_identifier_start)
                    || !name.chars().all(is_identifier_char)
            }
        };

    #[cfg(feature = "tracing")]
    trace!(dialect = %dialect, name, needs_quotes = result, "quoting decision");

    result
}

/// Wraps `name` in the dialect quote character, doubling any embedded quote
/// characters.
pub fn quote_identifier(name: &str, dialect: Dialect) -> String {
    let q = dialect.spec().quote_char;
    let mut out = String::with_capacity(name.len() + 2);
    out.push(q);
    for c in name.chars() {
        if c == q {
            out.push(q);
        }
        out.push(c);
    }
    out.push(q);
    out
}

/// Parses `text` as exactly one identifier of `dialect` and returns its value.
///
/// Quoted identifiers are unquoted by the dialect tokenizer, so
/// `"a ""b"""` yields `a "b"` for Postgres.
pub fn parse_quoted_identifier(text: &str, dialect: Dialect) -> Result<String, NamingError> {
    let sql_dialect = dialect.to_sqlparser_dialect();
    let mut parser = Parser::new(sql_dialect.as_ref())
        .try_with_sql(text)
        .map_err(|err| IdentifierError::from_parser_error(err, dialect))?;

    let ident = parser
        .parse_identifier()
        .map_err(|err| IdentifierError::from_parser_error(err, dialect))?;

    let next = parser.peek_token();
    if next.token != Token::EOF {
        return Err(IdentifierError::new(
            format!("unexpected trailing input after identifier: {}", next.token),
            dialect,
        )
        .into());
    }

    Ok(ident.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::all_dialects;

    #[test]
    fn empty_name_needs_quotes_everywhere() {
        for dialect in all_dialects() {
            assert!(needs_quotes("", dialect), "{dialect}");
        }
    }

    #[test]
    fn bigquery_only_quotes_reserved_words() {
        assert!(!needs_quotes("post.wall", Dialect::Bigquery));
        assert!(!needs_quotes("100x200", Dialect::Bigquery));
        assert!(needs_quotes("select", Dialect::Bigquery));
    }

    #[test]
    fn strict_dialects_quote_illegal_characters() {
        for dialect in [Dialect::Postgres, Dialect::Snowflake, Dialect::Mysql] {
            assert!(needs_quotes("post.wall", dialect));
            assert!(needs_quotes("100x200", dialect));
            assert!(needs_quotes("naïve", dialect));
            assert!(!needs_quotes("_post_wall_1", dialect));
        }
    }

    #[test]
    fn mixed_case_is_not_a_reason_to_quote() {
        assert!(!needs_quotes("CamelCase", Dialect::Postgres));
        assert!(!needs_quotes("lowercase", Dialect::Snowflake));
    }

    #[test]
    fn quote_identifier_doubles_quote_chars() {
        assert_eq!(quote_identifier(r#"a"b"#, Dialect::Postgres), r#""a""b""#);
        assert_eq!(quote_identifier("a`b", Dialect::Bigquery), "`a``b`");
        assert_eq!(quote_identifier("plain", Dialect::Mysql), "`plain`");
    }

    #[test]
    fn parse_quoted_identifier_unquotes() {
        assert_eq!(
            parse_quoted_identifier(r#""Hello World""#, Dialect::Postgres).unwrap(),
            "Hello World"
        );
        assert_eq!(
            parse_quoted_identifier("`Groups`", Dialect::Bigquery).unwrap(),
            "Groups"
        );
        assert_eq!(
            parse_quoted_identifier("plain_name", Dialect::Snowflake).unwrap(),
            "plain_name"
        );
    }

    #[test]
    fn parse_quoted_identifier_rejects_trailing_tokens() {
        let err = parse_quoted_identifier("a b", Dialect::Postgres).unwrap_err();
        assert!(matches!(err, NamingError::InvalidIdentifier(ref e) if e.dialect == Dialect::Postgres));
    }

    #[test]
    fn quoted_names_round_trip_through_the_parser() {
        for dialect in all_dialects() {
            let name = "Hello \"World\" `x`";
            let quoted = quote_identifier(name, dialect);
            assert_eq!(parse_quoted_identifier(&quoted, dialect).unwrap(), name, "{dialect}");
        }
    }
}
