//! Emulation of the dbt `adapter` object.
//!
//! Only `adapter.quote(name)` is provided. Like dbt it wraps the name in the
//! dialect quote character without escaping anything; the transformer has
//! already escaped embedded quote characters before emitting the call.

use minijinja::{Environment, Value};
use std::sync::Arc;

use crate::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct AdapterEmulator {
    dialect: Dialect,
}

impl AdapterEmulator {
    pub(super) fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    fn quote(&self, name: &str) -> String {
        let q = self.dialect.spec().quote_char;
        format!("{q}{name}{q}")
    }
}

impl std::fmt::Display for AdapterEmulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__adapter_{}__", self.dialect.as_str().to_ascii_lowercase())
    }
}

impl minijinja::value::Object for AdapterEmulator {
    fn call_method(
        self: &Arc<Self>,
        _state: &minijinja::State,
        method: &str,
        args: &[Value],
    ) -> Result<Value, minijinja::Error> {
        match method {
            "quote" => match args {
                [name] => {
                    let name = name.as_str().ok_or_else(|| {
                        minijinja::Error::new(
                            minijinja::ErrorKind::InvalidOperation,
                            "adapter.quote() expects a string argument",
                        )
                    })?;
                    Ok(Value::from(self.quote(name)))
                }
                _ => Err(minijinja::Error::new(
                    minijinja::ErrorKind::InvalidOperation,
                    "adapter.quote() expects exactly 1 argument",
                )),
            },
            _ => Err(minijinja::Error::new(
                minijinja::ErrorKind::UnknownMethod,
                format!("adapter has no method named {method}"),
            )),
        }
    }

    fn render(self: &Arc<Self>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Registers the `adapter` global for `dialect`.
pub(super) fn register_adapter(env: &mut Environment<'_>, dialect: Dialect) {
    env.add_global("adapter", Value::from_object(AdapterEmulator::new(dialect)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_uses_dialect_quote_char_without_escaping() {
        assert_eq!(
            AdapterEmulator::new(Dialect::Postgres).quote("\"\"a\"\""),
            "\"\"\"a\"\"\""
        );
        assert_eq!(AdapterEmulator::new(Dialect::Mysql).quote("a b"), "`a b`");
    }

    #[test]
    fn display_names_the_dialect() {
        assert_eq!(
            AdapterEmulator::new(Dialect::Bigquery).to_string(),
            "__adapter_bigquery__"
        );
    }
}
