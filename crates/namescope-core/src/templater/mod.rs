//! Rendering emitted references into dialect SQL.
//!
//! The transformer emits column references such as
//! `{{ adapter.quote('Identifier Name') }}` for a downstream template engine.
//! This module evaluates them with MiniJinja and an emulated `adapter`, which
//! gives the SQL text the reference resolves to for a dialect.
//!
//! ```text
//! raw name → [transformer] → reference snippet → [templater] → SQL identifier
//! ```
//!
//! # Example
//!
//! ```
//! use namescope_core::templater::render_reference;
//! use namescope_core::{Dialect, NameTransformer, RenderMode};
//!
//! let transformer = NameTransformer::new(Dialect::Postgres);
//! let reference = transformer.normalize_column_name("Identifier Name", RenderMode::Plain);
//!
//! let sql = render_reference(&reference, Dialect::Postgres).unwrap();
//! assert_eq!(sql, "\"Identifier Name\"");
//! ```

mod adapter;
mod error;

pub use error::TemplateError;

use minijinja::Environment;

use crate::Dialect;

/// Recursion limit for rendering. References are flat expressions, so this is
/// far above anything a well-formed reference needs.
const RECURSION_LIMIT: usize = 100;

/// Renders a stand-alone reference (a bare token or a `{{ ... }}` snippet).
///
/// # Errors
///
/// - `TemplateError::SyntaxError` - the reference is not valid template text
/// - `TemplateError::UndefinedVariable` - it refers to anything but `adapter`
/// - `TemplateError::AdapterError` - the adapter was called incorrectly
pub fn render_reference(reference: &str, dialect: Dialect) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
    env.set_recursion_limit(RECURSION_LIMIT);
    adapter::register_adapter(&mut env, dialect);

    env.add_template("reference", reference)?;
    let tmpl = env.get_template("reference")?;
    let rendered = tmpl.render(minijinja::context! {})?;

    #[cfg(feature = "tracing")]
    tracing::trace!(dialect = %dialect, reference, rendered = %rendered, "rendered reference");

    Ok(rendered)
}

/// Renders a reference produced in [`crate::RenderMode::Template`], i.e. an
/// expression meant to sit inside an enclosing `{{ ... }}` block.
pub fn render_template_reference(
    expression: &str,
    dialect: Dialect,
) -> Result<String, TemplateError> {
    render_reference(&format!("{{{{ {expression} }}}}"), dialect)
}
