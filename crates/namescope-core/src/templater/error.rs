//! Error types for the templating module.

use thiserror::Error;

/// Errors that can occur while rendering a reference.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template syntax is invalid (e.g., unbalanced quotes in a quoted name).
    #[error("template syntax error: {0}")]
    SyntaxError(String),

    /// A variable referenced in the reference is undefined.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// The adapter was called with unexpected arguments or an unknown method.
    #[error("adapter error: {0}")]
    AdapterError(String),

    /// Rendering failed for an unexpected reason.
    #[error("render error: {0}")]
    RenderError(String),
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::SyntaxError => Self::SyntaxError(err.to_string()),
            ErrorKind::UndefinedError => Self::UndefinedVariable(err.to_string()),
            ErrorKind::UnknownMethod | ErrorKind::InvalidOperation => {
                Self::AdapterError(err.to_string())
            }
            _ => Self::RenderError(err.to_string()),
        }
    }
}
