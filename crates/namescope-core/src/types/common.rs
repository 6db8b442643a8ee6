//! Common types shared by the transformer and its callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where a name is going to be used.
///
/// Schema and table names are emitted as stand-alone tokens and may be
/// truncated; column names may be emitted as a quoted reference instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NamingContext {
    Schema,
    Table,
    Column,
}

impl NamingContext {
    /// Whether references in this context are the (possibly truncated) bare
    /// token. Column references are never truncated; only their
    /// `normalized` token is.
    pub const fn truncates(&self) -> bool {
        matches!(self, Self::Schema | Self::Table)
    }
}

/// How a column reference is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Stand-alone SQL text: a bare token or `{{ adapter.quote('...') }}`.
    #[default]
    Plain,
    /// Expression for use inside an enclosing `{{ ... }}` block: a string
    /// literal `'token'` or the bare `adapter.quote('...')` call.
    Template,
}
