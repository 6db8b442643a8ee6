use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::NamingContext;

/// Every rendering of one source name for one dialect.
///
/// Produced fresh by [`crate::NameTransformer::normalize`]; holds no reference
/// to the transformer that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedName {
    /// The name as received from the source system
    pub raw: String,

    /// Context the name was normalized for
    pub context: NamingContext,

    /// Bare token, safe to use without quoting in schema and table positions
    pub normalized: String,

    /// Stand-alone reference: the bare token or a `{{ adapter.quote(...) }}` call
    pub rendered_reference: String,

    /// Reference for embedding inside an enclosing template expression
    pub template_reference: String,

    /// Whether the references go through the dialect quoting function
    pub quoted: bool,
}
