//! Options controlling how names are normalized.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NamingError;

/// Options controlling normalization behavior.
///
/// Missing fields fall back to their defaults, so `{}` is a valid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamingOptions {
    /// Truncate schema and table names that exceed the length budget
    #[serde(default = "default_truncate")]
    pub truncate: bool,

    /// Override for the dialect truncation budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_limit: Option<usize>,
}

fn default_truncate() -> bool {
    true
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            truncate: default_truncate(),
            length_limit: None,
        }
    }
}

impl NamingOptions {
    /// Parses options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, NamingError> {
        serde_json::from_str(json).map_err(NamingError::InvalidOptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let options = NamingOptions::from_json_str("{}").unwrap();
        assert_eq!(options, NamingOptions::default());
        assert!(options.truncate);
        assert_eq!(options.length_limit, None);
    }

    #[test]
    fn camel_case_fields() {
        let options =
            NamingOptions::from_json_str(r#"{ "truncate": false, "lengthLimit": 30 }"#).unwrap();
        assert!(!options.truncate);
        assert_eq!(options.length_limit, Some(30));

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"truncate":false,"lengthLimit":30}"#);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = NamingOptions::from_json_str(r#"{ "truncate": "yes" }"#).unwrap_err();
        assert!(matches!(err, NamingError::InvalidOptions(_)));
    }

    #[test]
    fn json_schema_lists_fields() {
        let schema = schemars::schema_for!(NamingOptions);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("\"truncate\""));
        assert!(json.contains("\"lengthLimit\""));
    }
}
