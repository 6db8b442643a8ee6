//! Fuzz target for name normalization.
//!
//! Every normalization entry point is total, so none of them may panic, and
//! schema and table names must be non-empty and fit the configured length.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use namescope_core::{Dialect, NameTransformer, NamingContext, NamingOptions, RenderMode};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    name: String,
    dialect_idx: u8,
    truncate: bool,
    length_limit: Option<u8>,
}

impl FuzzInput {
    fn dialect(&self) -> Dialect {
        Dialect::ALL[self.dialect_idx as usize % Dialect::ALL.len()]
    }

    fn options(&self) -> NamingOptions {
        NamingOptions {
            truncate: self.truncate,
            length_limit: self.length_limit.map(usize::from),
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let transformer = NameTransformer::with_options(input.dialect(), input.options());

    let table = transformer.normalize_table_name(&input.name);
    assert!(!table.is_empty());
    if input.truncate {
        let len = table.chars().count();
        assert!(len <= transformer.max_name_length());
        assert!(len <= input.dialect().spec().max_identifier_length);
    }
    let _ = transformer.normalize_schema_name(&input.name);
    let _ = transformer.normalize_column_name(&input.name, RenderMode::Plain);
    let _ = transformer.normalize_column_name(&input.name, RenderMode::Template);
    let _ = transformer.normalize(&input.name, NamingContext::Column);
});
