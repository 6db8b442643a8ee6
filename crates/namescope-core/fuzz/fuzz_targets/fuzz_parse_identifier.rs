//! Fuzz target for reading identifiers back with the dialect parser.
//!
//! `parse_quoted_identifier()` must report bad input as an error, never panic,
//! and a quoted name must always read back as itself.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use namescope_core::{parse_quoted_identifier, quote_identifier, Dialect};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    text: String,
    dialect_idx: u8,
}

impl FuzzInput {
    fn dialect(&self) -> Dialect {
        Dialect::ALL[self.dialect_idx as usize % Dialect::ALL.len()]
    }
}

fuzz_target!(|input: FuzzInput| {
    let dialect = input.dialect();
    let _ = parse_quoted_identifier(&input.text, dialect);

    if !input.text.is_empty() {
        let quoted = quote_identifier(&input.text, dialect);
        if let Ok(value) = parse_quoted_identifier(&quoted, dialect) {
            assert_eq!(value, input.text);
        }
    }
});
