//! Helpers shared by the unit tests.

use crate::{Dialect, NameTransformer};

/// Every supported dialect.
pub fn all_dialects() -> impl Iterator<Item = Dialect> {
    Dialect::ALL.into_iter()
}

/// A transformer with default options for every dialect.
pub fn all_transformers() -> impl Iterator<Item = NameTransformer> {
    all_dialects().map(NameTransformer::new)
}

/// A legal identifier of exactly `len` characters with a recognizable head and tail.
pub fn long_name(len: usize) -> String {
    let body: String = ('a'..='z').cycle().take(len.saturating_sub(2)).collect();
    format!("h{body}t").chars().take(len).collect()
}
