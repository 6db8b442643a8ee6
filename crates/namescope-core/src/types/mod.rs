//! Types for the identifier normalization API.
//!
//! A [`Dialect`] selects the rule table, [`NamingOptions`] tune truncation and
//! [`NormalizedName`] carries every rendering of a single source name.

mod common;
mod dialect;
mod name;
mod options;

pub use common::{NamingContext, RenderMode};
pub use dialect::Dialect;
pub use name::NormalizedName;
pub use options::NamingOptions;
