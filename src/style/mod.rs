//! Style fragments and their composition.
//!
//! - [`Style`]: One style object with optional properties
//! - [`StyleList`]: An ordered list of fragments, flattened last-wins
//! - [`FontWeight`]: Font weight values

mod fragment;
mod list;

pub use fragment::{FontWeight, Style};
pub use list::StyleList;
