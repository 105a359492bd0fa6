//! Palette tables mapping color modes and semantic roles to concrete colors.
//!
//! - [`Color`]: A concrete color value, kept verbatim
//! - [`ColorRole`]: The semantic purpose of a color ("text", "background", ...)
//! - [`ColorTable`]: One color per role for a single mode
//! - [`Palette`]: Light and dark tables, built in or loaded from YAML/JSON
//! - [`PaletteError`]: Errors from loading and validation

mod color;
mod error;
mod role;
mod table;

pub use color::{rgb_to_ansi256, Color};
pub use error::PaletteError;
pub use role::ColorRole;
pub use table::{ColorTable, Palette};
