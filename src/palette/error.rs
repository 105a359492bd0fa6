//! Palette loading errors.

use std::path::PathBuf;

use thiserror::Error;

use super::ColorRole;
use crate::mode::ColorMode;

/// Error returned when a palette cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read palette '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML palette: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON palette: {0}")]
    Json(#[from] serde_json::Error),

    /// Palette files must end in `.yaml`, `.yml` or `.json`.
    #[error("unsupported palette file '{}' (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A palette entry is not a color [`Color::to_rgb`](super::Color::to_rgb) understands.
    #[error("{mode} palette has invalid {role} color '{value}'")]
    InvalidColor {
        mode: ColorMode,
        role: ColorRole,
        value: String,
    },
}
