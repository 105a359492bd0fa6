//! Concrete color values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete color, kept exactly as written (e.g. `"#151718"`).
///
/// The themed layer never rewrites colors: an override or palette entry is
/// handed to the widget verbatim. [`Color::to_rgb`] is only used for
/// validation and terminal previews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the color into an RGB triplet.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` (alpha is ignored) plus the
    /// names `white`, `black` and `transparent`. Returns `None` otherwise.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        let value = self.0.trim();
        match value.to_ascii_lowercase().as_str() {
            "white" => return Some((255, 255, 255)),
            "black" | "transparent" => return Some((0, 0, 0)),
            _ => {}
        }

        let hex = value.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some((channel(0)?, channel(1)?, channel(2)?))
            }
            6 | 8 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some((channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// True for `transparent` and for `#rrggbbaa` values with zero alpha.
    pub fn is_transparent(&self) -> bool {
        let value = self.0.trim();
        if value.eq_ignore_ascii_case("transparent") {
            return true;
        }
        match value.strip_prefix('#') {
            Some(hex) if hex.len() == 8 && hex.is_ascii() => {
                u8::from_str_radix(&hex[6..8], 16) == Ok(0)
            }
            _ => false,
        }
    }

    /// Maps the color to the nearest ANSI 256-color palette index.
    ///
    /// Fully transparent colors have no terminal equivalent and map to `None`.
    pub fn to_ansi256(&self) -> Option<u8> {
        if self.is_transparent() {
            return None;
        }
        self.to_rgb().map(rgb_to_ansi256)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use themed::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
