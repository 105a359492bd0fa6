//! Color scheme detection.
//!
//! The active [`ColorMode`] comes from a process-wide detector. By default the
//! detector asks the operating system through `dark-light`; tests and hosts
//! that know better can swap it out with [`set_color_scheme_detector`].

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Both modes, light first.
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    /// Resolves a possibly-missing preference, treating "no preference" as light.
    pub fn or_default(mode: Option<ColorMode>) -> ColorMode {
        mode.unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(format!("unknown color mode '{}'", other)),
        }
    }
}

/// A function reporting the current color scheme, or `None` when there is no
/// preference.
pub type ColorSchemeDetector = fn() -> Option<ColorMode>;

static COLOR_SCHEME_DETECTOR: Lazy<Mutex<ColorSchemeDetector>> =
    Lazy::new(|| Mutex::new(os_color_scheme));

/// Overrides the detector used to determine whether the user prefers a light or dark scheme.
///
/// This is useful for testing or when the host application wants to force a
/// specific color mode.
pub fn set_color_scheme_detector(detector: ColorSchemeDetector) {
    let mut guard = COLOR_SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_color_scheme_detector() {
    set_color_scheme_detector(os_color_scheme);
}

/// Reads the ambient color scheme through the installed detector.
pub fn detect_color_mode() -> Option<ColorMode> {
    let detector = *COLOR_SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn os_color_scheme() -> Option<ColorMode> {
    let mode = match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    };
    tracing::debug!(mode = %mode, "detected OS color scheme");
    Some(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_missing_preference_is_light() {
        assert_eq!(ColorMode::or_default(None), ColorMode::Light);
        assert_eq!(ColorMode::or_default(Some(ColorMode::Dark)), ColorMode::Dark);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("dark".parse::<ColorMode>(), Ok(ColorMode::Dark));
        assert_eq!(ColorMode::Light.to_string(), "light");
        assert!("dim".parse::<ColorMode>().is_err());
    }

    #[test]
    #[serial]
    fn test_detector_override() {
        set_color_scheme_detector(|| Some(ColorMode::Dark));
        assert_eq!(detect_color_mode(), Some(ColorMode::Dark));

        set_color_scheme_detector(|| None);
        assert_eq!(detect_color_mode(), None);

        reset_color_scheme_detector();
    }
}
