//! Light/dark palette tables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Color, ColorRole, PaletteError};
use crate::mode::ColorMode;

/// One color per [`ColorRole`] for a single mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorTable {
    pub text: Color,
    pub background: Color,
    pub tint: Color,
    pub icon: Color,
    pub tab_icon_default: Color,
    pub tab_icon_selected: Color,
}

impl ColorTable {
    pub fn get(&self, role: ColorRole) -> &Color {
        match role {
            ColorRole::Text => &self.text,
            ColorRole::Background => &self.background,
            ColorRole::Tint => &self.tint,
            ColorRole::Icon => &self.icon,
            ColorRole::TabIconDefault => &self.tab_icon_default,
            ColorRole::TabIconSelected => &self.tab_icon_selected,
        }
    }

    /// Returns a copy with `role` replaced, for building palettes fluently.
    pub fn with(mut self, role: ColorRole, color: impl Into<Color>) -> Self {
        let slot = match role {
            ColorRole::Text => &mut self.text,
            ColorRole::Background => &mut self.background,
            ColorRole::Tint => &mut self.tint,
            ColorRole::Icon => &mut self.icon,
            ColorRole::TabIconDefault => &mut self.tab_icon_default,
            ColorRole::TabIconSelected => &mut self.tab_icon_selected,
        };
        *slot = color.into();
        self
    }

    /// Iterates `(role, color)` pairs in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &Color)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    fn light_default() -> Self {
        Self {
            text: "#11181C".into(),
            background: "#fff".into(),
            tint: "#0a7ea4".into(),
            icon: "#687076".into(),
            tab_icon_default: "#687076".into(),
            tab_icon_selected: "#0a7ea4".into(),
        }
    }

    fn dark_default() -> Self {
        Self {
            text: "#ECEDEE".into(),
            background: "#151718".into(),
            tint: "#fff".into(),
            icon: "#9BA1A6".into(),
            tab_icon_default: "#9BA1A6".into(),
            tab_icon_selected: "#fff".into(),
        }
    }
}

/// Color tables for both modes.
///
/// Because both branches are [`ColorTable`]s they always share the same role
/// set; files that omit a role or add an unknown one are rejected at load time.
///
/// # Example
///
/// ```rust
/// use themed::{ColorMode, ColorRole, Palette};
///
/// let palette = Palette::from_yaml_str(r##"
/// light:
///   text: "#000000"
///   background: "#ffffff"
///   tint: "#2f95dc"
///   icon: "#cccccc"
///   tabIconDefault: "#cccccc"
///   tabIconSelected: "#2f95dc"
/// dark:
///   text: "#ffffff"
///   background: "#000000"
///   tint: "#ffffff"
///   icon: "#cccccc"
///   tabIconDefault: "#cccccc"
///   tabIconSelected: "#ffffff"
/// "##).unwrap();
///
/// assert_eq!(palette.color(ColorMode::Dark, ColorRole::Text).as_str(), "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Palette {
    pub light: ColorTable,
    pub dark: ColorTable,
}

impl Palette {
    pub fn new(light: ColorTable, dark: ColorTable) -> Self {
        Self { light, dark }
    }

    pub fn table(&self, mode: ColorMode) -> &ColorTable {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn color(&self, mode: ColorMode, role: ColorRole) -> &Color {
        self.table(mode).get(role)
    }

    /// Checks that every entry in both tables is a parseable color.
    pub fn validate(&self) -> Result<(), PaletteError> {
        for mode in ColorMode::ALL {
            for (role, color) in self.table(mode).iter() {
                if color.to_rgb().is_none() {
                    return Err(PaletteError::InvalidColor {
                        mode,
                        role,
                        value: color.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, PaletteError> {
        let palette: Palette = serde_yaml::from_str(source)?;
        palette.validate()?;
        tracing::debug!("loaded YAML palette");
        Ok(palette)
    }

    pub fn from_json_str(source: &str) -> Result<Self, PaletteError> {
        let palette: Palette = serde_json::from_str(source)?;
        palette.validate()?;
        tracing::debug!("loaded JSON palette");
        Ok(palette)
    }

    /// Loads a palette file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let is_json = match extension.as_deref() {
            Some("yaml") | Some("yml") => false,
            Some("json") => true,
            _ => {
                return Err(PaletteError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading palette file");

        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: ColorTable::light_default(),
            dark: ColorTable::dark_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_YAML: &str = r##"
light:
  text: "#000000"
  background: "#ffffff"
  tint: "#2f95dc"
  icon: "#cccccc"
  tabIconDefault: "#cccccc"
  tabIconSelected: "#2f95dc"
dark:
  text: "#ffffff"
  background: "#151718"
  tint: "#ffffff"
  icon: "#cccccc"
  tabIconDefault: "#cccccc"
  tabIconSelected: "#ffffff"
"##;

    #[test]
    fn test_default_palette_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.color(ColorMode::Light, ColorRole::Text).as_str(), "#11181C");
        assert_eq!(
            palette.color(ColorMode::Dark, ColorRole::Background).as_str(),
            "#151718"
        );
        assert!(palette.validate().is_ok());
    }

    #[test]
    fn test_with_replaces_single_role() {
        let table = ColorTable::light_default().with(ColorRole::Tint, "#ff0000");
        assert_eq!(table.tint.as_str(), "#ff0000");
        assert_eq!(table.text.as_str(), "#11181C");
    }

    #[test]
    fn test_iter_visits_every_role() {
        let palette = Palette::default();
        let roles: Vec<ColorRole> = palette.light.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, ColorRole::ALL.to_vec());
    }

    #[test]
    fn test_from_yaml() {
        let palette = Palette::from_yaml_str(FULL_YAML).unwrap();
        assert_eq!(palette.light.text.as_str(), "#000000");
        assert_eq!(palette.dark.tab_icon_selected.as_str(), "#ffffff");
    }

    #[test]
    fn test_from_yaml_missing_role_fails() {
        let yaml = FULL_YAML.replace("  icon: \"#cccccc\"\n", "");
        let err = Palette::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, PaletteError::Yaml(_)));
        assert!(err.to_string().contains("icon"));
    }

    #[test]
    fn test_from_yaml_unknown_role_fails() {
        let yaml = FULL_YAML.replace("light:\n", "light:\n  accent: \"#123456\"\n");
        assert!(Palette::from_yaml_str(&yaml).is_err());
    }

    #[test]
    fn test_from_yaml_invalid_color_fails() {
        let yaml = FULL_YAML.replace("\"#151718\"", "\"dusk\"");
        match Palette::from_yaml_str(&yaml) {
            Err(PaletteError::InvalidColor { mode, role, value }) => {
                assert_eq!(mode, ColorMode::Dark);
                assert_eq!(role, ColorRole::Background);
                assert_eq!(value, "dusk");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(&Palette::default()).unwrap();
        assert!(json.contains("tabIconDefault"));
        let palette = Palette::from_json_str(&json).unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(FULL_YAML.as_bytes()).unwrap();

        let palette = Palette::from_file(&path).unwrap();
        assert_eq!(palette.dark.background.as_str(), "#151718");
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let err = Palette::from_file("colors.toml").unwrap_err();
        assert!(matches!(err, PaletteError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Palette::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PaletteError::Io { .. }));
    }
}
