//! Themed color resolution.
//!
//! A color is resolved from three inputs: the active [`ColorMode`], an
//! optional per-call [`ColorOverrides`] pair, and a [`ColorRole`] looked up in
//! the [`Palette`] when no override applies.

use crate::mode::{detect_color_mode, ColorMode};
use crate::palette::{Color, ColorRole, Palette};

/// Per-call colors that take precedence over the palette.
///
/// Either, both or neither entry may be present. An empty string counts as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub light: Option<Color>,
    pub dark: Option<Color>,
}

impl ColorOverrides {
    pub fn new(light: Option<Color>, dark: Option<Color>) -> Self {
        Self { light, dark }
    }

    pub fn light(color: impl Into<Color>) -> Self {
        Self {
            light: Some(color.into()),
            dark: None,
        }
    }

    pub fn dark(color: impl Into<Color>) -> Self {
        Self {
            light: None,
            dark: Some(color.into()),
        }
    }

    /// The override for `mode`, if one was given and is not empty.
    pub fn for_mode(&self, mode: ColorMode) -> Option<&Color> {
        let color = match mode {
            ColorMode::Light => self.light.as_ref(),
            ColorMode::Dark => self.dark.as_ref(),
        };
        color.filter(|c| !c.is_empty())
    }
}

/// Resolves the color for `role`.
///
/// Returns the override for the active mode when there is one, otherwise the
/// palette entry. A `mode` of `None` means no preference and resolves as
/// [`ColorMode::Light`].
///
/// # Example
///
/// ```rust
/// use themed::{theme_color, ColorMode, ColorOverrides, ColorRole, Palette};
///
/// let palette = Palette::default();
/// let overrides = ColorOverrides::dark("#112233");
///
/// let dark = theme_color(&palette, Some(ColorMode::Dark), &overrides, ColorRole::Background);
/// assert_eq!(dark.as_str(), "#112233");
///
/// let light = theme_color(&palette, None, &overrides, ColorRole::Background);
/// assert_eq!(light, palette.light.background);
/// ```
pub fn theme_color(
    palette: &Palette,
    mode: Option<ColorMode>,
    overrides: &ColorOverrides,
    role: ColorRole,
) -> Color {
    let mode = ColorMode::or_default(mode);
    match overrides.for_mode(mode) {
        Some(color) => {
            tracing::trace!(%role, %mode, %color, "using color override");
            color.clone()
        }
        None => {
            let color = palette.color(mode, role);
            tracing::trace!(%role, %mode, %color, "using palette color");
            color.clone()
        }
    }
}

/// The palette and color mode for one render pass.
///
/// The mode is read once when the context is built, so every widget rendered
/// through the same context sees the same scheme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext<'a> {
    palette: &'a Palette,
    mode: ColorMode,
}

impl<'a> ThemeContext<'a> {
    /// Creates a context with an explicit mode; `None` resolves as light.
    pub fn new(palette: &'a Palette, mode: Option<ColorMode>) -> Self {
        Self {
            palette,
            mode: ColorMode::or_default(mode),
        }
    }

    /// Creates a context using the ambient color scheme.
    pub fn detect(palette: &'a Palette) -> Self {
        Self::new(palette, detect_color_mode())
    }

    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn theme_color(&self, overrides: &ColorOverrides, role: ColorRole) -> Color {
        theme_color(self.palette, Some(self.mode), overrides, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{reset_color_scheme_detector, set_color_scheme_detector};
    use crate::palette::ColorTable;
    use proptest::prelude::*;
    use serial_test::serial;

    fn test_palette() -> Palette {
        let base = Palette::default();
        Palette::new(
            base.light.with(ColorRole::Text, "#000000"),
            base.dark.with(ColorRole::Background, "#151718"),
        )
    }

    #[test]
    fn test_light_palette_lookup() {
        let palette = test_palette();
        let color = theme_color(
            &palette,
            Some(ColorMode::Light),
            &ColorOverrides::default(),
            ColorRole::Text,
        );
        assert_eq!(color.as_str(), "#000000");
    }

    #[test]
    fn test_override_wins_for_active_mode() {
        let palette = test_palette();
        let color = theme_color(
            &palette,
            Some(ColorMode::Dark),
            &ColorOverrides::dark("#112233"),
            ColorRole::Background,
        );
        assert_eq!(color.as_str(), "#112233");
    }

    #[test]
    fn test_override_for_other_mode_falls_back() {
        let palette = test_palette();
        let color = theme_color(
            &palette,
            Some(ColorMode::Light),
            &ColorOverrides::dark("#112233"),
            ColorRole::Background,
        );
        assert_eq!(color, palette.light.background);
    }

    #[test]
    fn test_no_mode_behaves_as_light() {
        let palette = test_palette();
        let overrides = ColorOverrides::new(Some("#aaaaaa".into()), Some("#bbbbbb".into()));
        assert_eq!(
            theme_color(&palette, None, &overrides, ColorRole::Text).as_str(),
            "#aaaaaa"
        );
        assert_eq!(
            theme_color(&palette, None, &ColorOverrides::default(), ColorRole::Tint),
            palette.light.tint
        );
    }

    #[test]
    fn test_empty_override_counts_as_absent() {
        let palette = test_palette();
        let color = theme_color(
            &palette,
            Some(ColorMode::Dark),
            &ColorOverrides::dark(""),
            ColorRole::Background,
        );
        assert_eq!(color.as_str(), "#151718");
    }

    #[test]
    fn test_context_fixes_mode() {
        let palette = test_palette();
        let ctx = ThemeContext::new(&palette, Some(ColorMode::Dark));
        assert_eq!(ctx.mode(), ColorMode::Dark);
        assert_eq!(
            ctx.theme_color(&ColorOverrides::default(), ColorRole::Background)
                .as_str(),
            "#151718"
        );
    }

    #[test]
    #[serial]
    fn test_context_detect_uses_detector() {
        let palette = test_palette();

        set_color_scheme_detector(|| Some(ColorMode::Dark));
        assert_eq!(ThemeContext::detect(&palette).mode(), ColorMode::Dark);

        set_color_scheme_detector(|| None);
        assert_eq!(ThemeContext::detect(&palette).mode(), ColorMode::Light);

        reset_color_scheme_detector();
    }

    fn arb_mode() -> impl Strategy<Value = ColorMode> {
        prop_oneof![Just(ColorMode::Light), Just(ColorMode::Dark)]
    }

    fn arb_role() -> impl Strategy<Value = ColorRole> {
        prop::sample::select(ColorRole::ALL.to_vec())
    }

    fn arb_hex() -> impl Strategy<Value = String> {
        "#[0-9a-f]{6}"
    }

    fn arb_table() -> impl Strategy<Value = ColorTable> {
        prop::collection::vec(arb_hex(), 6).prop_map(|c| ColorTable {
            text: c[0].clone().into(),
            background: c[1].clone().into(),
            tint: c[2].clone().into(),
            icon: c[3].clone().into(),
            tab_icon_default: c[4].clone().into(),
            tab_icon_selected: c[5].clone().into(),
        })
    }

    proptest! {
        #[test]
        fn prop_no_override_reads_palette(
            light in arb_table(),
            dark in arb_table(),
            mode in arb_mode(),
            role in arb_role(),
        ) {
            let palette = Palette::new(light, dark);
            let color = theme_color(&palette, Some(mode), &ColorOverrides::default(), role);
            prop_assert_eq!(&color, palette.table(mode).get(role));
        }

        #[test]
        fn prop_override_for_active_mode_wins(
            light in arb_table(),
            dark in arb_table(),
            mode in arb_mode(),
            role in arb_role(),
            over in arb_hex(),
        ) {
            let palette = Palette::new(light, dark);
            let overrides = match mode {
                ColorMode::Light => ColorOverrides::light(over.clone()),
                ColorMode::Dark => ColorOverrides::dark(over.clone()),
            };
            let color = theme_color(&palette, Some(mode), &overrides, role);
            prop_assert_eq!(color.as_str(), over.as_str());
        }
    }
}
