//! Themed widget wrappers.

use super::props::{PressableProps, ScrollViewProps, TextInputProps, TextProps, ViewProps};
use super::Element;
use crate::palette::{Color, ColorRole};
use crate::resolve::{ColorOverrides, ThemeContext};
use crate::style::{Style, StyleList};

/// Which style property a resolved theme color is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    /// `color`
    Foreground,
    /// `backgroundColor`
    Background,
}

impl StyleTarget {
    /// A fragment carrying only this property.
    pub fn fragment(self, color: Color) -> Style {
        match self {
            StyleTarget::Foreground => Style::new().color(color),
            StyleTarget::Background => Style::new().background_color(color),
        }
    }
}

/// A native property record that can be themed.
pub trait NativeWidget: Into<Element> {
    /// Palette role the wrapper resolves.
    const ROLE: ColorRole;
    /// Style property the resolved color is applied to.
    const TARGET: StyleTarget;

    fn style_mut(&mut self) -> &mut StyleList;
}

impl NativeWidget for TextProps {
    const ROLE: ColorRole = ColorRole::Text;
    const TARGET: StyleTarget = StyleTarget::Foreground;

    fn style_mut(&mut self) -> &mut StyleList {
        &mut self.style
    }
}

impl NativeWidget for ViewProps {
    const ROLE: ColorRole = ColorRole::Background;
    const TARGET: StyleTarget = StyleTarget::Background;

    fn style_mut(&mut self) -> &mut StyleList {
        &mut self.style
    }
}

impl NativeWidget for ScrollViewProps {
    const ROLE: ColorRole = ColorRole::Background;
    const TARGET: StyleTarget = StyleTarget::Background;

    fn style_mut(&mut self) -> &mut StyleList {
        &mut self.style
    }
}

impl NativeWidget for TextInputProps {
    const ROLE: ColorRole = ColorRole::Background;
    const TARGET: StyleTarget = StyleTarget::Background;

    fn style_mut(&mut self) -> &mut StyleList {
        &mut self.style
    }
}

impl NativeWidget for PressableProps {
    const ROLE: ColorRole = ColorRole::Background;
    const TARGET: StyleTarget = StyleTarget::Background;

    fn style_mut(&mut self) -> &mut StyleList {
        &mut self.style
    }
}

/// Native properties plus the two optional theme overrides.
///
/// The overrides sit beside the native record rather than inside it, so they
/// can never shadow a native property.
///
/// # Example
///
/// ```rust
/// use themed::{text, ColorMode, Element, Palette, Style, TextProps, ThemeContext, Themed};
///
/// let palette = Palette::default();
/// let ctx = ThemeContext::new(&palette, Some(ColorMode::Dark));
///
/// let props = TextProps {
///     style: Style::new().bold().into(),
///     ..TextProps::new("Welcome")
/// };
/// let element = text(&ctx, Themed::new(props).dark_color("#ffcc00"));
///
/// let Element::Text(label) = element else { unreachable!() };
/// assert_eq!(label.style.fragments()[0], Style::new().color("#ffcc00"));
/// assert_eq!(label.style.fragments()[1], Style::new().bold());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Themed<P> {
    pub light_color: Option<Color>,
    pub dark_color: Option<Color>,
    pub props: P,
}

impl<P> Themed<P> {
    pub fn new(props: P) -> Self {
        Self {
            light_color: None,
            dark_color: None,
            props,
        }
    }

    pub fn light_color(mut self, color: impl Into<Color>) -> Self {
        self.light_color = Some(color.into());
        self
    }

    pub fn dark_color(mut self, color: impl Into<Color>) -> Self {
        self.dark_color = Some(color.into());
        self
    }

    pub fn overrides(&self) -> ColorOverrides {
        ColorOverrides::new(self.light_color.clone(), self.dark_color.clone())
    }
}

impl<P> From<P> for Themed<P> {
    fn from(props: P) -> Self {
        Self::new(props)
    }
}

/// Applies the theme color for `P` and hands the record to the widget.
///
/// The resolved color becomes the first style fragment; the caller's
/// fragments follow in their original order so they can still override it.
pub fn render_themed<P: NativeWidget>(
    ctx: &ThemeContext<'_>,
    themed: impl Into<Themed<P>>,
) -> Element {
    let Themed {
        light_color,
        dark_color,
        mut props,
    } = themed.into();

    let color = ctx.theme_color(&ColorOverrides::new(light_color, dark_color), P::ROLE);
    let style = std::mem::take(props.style_mut());
    *props.style_mut() = style.prepended(P::TARGET.fragment(color));
    props.into()
}

/// Text with the theme's `text` color as its foreground.
pub fn text(ctx: &ThemeContext<'_>, props: impl Into<Themed<TextProps>>) -> Element {
    render_themed::<TextProps>(ctx, props)
}

/// A view with the theme's `background` color.
pub fn view(ctx: &ThemeContext<'_>, props: impl Into<Themed<ViewProps>>) -> Element {
    render_themed::<ViewProps>(ctx, props)
}

/// A scroll container with the theme's `background` color.
pub fn scroll_view(ctx: &ThemeContext<'_>, props: impl Into<Themed<ScrollViewProps>>) -> Element {
    render_themed::<ScrollViewProps>(ctx, props)
}

/// A text input with the theme's `background` color.
pub fn text_input(ctx: &ThemeContext<'_>, props: impl Into<Themed<TextInputProps>>) -> Element {
    render_themed::<TextInputProps>(ctx, props)
}

/// A pressable control with the theme's `background` color.
pub fn pressable(ctx: &ThemeContext<'_>, props: impl Into<Themed<PressableProps>>) -> Element {
    render_themed::<PressableProps>(ctx, props)
}
