//! # Themed - light/dark aware widget wrappers
//!
//! `themed` decorates a toolkit's core widgets with colors taken from a
//! light/dark palette. Each wrapper resolves one color, puts it first in the
//! widget's style list, and passes every other property through unchanged.
//!
//! ## Concepts
//!
//! - [`ColorMode`]: Light or dark, detected from the OS or supplied explicitly
//! - [`Palette`]: One [`ColorTable`] per mode, mapping [`ColorRole`]s to [`Color`]s
//! - [`theme_color`]: Picks a per-call override for the active mode, else the palette entry
//! - [`ThemeContext`]: A palette plus the mode for one render pass
//! - [`Themed`]: Native widget props plus optional `light_color` / `dark_color`
//! - [`text`], [`view`], [`scroll_view`], [`text_input`], [`pressable`]: The wrappers
//!
//! ## Quick Start
//!
//! ```rust
//! use themed::{text, view, ColorMode, Element, Palette, Style, TextProps, ThemeContext, Themed, ViewProps};
//!
//! let palette = Palette::default();
//! let ctx = ThemeContext::new(&palette, Some(ColorMode::Dark));
//!
//! let screen = view(
//!     &ctx,
//!     Themed::new(ViewProps {
//!         style: Style::new().padding(16.0).into(),
//!         ..ViewProps::new(vec![text(&ctx, TextProps::new("Tab One"))])
//!     })
//!     .dark_color("#000000"),
//! );
//!
//! let style = screen.style().flatten();
//! assert_eq!(style.background_color.unwrap().as_str(), "#000000");
//! assert_eq!(style.padding, Some(16.0));
//! ```
//!
//! ## Ambient Color Scheme
//!
//! [`ThemeContext::detect`] reads the current scheme through a process-wide
//! detector that defaults to the OS setting. Force a mode with
//! [`set_color_scheme_detector`]; a detector returning `None` (no preference)
//! is treated as light.
//!
//! ```rust
//! use themed::{set_color_scheme_detector, ColorMode, Palette, ThemeContext};
//!
//! set_color_scheme_detector(|| Some(ColorMode::Dark));
//! let palette = Palette::default();
//! assert_eq!(ThemeContext::detect(&palette).mode(), ColorMode::Dark);
//! ```
//!
//! ## Palette Files
//!
//! Palettes load from YAML or JSON with [`Palette::from_file`]. Both modes
//! must list every role; missing or unknown roles are load errors.

pub mod mode;
pub mod palette;
pub mod preview;
pub mod resolve;
pub mod style;
pub mod widgets;

pub use mode::{
    detect_color_mode, reset_color_scheme_detector, set_color_scheme_detector, ColorMode,
    ColorSchemeDetector,
};
pub use palette::{rgb_to_ansi256, Color, ColorRole, ColorTable, Palette, PaletteError};
pub use preview::{truncate_to_width, Preview};
pub use resolve::{theme_color, ColorOverrides, ThemeContext};
pub use style::{FontWeight, Style, StyleList};
pub use widgets::{
    pressable, render_themed, scroll_view, text, text_input, view, Element, Handler,
    NativeWidget, PressableProps, ScrollViewProps, StyleTarget, TextInputProps, TextProps,
    Themed, ViewProps,
};
