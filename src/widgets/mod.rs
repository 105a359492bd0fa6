//! Themed wrappers around the five core widgets.
//!
//! - [`text`]: foreground color from the `text` role
//! - [`view`], [`scroll_view`], [`text_input`], [`pressable`]: background
//!   color from the `background` role
//!
//! Each wrapper takes a [`Themed`] record (native props plus optional
//! `light_color`/`dark_color` overrides) and returns an [`Element`] whose style
//! list starts with the resolved color, followed by the caller's own styles.
//! No other property is read or changed.

mod element;
mod props;
mod themed;

pub use element::Element;
pub use props::{
    Handler, PressableProps, ScrollViewProps, TextInputProps, TextProps, ViewProps,
};
pub use themed::{
    pressable, render_themed, scroll_view, text, text_input, view, NativeWidget, StyleTarget,
    Themed,
};
