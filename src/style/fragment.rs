//! A single style fragment.

use serde::{Deserialize, Serialize};

use crate::palette::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// One style object in a [`StyleList`](super::StyleList).
///
/// Every property is optional; unset properties leave whatever an earlier
/// fragment set in place when the list is flattened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<Color>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.font_weight(FontWeight::Bold)
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Applies every property `other` sets on top of `self`.
    pub fn merge(&mut self, other: &Style) {
        overlay(&mut self.color, &other.color);
        overlay(&mut self.background_color, &other.background_color);
        overlay(&mut self.border_color, &other.border_color);
        overlay(&mut self.border_width, &other.border_width);
        overlay(&mut self.border_radius, &other.border_radius);
        overlay(&mut self.padding, &other.padding);
        overlay(&mut self.margin, &other.margin);
        overlay(&mut self.font_size, &other.font_size);
        overlay(&mut self.font_weight, &other.font_weight);
        overlay(&mut self.opacity, &other.opacity);
        overlay(&mut self.flex, &other.flex);
    }
}

fn overlay<T: Clone>(base: &mut Option<T>, top: &Option<T>) {
    if top.is_some() {
        base.clone_from(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_later_wins() {
        let mut base = Style::new().color("#000").padding(4.0);
        base.merge(&Style::new().color("#fff").margin(2.0));

        assert_eq!(base.color, Some(Color::from("#fff")));
        assert_eq!(base.padding, Some(4.0));
        assert_eq!(base.margin, Some(2.0));
    }

    #[test]
    fn test_merge_unset_keeps_base() {
        let mut base = Style::new().background_color("#151718");
        base.merge(&Style::new());
        assert_eq!(base.background_color, Some(Color::from("#151718")));
    }

    #[test]
    fn test_is_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().bold().is_empty());
    }

    #[test]
    fn test_serializes_only_set_properties() {
        let json = serde_json::to_string(&Style::new().background_color("#fff")).unwrap();
        assert_eq!(json, r##"{"backgroundColor":"#fff"}"##);
    }
}
