//! Ordered style lists.

use serde::{Deserialize, Serialize};

use super::Style;

/// An ordered sequence of style fragments attached to a widget.
///
/// Callers can hand a widget a single [`Style`] or several; both convert into
/// a `StyleList`. When the list is [flattened](StyleList::flatten), later
/// fragments override earlier ones for any property both set.
///
/// # Example
///
/// ```rust
/// use themed::{Style, StyleList};
///
/// let list = StyleList::from(vec![
///     Style::new().color("#000").padding(8.0),
///     Style::new().color("#fff"),
/// ]);
///
/// let style = list.flatten();
/// assert_eq!(style.color.unwrap().as_str(), "#fff");
/// assert_eq!(style.padding, Some(8.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleList(Vec<Style>);

impl StyleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fragments(&self) -> &[Style] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.0.iter()
    }

    /// Appends a fragment that takes precedence over everything before it.
    pub fn push(&mut self, style: Style) {
        self.0.push(style);
    }

    /// Returns the list with `style` placed first, so every existing fragment
    /// can still override it.
    pub fn prepended(mut self, style: Style) -> Self {
        self.0.insert(0, style);
        self
    }

    /// Collapses the list into one style, applying fragments in order.
    pub fn flatten(&self) -> Style {
        self.0.iter().fold(Style::default(), |mut acc, style| {
            acc.merge(style);
            acc
        })
    }
}

impl From<Style> for StyleList {
    fn from(style: Style) -> Self {
        Self(vec![style])
    }
}

impl From<Vec<Style>> for StyleList {
    fn from(styles: Vec<Style>) -> Self {
        Self(styles)
    }
}

impl<const N: usize> From<[Style; N]> for StyleList {
    fn from(styles: [Style; N]) -> Self {
        Self(styles.into())
    }
}

impl From<Option<Style>> for StyleList {
    fn from(style: Option<Style>) -> Self {
        Self(style.into_iter().collect())
    }
}

impl FromIterator<Style> for StyleList {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StyleList {
    type Item = Style;
    type IntoIter = std::vec::IntoIter<Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleList {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;

    #[test]
    fn test_single_and_sequence_forms() {
        let single = StyleList::from(Style::new().padding(1.0));
        assert_eq!(single.len(), 1);

        let many = StyleList::from([Style::new().padding(1.0), Style::new().margin(2.0)]);
        assert_eq!(many.len(), 2);

        assert!(StyleList::from(None::<Style>).is_empty());
    }

    #[test]
    fn test_prepended_goes_first() {
        let list = StyleList::from(vec![Style::new().padding(1.0), Style::new().margin(2.0)])
            .prepended(Style::new().color("#000"));

        assert_eq!(list.fragments()[0], Style::new().color("#000"));
        assert_eq!(list.fragments()[1], Style::new().padding(1.0));
        assert_eq!(list.fragments()[2], Style::new().margin(2.0));
    }

    #[test]
    fn test_flatten_prepended_can_be_overridden() {
        let list = StyleList::from(Style::new().background_color("#ff0000"))
            .prepended(Style::new().background_color("#151718"));
        assert_eq!(
            list.flatten().background_color,
            Some(Color::from("#ff0000"))
        );
    }

    #[test]
    fn test_flatten_empty() {
        assert!(StyleList::new().flatten().is_empty());
    }
}
