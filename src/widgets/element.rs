//! Widget instances handed to the host toolkit.

use super::props::{PressableProps, ScrollViewProps, TextInputProps, TextProps, ViewProps};
use crate::style::StyleList;

/// A widget instance: the widget kind together with its final properties.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextProps),
    View(ViewProps),
    ScrollView(ScrollViewProps),
    TextInput(TextInputProps),
    Pressable(PressableProps),
}

impl Element {
    /// The toolkit name of this widget kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "Text",
            Element::View(_) => "View",
            Element::ScrollView(_) => "ScrollView",
            Element::TextInput(_) => "TextInput",
            Element::Pressable(_) => "Pressable",
        }
    }

    pub fn style(&self) -> &StyleList {
        match self {
            Element::Text(props) => &props.style,
            Element::View(props) => &props.style,
            Element::ScrollView(props) => &props.style,
            Element::TextInput(props) => &props.style,
            Element::Pressable(props) => &props.style,
        }
    }

    /// Child elements; empty for leaf widgets.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::View(props) => &props.children,
            Element::ScrollView(props) => &props.children,
            Element::Pressable(props) => &props.children,
            Element::Text(_) | Element::TextInput(_) => &[],
        }
    }

    pub fn test_id(&self) -> Option<&str> {
        match self {
            Element::Text(props) => props.test_id.as_deref(),
            Element::View(props) => props.test_id.as_deref(),
            Element::ScrollView(props) => props.test_id.as_deref(),
            Element::TextInput(props) => props.test_id.as_deref(),
            Element::Pressable(props) => props.test_id.as_deref(),
        }
    }

    /// Depth-first search for the element with the given test id.
    pub fn find_by_test_id(&self, id: &str) -> Option<&Element> {
        if self.test_id() == Some(id) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_test_id(id))
    }
}

impl From<TextProps> for Element {
    fn from(props: TextProps) -> Self {
        Element::Text(props)
    }
}

impl From<ViewProps> for Element {
    fn from(props: ViewProps) -> Self {
        Element::View(props)
    }
}

impl From<ScrollViewProps> for Element {
    fn from(props: ScrollViewProps) -> Self {
        Element::ScrollView(props)
    }
}

impl From<TextInputProps> for Element {
    fn from(props: TextInputProps) -> Self {
        Element::TextInput(props)
    }
}

impl From<PressableProps> for Element {
    fn from(props: PressableProps) -> Self {
        Element::Pressable(props)
    }
}
