//! Native property records for the underlying widgets.
//!
//! These are the properties the host toolkit understands. The themed wrappers
//! only ever touch `style`; everything else is moved through untouched.

use std::fmt;
use std::rc::Rc;

use super::Element;
use crate::palette::Color;
use crate::style::StyleList;

/// A reference-counted event callback.
///
/// Two handlers are equal only when they are the same callback, so a handler
/// that survives a wrapper unchanged compares equal to the one passed in.
pub struct Handler<A = ()>(Rc<dyn Fn(A)>);

impl<A> Handler<A> {
    pub fn new(callback: impl Fn(A) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, arg: A) {
        (self.0)(arg)
    }

    /// True when both handlers share the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> PartialEq for Handler<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    pub content: String,
    pub number_of_lines: Option<usize>,
    pub selectable: bool,
    pub accessibility_label: Option<String>,
    pub test_id: Option<String>,
    pub on_press: Option<Handler>,
    pub style: StyleList,
}

impl TextProps {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewProps {
    pub children: Vec<Element>,
    pub accessibility_label: Option<String>,
    pub test_id: Option<String>,
    pub style: StyleList,
}

impl ViewProps {
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollViewProps {
    pub children: Vec<Element>,
    pub horizontal: bool,
    pub shows_scroll_indicator: bool,
    pub content_container_style: StyleList,
    pub test_id: Option<String>,
    pub style: StyleList,
}

impl ScrollViewProps {
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}

impl Default for ScrollViewProps {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            horizontal: false,
            shows_scroll_indicator: true,
            content_container_style: StyleList::new(),
            test_id: None,
            style: StyleList::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextInputProps {
    pub value: String,
    pub placeholder: Option<String>,
    pub placeholder_text_color: Option<Color>,
    pub editable: bool,
    pub secure_text_entry: bool,
    pub max_length: Option<usize>,
    pub on_change_text: Option<Handler<String>>,
    pub test_id: Option<String>,
    pub style: StyleList,
}

impl TextInputProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

impl Default for TextInputProps {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: None,
            placeholder_text_color: None,
            editable: true,
            secure_text_entry: false,
            max_length: None,
            on_change_text: None,
            test_id: None,
            style: StyleList::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressableProps {
    pub children: Vec<Element>,
    pub disabled: bool,
    pub on_press: Option<Handler>,
    pub on_long_press: Option<Handler>,
    pub accessibility_label: Option<String>,
    pub test_id: Option<String>,
    pub style: StyleList,
}

impl PressableProps {
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }
}
