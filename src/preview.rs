//! Terminal preview of element trees.
//!
//! Renders one line per element, children indented two spaces, painting each
//! line with the element's flattened foreground and background colors mapped
//! to the ANSI 256-color palette. Handy for eyeballing a theme from a CLI or a
//! failing test.

use console::Style as TermStyle;

use crate::style::{FontWeight, Style};
use crate::widgets::Element;

/// Renders [`Element`] trees as terminal text.
///
/// # Example
///
/// ```rust
/// use themed::{text, view, ColorMode, Palette, Preview, TextProps, ThemeContext, ViewProps};
///
/// let palette = Palette::default();
/// let ctx = ThemeContext::new(&palette, Some(ColorMode::Dark));
/// let screen = view(&ctx, ViewProps::new(vec![text(&ctx, TextProps::new("Hello"))]));
///
/// let output = Preview::new().render(&screen);
/// assert_eq!(output, "[View]\n  Hello\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Preview {
    use_color: bool,
    width: Option<usize>,
}

impl Preview {
    /// A preview without colors or truncation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits ANSI color codes regardless of terminal detection.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Truncates each line to `width` display columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(&self, element: &Element) -> String {
        let mut out = String::new();
        self.render_into(element, 0, &mut out);
        out
    }

    fn render_into(&self, element: &Element, depth: usize, out: &mut String) {
        let style = element.style().flatten();
        let (indent, label) = match self.width {
            // The indent is clamped so at least one column is left for the label.
            Some(0) => (String::new(), String::new()),
            Some(width) => {
                let indent = " ".repeat((depth * 2).min(width - 1));
                let label = truncate_to_width(&describe(element), width - indent.len());
                (indent, label)
            }
            None => ("  ".repeat(depth), describe(element)),
        };

        out.push_str(&indent);
        out.push_str(&self.paint(&style, &label));
        out.push('\n');

        for child in element.children() {
            self.render_into(child, depth + 1, out);
        }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }

        let mut term = TermStyle::new().force_styling(true);
        if let Some(fg) = style.color.as_ref().and_then(|c| c.to_ansi256()) {
            term = term.color256(fg);
        }
        if let Some(bg) = style.background_color.as_ref().and_then(|c| c.to_ansi256()) {
            term = term.on_color256(bg);
        }
        if style.font_weight == Some(FontWeight::Bold) {
            term = term.bold();
        }
        if style.opacity.is_some_and(|o| o < 1.0) {
            term = term.dim();
        }
        term.apply_to(text).to_string()
    }
}

fn describe(element: &Element) -> String {
    match element {
        Element::Text(props) => props.content.clone(),
        Element::TextInput(props) => {
            let shown = if props.value.is_empty() {
                props.placeholder.clone().unwrap_or_default()
            } else if props.secure_text_entry {
                "•".repeat(props.value.chars().count())
            } else {
                props.value.clone()
            };
            format!("[{}]", shown)
        }
        Element::Pressable(props) if props.disabled => match props.test_id.as_deref() {
            Some(id) => format!("[Pressable disabled #{}]", id),
            None => "[Pressable disabled]".to_string(),
        },
        other => match other.test_id() {
            Some(id) => format!("[{} #{}]", other.kind(), id),
            None => format!("[{}]", other.kind()),
        },
    }
}

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
///
/// # Example
///
/// ```rust
/// use themed::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
