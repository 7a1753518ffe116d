//! ANSI terminal output.

use console::Style;

use crate::style::{Attributes, LineBreakMode};
use crate::text::AttributedText;
use crate::util::width_cut;

const ELLIPSIS: &str = "…";

/// Options for [`to_ansi_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnsiOptions {
    /// Available columns. Only consulted when the text's line break mode
    /// truncates or clips.
    pub width: Option<usize>,
    /// Emit escape codes. When false the output is the bare text.
    pub use_color: bool,
}

/// Renders `text` for a terminal.
///
/// Foreground and background colors are mapped to the 256-color palette
/// (transparent ones are skipped);
/// underline and strikethrough map to the matching SGR attributes. Fonts,
/// kerning and paragraph spacing have no terminal equivalent and are
/// ignored. With a width, [`LineBreakMode::TruncatingTail`] shortens the
/// text with an ellipsis and [`LineBreakMode::Clipping`] cuts it short.
///
/// # Example
///
/// ```rust
/// use styled_text::render::{to_ansi_string, AnsiOptions};
/// use styled_text::{merge_plain, Color, Font, LineBreakMode, StyleDescriptor};
///
/// let style = StyleDescriptor::builder(Font::system(12.0), Color::BLACK)
///     .line_break_mode(LineBreakMode::TruncatingTail)
///     .build();
/// let text = merge_plain("Hello World", &style);
///
/// let options = AnsiOptions { width: Some(6), use_color: false };
/// assert_eq!(to_ansi_string(&text, options), "Hello…");
/// ```
pub fn to_ansi_string(text: &AttributedText, options: AnsiOptions) -> String {
    let (cut, ellipsis) = match options.width {
        Some(width) => fit(text, width),
        None => (text.len(), false),
    };

    let mut out = String::with_capacity(text.len());
    for run in text.runs() {
        let range = run.range();
        if range.start >= cut {
            break;
        }
        let segment = &text.as_str()[range.start..range.end.min(cut)];
        out.push_str(&paint(segment, run.attributes(), options.use_color));
    }

    if ellipsis {
        let attributes = text
            .attributes_at(cut.saturating_sub(1))
            .cloned()
            .unwrap_or_default();
        out.push_str(&paint(ELLIPSIS, &attributes, options.use_color));
    }
    out
}

/// Returns the byte length to render and whether to append an ellipsis.
fn fit(text: &AttributedText, width: usize) -> (usize, bool) {
    let mode = text
        .runs()
        .first()
        .and_then(|run| run.attributes().paragraph_style())
        .and_then(|paragraph| paragraph.line_break_mode);

    match mode {
        Some(LineBreakMode::TruncatingTail) => match width_cut(text.as_str(), width, 1) {
            // No room for the ellipsis either.
            Some(_) if width == 0 => (0, false),
            Some(cut) => (cut, true),
            None => (text.len(), false),
        },
        Some(LineBreakMode::Clipping) => match width_cut(text.as_str(), width, 0) {
            Some(cut) => (cut, false),
            None => (text.len(), false),
        },
        _ => (text.len(), false),
    }
}

fn paint(segment: &str, attributes: &Attributes, use_color: bool) -> String {
    if !use_color {
        return segment.to_string();
    }
    let mut style = Style::new().force_styling(true);
    if let Some(color) = attributes.foreground_color().and_then(|c| c.to_console()) {
        style = style.fg(color);
    }
    if let Some(color) = attributes.background_color().and_then(|c| c.to_console()) {
        style = style.bg(color);
    }
    if attributes.is_underlined() {
        style = style.underlined();
    }
    if attributes.is_struck_through() {
        style = style.strikethrough();
    }
    style.apply_to(segment).to_string()
}
