//! Paragraph-level formatting.

/// Horizontal alignment of lines within a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Follows the writing direction of the text.
    Natural,
}

/// What happens to text that does not fit its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    TruncatingTail,
    TruncatingMiddle,
}

/// Paragraph attributes produced by resolving a style.
///
/// `None` leaves the renderer's default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphStyle {
    pub line_spacing: Option<f64>,
    /// Multiple of the font's point size, already normalised against the
    /// font's natural line height.
    pub line_height_multiple: Option<f64>,
    pub alignment: Option<TextAlignment>,
    pub line_break_mode: Option<LineBreakMode>,
}

impl ParagraphStyle {
    /// Returns `true` if no attribute is set.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
