//! Combining text with a resolved style.
//!
//! Plain text takes the style's attributes across its whole length.
//! Attributed text is merged run by run: with the default
//! [`MergePrecedence::ExistingWins`], a run keeps every attribute it already
//! has and gains only the style attributes whose keys it lacks.

use serde::{Deserialize, Serialize};

use super::attributed::AttributedText;
use crate::style::StyleDescriptor;

/// Which side wins when a run and the style set the same attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePrecedence {
    /// Attributes already on the text are kept.
    #[default]
    ExistingWins,
    /// The style's attributes replace those on the text.
    StyleWins,
}

/// Applies `style` uniformly to `text`.
pub fn merge_plain(text: &str, style: &StyleDescriptor) -> AttributedText {
    AttributedText::with_attributes(text, style.resolve())
}

/// Applies `style` to each run of `text` according to `precedence`.
pub fn merge_attributed(
    text: &AttributedText,
    style: &StyleDescriptor,
    precedence: MergePrecedence,
) -> AttributedText {
    let resolved = style.resolve();
    let mut merged = text.clone();
    merged.update_runs(|existing| match precedence {
        MergePrecedence::ExistingWins => existing.extend_missing(&resolved),
        MergePrecedence::StyleWins => existing.extend_replacing(&resolved),
    });
    merged
}

/// The content of a [`StyledText`].
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    Plain(String),
    Attributed(AttributedText),
}

impl TextContent {
    pub fn as_str(&self) -> &str {
        match self {
            TextContent::Plain(text) => text,
            TextContent::Attributed(text) => text.as_str(),
        }
    }
}

/// Text paired with the style it should be rendered in.
///
/// # Example
///
/// ```rust
/// use styled_text::{Attribute, AttributedText, Color, Font, StyleDescriptor, StyledText};
///
/// let style = StyleDescriptor::new(Font::system(14.0), Color::BLACK);
///
/// let mut text = AttributedText::new("warning: disk full");
/// text.add_attribute(0..8, Attribute::ForegroundColor(Color::RED)).unwrap();
///
/// let rendered = StyledText::attributed(text, style).to_attributed_text();
/// let runs = rendered.runs();
/// assert_eq!(runs[0].attributes().foreground_color(), Some(Color::RED));
/// assert_eq!(runs[1].attributes().foreground_color(), Some(Color::BLACK));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    content: TextContent,
    style: StyleDescriptor,
    precedence: MergePrecedence,
}

impl StyledText {
    pub fn plain(text: impl Into<String>, style: StyleDescriptor) -> Self {
        Self {
            content: TextContent::Plain(text.into()),
            style,
            precedence: MergePrecedence::default(),
        }
    }

    pub fn attributed(text: AttributedText, style: StyleDescriptor) -> Self {
        Self {
            content: TextContent::Attributed(text),
            style,
            precedence: MergePrecedence::default(),
        }
    }

    pub fn with_precedence(mut self, precedence: MergePrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn content(&self) -> &TextContent {
        &self.content
    }

    pub fn as_str(&self) -> &str {
        self.content.as_str()
    }

    pub fn style(&self) -> &StyleDescriptor {
        &self.style
    }

    pub fn set_style(&mut self, style: StyleDescriptor) {
        self.style = style;
    }

    pub fn precedence(&self) -> MergePrecedence {
        self.precedence
    }

    /// Resolves the style now and merges it into the content.
    pub fn to_attributed_text(&self) -> AttributedText {
        match &self.content {
            TextContent::Plain(text) => merge_plain(text, &self.style),
            TextContent::Attributed(text) => merge_attributed(text, &self.style, self.precedence),
        }
    }
}
