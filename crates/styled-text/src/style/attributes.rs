//! Rendering attribute sets.

use std::collections::BTreeMap;

use super::color::Color;
use super::font::Font;
use super::paragraph::ParagraphStyle;

/// Identifies one kind of rendering attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    BackgroundColor,
    Kern,
    ParagraphStyle,
    Underline,
    Strikethrough,
    Link,
}

/// A single rendering attribute together with its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Font(Font),
    ForegroundColor(Color),
    BackgroundColor(Color),
    /// Extra spacing between glyphs, in points.
    Kern(f64),
    ParagraphStyle(ParagraphStyle),
    Underline(bool),
    Strikethrough(bool),
    Link(String),
}

impl Attribute {
    pub fn key(&self) -> AttributeKey {
        match self {
            Attribute::Font(_) => AttributeKey::Font,
            Attribute::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Attribute::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Attribute::Kern(_) => AttributeKey::Kern,
            Attribute::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Attribute::Underline(_) => AttributeKey::Underline,
            Attribute::Strikethrough(_) => AttributeKey::Strikethrough,
            Attribute::Link(_) => AttributeKey::Link,
        }
    }
}

/// A set of attributes with at most one value per [`AttributeKey`].
///
/// # Example
///
/// ```rust
/// use styled_text::{Attribute, AttributeKey, Attributes, Color};
///
/// let attrs = Attributes::new()
///     .with(Attribute::ForegroundColor(Color::RED))
///     .with(Attribute::Kern(1.5));
///
/// assert_eq!(attrs.foreground_color(), Some(Color::RED));
/// assert!(attrs.contains_key(AttributeKey::Kern));
/// assert!(!attrs.contains_key(AttributeKey::Font));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<AttributeKey, Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `attribute`, returning an updated set for chaining.
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.insert(attribute);
        self
    }

    /// Inserts `attribute`, returning the value it replaced.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(attribute.key(), attribute)
    }

    pub fn remove(&mut self, key: AttributeKey) -> Option<Attribute> {
        self.entries.remove(&key)
    }

    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.entries.get(&key)
    }

    pub fn contains_key(&self, key: AttributeKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies in every attribute of `other` whose key is not already present.
    pub fn extend_missing(&mut self, other: &Attributes) {
        for (key, attribute) in &other.entries {
            self.entries
                .entry(*key)
                .or_insert_with(|| attribute.clone());
        }
    }

    /// Copies in every attribute of `other`, replacing existing values.
    pub fn extend_replacing(&mut self, other: &Attributes) {
        for (key, attribute) in &other.entries {
            self.entries.insert(*key, attribute.clone());
        }
    }

    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font) {
            Some(Attribute::Font(font)) => Some(font),
            _ => None,
        }
    }

    pub fn foreground_color(&self) -> Option<Color> {
        match self.get(AttributeKey::ForegroundColor) {
            Some(Attribute::ForegroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    pub fn background_color(&self) -> Option<Color> {
        match self.get(AttributeKey::BackgroundColor) {
            Some(Attribute::BackgroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    pub fn kern(&self) -> Option<f64> {
        match self.get(AttributeKey::Kern) {
            Some(Attribute::Kern(kern)) => Some(*kern),
            _ => None,
        }
    }

    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle) {
            Some(Attribute::ParagraphStyle(style)) => Some(style),
            _ => None,
        }
    }

    pub fn is_underlined(&self) -> bool {
        matches!(
            self.get(AttributeKey::Underline),
            Some(Attribute::Underline(true))
        )
    }

    pub fn is_struck_through(&self) -> bool {
        matches!(
            self.get(AttributeKey::Strikethrough),
            Some(Attribute::Strikethrough(true))
        )
    }

    pub fn link(&self) -> Option<&str> {
        match self.get(AttributeKey::Link) {
            Some(Attribute::Link(url)) => Some(url),
            _ => None,
        }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for attribute in iter {
            attributes.insert(attribute);
        }
        attributes
    }
}

impl Extend<Attribute> for Attributes {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}
