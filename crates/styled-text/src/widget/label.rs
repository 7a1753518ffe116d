//! A single-block text display.

use std::cell::RefCell;

use crate::size::{ScaleResolver, SizeCategory, SizeCategoryObserver};
use crate::style::StyleDescriptor;
use crate::text::{AttributedText, StyledText};

/// Display model for a block of styled text.
///
/// The label keeps the [`StyledText`] it was given and the attributed text
/// last produced from it. Any change to the text or style re-resolves
/// immediately. Registered with a resolver, it also re-resolves whenever the
/// size category changes.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use styled_text::{
///     Color, Font, ManualSizeCategorySource, ScaleResolver, ScalingMode, SizeCategory,
///     StyleDescriptor, StyledLabel,
/// };
///
/// let source = Rc::new(ManualSizeCategorySource::new(SizeCategory::Large));
/// let resolver = ScaleResolver::builder().source(source.clone()).build();
/// let style = StyleDescriptor::builder(Font::system(12.0), Color::BLACK)
///     .scaling_mode(ScalingMode::ScaleIncludingAccessibility)
///     .resolver(resolver.clone())
///     .build();
///
/// let label = Rc::new(StyledLabel::new(style));
/// resolver.add_observer(&label);
/// label.set_text(Some("Hello"));
///
/// source.set(SizeCategory::ExtraLarge2);
/// let rendered = label.attributed_text().unwrap();
/// assert_eq!(rendered.runs()[0].attributes().font().unwrap().point_size(), 15.0);
/// ```
#[derive(Debug)]
pub struct StyledLabel {
    styled_text: RefCell<StyledText>,
    rendered: RefCell<Option<AttributedText>>,
}

impl StyledLabel {
    /// Creates an empty label using `style`.
    pub fn new(style: StyleDescriptor) -> Self {
        Self {
            styled_text: RefCell::new(StyledText::plain(String::new(), style)),
            rendered: RefCell::new(None),
        }
    }

    /// The rendered string, or `None` if the text was cleared.
    pub fn text(&self) -> Option<String> {
        self.rendered
            .borrow()
            .as_ref()
            .map(|text| text.as_str().to_string())
    }

    /// The attributed text last produced.
    pub fn attributed_text(&self) -> Option<AttributedText> {
        self.rendered.borrow().clone()
    }

    /// Sets plain text in the current style. `None` clears the display.
    pub fn set_text(&self, text: Option<&str>) {
        match text {
            Some(text) => {
                let style = self.text_style();
                self.set_styled_text(StyledText::plain(text, style));
            }
            None => self.clear(),
        }
    }

    /// Sets pre-attributed text; its attributes win over the style's.
    pub fn set_attributed_text(&self, text: Option<AttributedText>) {
        match text {
            Some(text) => {
                let style = self.text_style();
                self.set_styled_text(StyledText::attributed(text, style));
            }
            None => self.clear(),
        }
    }

    pub fn styled_text(&self) -> StyledText {
        self.styled_text.borrow().clone()
    }

    pub fn set_styled_text(&self, styled_text: StyledText) {
        *self.styled_text.borrow_mut() = styled_text;
        self.refresh_style();
    }

    pub fn text_style(&self) -> StyleDescriptor {
        self.styled_text.borrow().style().clone()
    }

    pub fn set_text_style(&self, style: StyleDescriptor) {
        self.styled_text.borrow_mut().set_style(style);
        self.refresh_style();
    }

    /// Re-resolves the style and re-applies it to the text.
    pub fn refresh_style(&self) {
        let rendered = self.styled_text.borrow().to_attributed_text();
        *self.rendered.borrow_mut() = Some(rendered);
    }

    fn clear(&self) {
        *self.rendered.borrow_mut() = None;
    }
}

impl Default for StyledLabel {
    fn default() -> Self {
        Self::new(StyleDescriptor::unspecified())
    }
}

impl SizeCategoryObserver for StyledLabel {
    fn category_did_change(&self, _resolver: &ScaleResolver, _category: SizeCategory) {
        // A cleared label stays cleared.
        if self.rendered.borrow().is_some() {
            self.refresh_style();
        }
    }
}
