//! Immutable text style descriptors.

use std::fmt;
use std::rc::Rc;

use crate::size::{shared, ScaleResolver, ScalingMode};

use super::attributes::{Attribute, Attributes};
use super::color::Color;
use super::font::Font;
use super::paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};

/// Supplies a kern value for fonts whose style does not set one.
///
/// Closures of the form `Fn(&Font) -> Option<f64>` implement this trait.
pub trait DefaultKernProvider {
    fn default_kern(&self, font: &Font) -> Option<f64>;
}

impl<F> DefaultKernProvider for F
where
    F: Fn(&Font) -> Option<f64>,
{
    fn default_kern(&self, font: &Font) -> Option<f64> {
        self(font)
    }
}

/// Describes how text should look.
///
/// A descriptor is an immutable value. [`resolve`](Self::resolve) turns it
/// into concrete [`Attributes`], consulting the bound [`ScaleResolver`]
/// each time so the result tracks the current size category.
/// [`with`](Self::with) derives a new descriptor without touching this one.
///
/// # Example
///
/// ```rust
/// use styled_text::{Color, Font, ScalingMode, StyleDescriptor, StyleOverrides, TextAlignment};
///
/// let body = StyleDescriptor::builder(Font::new("Avenir", 15.0), Color::BLACK)
///     .line_height_multiple(1.4)
///     .alignment(TextAlignment::Natural)
///     .scaling_mode(ScalingMode::ScaleStandardOnly)
///     .build();
///
/// let caption = body.with(StyleOverrides {
///     size: Some(12.0),
///     color: Some(Color::GRAY),
///     ..StyleOverrides::default()
/// });
///
/// assert_eq!(caption.font().point_size(), 12.0);
/// assert_eq!(caption.alignment(), body.alignment());
/// ```
#[derive(Clone)]
pub struct StyleDescriptor {
    font: Font,
    color: Color,
    line_spacing: Option<f64>,
    line_height_multiple: Option<f64>,
    kern: Option<f64>,
    alignment: Option<TextAlignment>,
    line_break_mode: Option<LineBreakMode>,
    scaling_mode: ScalingMode,
    resolver: Rc<ScaleResolver>,
    kern_provider: Option<Rc<dyn DefaultKernProvider>>,
}

/// Field overrides for [`StyleDescriptor::with`].
///
/// Every `None` keeps the source descriptor's value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    /// New point size for the existing font.
    pub size: Option<f64>,
    pub color: Option<Color>,
    pub line_spacing: Option<f64>,
    pub line_height_multiple: Option<f64>,
    pub kern: Option<f64>,
    pub alignment: Option<TextAlignment>,
    pub line_break_mode: Option<LineBreakMode>,
    pub scaling_mode: Option<ScalingMode>,
}

/// Point size of [`StyleDescriptor::unspecified`].
pub const UNSPECIFIED_POINT_SIZE: f64 = 11.0;

impl StyleDescriptor {
    /// A descriptor with only a font and color, bound to the shared resolver.
    pub fn new(font: Font, color: Color) -> Self {
        Self::builder(font, color).build()
    }

    pub fn builder(font: Font, color: Color) -> StyleBuilder {
        StyleBuilder {
            font,
            color,
            line_spacing: None,
            line_height_multiple: None,
            kern: None,
            alignment: None,
            line_break_mode: None,
            scaling_mode: ScalingMode::NoScaling,
            resolver: None,
            kern_provider: None,
        }
    }

    /// The style used where none has been given: 11pt system font, black.
    pub fn unspecified() -> Self {
        Self::new(Font::system(UNSPECIFIED_POINT_SIZE), Color::BLACK)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn line_spacing(&self) -> Option<f64> {
        self.line_spacing
    }

    pub fn line_height_multiple(&self) -> Option<f64> {
        self.line_height_multiple
    }

    /// The explicit kern, if any. Provider defaults apply only when resolving.
    pub fn kern(&self) -> Option<f64> {
        self.kern
    }

    pub fn alignment(&self) -> Option<TextAlignment> {
        self.alignment
    }

    pub fn line_break_mode(&self) -> Option<LineBreakMode> {
        self.line_break_mode
    }

    pub fn scaling_mode(&self) -> ScalingMode {
        self.scaling_mode
    }

    pub fn resolver(&self) -> &Rc<ScaleResolver> {
        &self.resolver
    }

    /// Derives a descriptor with `overrides` applied.
    pub fn with(&self, overrides: StyleOverrides) -> Self {
        let StyleOverrides {
            size,
            color,
            line_spacing,
            line_height_multiple,
            kern,
            alignment,
            line_break_mode,
            scaling_mode,
        } = overrides;

        Self {
            font: match size {
                Some(size) => self.font.with_size(size),
                None => self.font.clone(),
            },
            color: color.unwrap_or(self.color),
            line_spacing: line_spacing.or(self.line_spacing),
            line_height_multiple: line_height_multiple.or(self.line_height_multiple),
            kern: kern.or(self.kern),
            alignment: alignment.or(self.alignment),
            line_break_mode: line_break_mode.or(self.line_break_mode),
            scaling_mode: scaling_mode.unwrap_or(self.scaling_mode),
            resolver: Rc::clone(&self.resolver),
            kern_provider: self.kern_provider.clone(),
        }
    }

    /// Derives a descriptor using `font` in place of the current one.
    pub fn with_font(&self, font: Font) -> Self {
        Self {
            font,
            ..self.clone()
        }
    }

    /// The font after dynamic type scaling.
    pub fn scaled_font(&self) -> Font {
        match self.scaling_mode {
            ScalingMode::NoScaling => self.font.clone(),
            mode => self.resolver.scaled_font(&self.font, mode),
        }
    }

    /// Resolves this style into rendering attributes.
    ///
    /// The result always carries a font, a foreground color and a paragraph
    /// style; kerning is present only when set or supplied by the kern
    /// provider. Nothing is cached: each call reflects the current size
    /// category.
    pub fn resolve(&self) -> Attributes {
        let font = self.scaled_font();

        let kern = self.kern.or_else(|| {
            self.kern_provider
                .as_ref()
                .and_then(|provider| provider.default_kern(&font))
        });

        let paragraph = ParagraphStyle {
            line_spacing: self.line_spacing,
            // Multiples are given against the point size; the renderer applies
            // them to the natural line height.
            line_height_multiple: self
                .line_height_multiple
                .map(|multiple| multiple * self.font.size_to_line_height()),
            alignment: self.alignment,
            line_break_mode: self.line_break_mode,
        };

        let mut attributes = Attributes::new()
            .with(Attribute::Font(font))
            .with(Attribute::ForegroundColor(self.color))
            .with(Attribute::ParagraphStyle(paragraph));
        if let Some(kern) = kern {
            attributes.insert(Attribute::Kern(kern));
        }
        attributes
    }
}

impl PartialEq for StyleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        let same_provider = match (&self.kern_provider, &other.kern_provider) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        };
        self.font == other.font
            && self.color == other.color
            && self.line_spacing == other.line_spacing
            && self.line_height_multiple == other.line_height_multiple
            && self.kern == other.kern
            && self.alignment == other.alignment
            && self.line_break_mode == other.line_break_mode
            && self.scaling_mode == other.scaling_mode
            && Rc::ptr_eq(&self.resolver, &other.resolver)
            && same_provider
    }
}

impl fmt::Debug for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleDescriptor")
            .field("font", &self.font)
            .field("color", &self.color)
            .field("line_spacing", &self.line_spacing)
            .field("line_height_multiple", &self.line_height_multiple)
            .field("kern", &self.kern)
            .field("alignment", &self.alignment)
            .field("line_break_mode", &self.line_break_mode)
            .field("scaling_mode", &self.scaling_mode)
            .field("kern_provider", &self.kern_provider.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`StyleDescriptor`].
pub struct StyleBuilder {
    font: Font,
    color: Color,
    line_spacing: Option<f64>,
    line_height_multiple: Option<f64>,
    kern: Option<f64>,
    alignment: Option<TextAlignment>,
    line_break_mode: Option<LineBreakMode>,
    scaling_mode: ScalingMode,
    resolver: Option<Rc<ScaleResolver>>,
    kern_provider: Option<Rc<dyn DefaultKernProvider>>,
}

impl StyleBuilder {
    pub fn line_spacing(mut self, points: f64) -> Self {
        self.line_spacing = Some(points);
        self
    }

    /// Line height as a multiple of the point size.
    pub fn line_height_multiple(mut self, multiple: f64) -> Self {
        self.line_height_multiple = Some(multiple);
        self
    }

    pub fn kern(mut self, kern: f64) -> Self {
        self.kern = Some(kern);
        self
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = Some(mode);
        self
    }

    pub fn scaling_mode(mut self, mode: ScalingMode) -> Self {
        self.scaling_mode = mode;
        self
    }

    /// Binds the style to `resolver` instead of the shared one.
    pub fn resolver(mut self, resolver: Rc<ScaleResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn kern_provider(mut self, provider: Rc<dyn DefaultKernProvider>) -> Self {
        self.kern_provider = Some(provider);
        self
    }

    pub fn build(self) -> StyleDescriptor {
        StyleDescriptor {
            font: self.font,
            color: self.color,
            line_spacing: self.line_spacing,
            line_height_multiple: self.line_height_multiple,
            kern: self.kern,
            alignment: self.alignment,
            line_break_mode: self.line_break_mode,
            scaling_mode: self.scaling_mode,
            resolver: self.resolver.unwrap_or_else(shared),
            kern_provider: self.kern_provider,
        }
    }
}
