//! Style descriptors and the attributes they resolve to.
//!
//! This module provides:
//!
//! - [`StyleDescriptor`]: an immutable description of how text should look
//! - [`StyleOverrides`]: optional field replacements for deriving styles
//! - [`Attributes`]: the concrete attribute set a style resolves to
//! - [`Font`], [`Color`], [`ParagraphStyle`]: the values inside it
//! - [`DefaultKernProvider`]: pluggable fallback kerning

mod attributes;
mod color;
mod descriptor;
mod font;
mod paragraph;

pub use attributes::{Attribute, AttributeKey, Attributes};
pub use color::Color;
pub use descriptor::{
    DefaultKernProvider, StyleBuilder, StyleDescriptor, StyleOverrides, UNSPECIFIED_POINT_SIZE,
};
pub use font::{Font, DEFAULT_LINE_HEIGHT_RATIO, SYSTEM_FONT_FAMILY};
pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};
