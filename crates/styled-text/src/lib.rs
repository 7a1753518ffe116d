//! Immutable text styles that scale with the user's preferred text size.
//!
//! A [`StyleDescriptor`] describes how a piece of text should look: font,
//! color, kerning, paragraph settings and a [`ScalingMode`]. Resolving it
//! produces a concrete [`Attributes`] set whose font has been scaled for the
//! current [`SizeCategory`]. [`StyledText`] pairs content with a style and
//! merges the two into [`AttributedText`].
//!
//! The current category comes from a [`ScaleResolver`]. It combines a
//! [`SizeCategorySource`] with an optional persisted override and notifies
//! registered [`SizeCategoryObserver`]s whenever the effective category
//! changes. Observers are held weakly; dropping one unregisters it.
//!
//! # Modules
//!
//! - [`size`]: categories, scale factors, the resolver and its collaborators
//! - [`style`]: descriptors, fonts, colors and attribute sets
//! - [`text`]: attributed text and the merge rules
//! - [`widget`]: label and button display models that re-render on change
//! - [`render`]: terminal output for attributed text
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use styled_text::{
//!     Color, Font, ManualSizeCategorySource, ScaleResolver, ScalingMode, SizeCategory,
//!     StyleDescriptor, StyledText,
//! };
//!
//! let source = Rc::new(ManualSizeCategorySource::new(SizeCategory::ExtraLarge2));
//! let resolver = ScaleResolver::builder().source(source).build();
//!
//! let body = StyleDescriptor::builder(Font::system(12.0), Color::BLACK)
//!     .scaling_mode(ScalingMode::ScaleStandardOnly)
//!     .resolver(resolver)
//!     .build();
//!
//! let text = StyledText::plain("Hello", body).to_attributed_text();
//! let font = text.runs()[0].attributes().font().unwrap();
//! assert_eq!(font.point_size(), 15.0);
//! ```
//!
//! # Threading
//!
//! Styles, resolvers and widgets are single-threaded (`Rc`-based). The
//! [`shared`] resolver is per thread.

mod observer;
pub mod render;
pub mod size;
pub mod style;
pub mod text;
mod util;
pub mod widget;

pub use observer::ObserverRegistry;
pub use size::{
    install_shared, refresh_shared, reset_shared, reset_size_category_detector, scale_factor,
    set_size_category_detector, shared, JsonFileStore, KeyValueStore, ManualSizeCategorySource,
    MemoryStore, ParseSizeCategoryError, ResolverConfig, ScaleResolver, ScalingMode,
    SizeCategory, SizeCategoryObserver, SizeCategorySource, StoreError, Subscription,
    SystemSizeCategorySource,
};
pub use style::{
    Attribute, AttributeKey, Attributes, Color, DefaultKernProvider, Font, LineBreakMode,
    ParagraphStyle, StyleBuilder, StyleDescriptor, StyleOverrides, TextAlignment,
};
pub use text::{
    merge_attributed, merge_plain, AttributedText, AttributedTextError, MergePrecedence, Run,
    StyledText, TextContent,
};
pub use widget::{ControlState, StyledButton, StyledLabel};
