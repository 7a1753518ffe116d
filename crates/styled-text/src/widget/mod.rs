//! Headless display models that consume styles.
//!
//! - [`StyledLabel`]: one block of styled text
//! - [`StyledButton`]: a title with per-[`ControlState`] text and styles
//!
//! Both implement [`SizeCategoryObserver`](crate::SizeCategoryObserver);
//! register them with a resolver to re-render on size category changes.

mod button;
mod label;

pub use button::{ControlState, StyledButton};
pub use label::StyledLabel;
