//! Attributed text and style merging.
//!
//! - [`AttributedText`]: a string with attributes stored as maximal runs
//! - [`StyledText`]: plain or attributed content paired with a style
//! - [`merge_plain`] / [`merge_attributed`]: the merge rules
//! - [`MergePrecedence`]: whether existing attributes or the style win

mod attributed;
mod error;
mod merge;

pub use attributed::{AttributedText, Run};
pub use error::AttributedTextError;
pub use merge::{merge_attributed, merge_plain, MergePrecedence, StyledText, TextContent};
