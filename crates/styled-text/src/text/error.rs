//! Attributed text errors.

use thiserror::Error;

/// Error returned when a range cannot be applied to an [`AttributedText`].
///
/// [`AttributedText`]: super::AttributedText
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributedTextError {
    /// The range starts after it ends.
    #[error("invalid range {start}..{end}: start > end")]
    InvalidRange { start: usize, end: usize },
    /// The range extends past the end of the text.
    #[error("range {start}..{end} is out of bounds for text of len {len}")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
    /// An endpoint falls inside a UTF-8 sequence.
    #[error("range {start}..{end}: index {index} is not on a char boundary")]
    NotOnCharBoundary {
        start: usize,
        end: usize,
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = AttributedTextError::InvalidRange { start: 4, end: 3 };
        let msg = err.to_string();
        assert!(msg.contains("4..3"));
        assert!(msg.contains("start > end"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = AttributedTextError::OutOfBounds {
            start: 0,
            end: 7,
            len: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("0..7"));
        assert!(msg.contains("len 6"));
    }
}
