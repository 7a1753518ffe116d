//! Terminal width fitting.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Byte offset at which `s` must be cut to fit in `max_width` columns while
/// leaving `reserve` columns free, or `None` if `s` already fits.
///
/// The offset always falls on a char boundary. Widths follow Unicode rules,
/// so wide CJK characters count as two columns.
pub(crate) fn width_cut(s: &str, max_width: usize, reserve: usize) -> Option<usize> {
    if s.width() <= max_width {
        return None;
    }
    let limit = max_width.saturating_sub(reserve);
    let mut used = 0;
    for (offset, c) in s.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > limit {
            return Some(offset);
        }
        used += char_width;
    }
    Some(s.len())
}
