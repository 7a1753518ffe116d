//! Font handles.

use crate::size::{scale_factor, SizeCategory};

/// Ratio of line height to point size used when none is given.
pub const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Family name used by [`Font::system`].
pub const SYSTEM_FONT_FAMILY: &str = "system-ui";

/// A typeface at a point size, with the metric needed for paragraph layout.
///
/// The font is an opaque handle for the renderer: this crate only reads the
/// point size and line height, and derives resized copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    point_size: f64,
    line_height: f64,
}

impl Font {
    /// Creates a font with the default line height ratio.
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
            line_height: point_size * DEFAULT_LINE_HEIGHT_RATIO,
        }
    }

    pub fn system(point_size: f64) -> Self {
        Self::new(SYSTEM_FONT_FAMILY, point_size)
    }

    /// Sets the natural line height reported by the font's metrics.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn point_size(&self) -> f64 {
        self.point_size
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// The same typeface at `point_size`, with line height scaled to match.
    pub fn with_size(&self, point_size: f64) -> Font {
        let ratio = if self.point_size > 0.0 {
            self.line_height / self.point_size
        } else {
            DEFAULT_LINE_HEIGHT_RATIO
        };
        Font {
            family: self.family.clone(),
            point_size,
            line_height: point_size * ratio,
        }
    }

    /// Point size divided by line height; `1.0` for degenerate metrics.
    pub(crate) fn size_to_line_height(&self) -> f64 {
        if self.line_height > 0.0 {
            self.point_size / self.line_height
        } else {
            1.0
        }
    }

    /// Resizes for `category` using the full table, rounded to whole points.
    ///
    /// Unlike a style, this ignores any override and any scaling mode.
    pub fn scaled_for(&self, category: SizeCategory) -> Font {
        self.with_size((self.point_size * scale_factor(category)).round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_keeps_metrics_ratio() {
        let font = Font::new("Avenir", 12.0).with_line_height(14.4);
        let bigger = font.with_size(24.0);
        assert_eq!(bigger.family(), "Avenir");
        assert_eq!(bigger.point_size(), 24.0);
        assert!((bigger.line_height() - 28.8).abs() < 1e-9);
    }

    #[test]
    fn test_size_to_line_height() {
        let font = Font::new("Avenir", 12.0).with_line_height(14.3);
        assert!((font.size_to_line_height() - 12.0 / 14.3).abs() < 1e-12);

        let degenerate = Font::new("Avenir", 12.0).with_line_height(0.0);
        assert_eq!(degenerate.size_to_line_height(), 1.0);
    }

    #[test]
    fn test_scaled_for_rounds() {
        let font = Font::system(12.0);
        assert_eq!(font.scaled_for(SizeCategory::ExtraLarge2).point_size(), 15.0);
        let largest = font.scaled_for(SizeCategory::AccessibilityExtraLarge3);
        assert_eq!(largest.point_size(), 37.0);
        assert_eq!(font.scaled_for(SizeCategory::Large).point_size(), 12.0);
    }

    #[test]
    fn test_zero_size_resize() {
        let font = Font::system(0.0).with_size(10.0);
        assert!((font.line_height() - 12.0).abs() < 1e-9);
    }
}
