//! Preferred text size categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user's preferred text size.
///
/// Categories are ordered from smallest to largest. The first seven form the
/// *standard* band; the last five form the *accessibility* band, reserved for
/// the largest assistive sizes. [`SizeCategory::Large`] is the reference size
/// and the default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    #[serde(rename = "extra-large-2")]
    ExtraLarge2,
    #[serde(rename = "extra-large-3")]
    ExtraLarge3,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    #[serde(rename = "accessibility-extra-large-2")]
    AccessibilityExtraLarge2,
    #[serde(rename = "accessibility-extra-large-3")]
    AccessibilityExtraLarge3,
}

impl SizeCategory {
    /// Every category, smallest first.
    pub const ALL: [SizeCategory; 12] = [
        SizeCategory::ExtraSmall,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::ExtraLarge,
        SizeCategory::ExtraLarge2,
        SizeCategory::ExtraLarge3,
        SizeCategory::AccessibilityMedium,
        SizeCategory::AccessibilityLarge,
        SizeCategory::AccessibilityExtraLarge,
        SizeCategory::AccessibilityExtraLarge2,
        SizeCategory::AccessibilityExtraLarge3,
    ];

    /// The largest category of the standard band.
    pub const LARGEST_STANDARD: SizeCategory = SizeCategory::ExtraLarge3;

    /// Returns `true` for categories in the accessibility band.
    pub fn is_accessibility(self) -> bool {
        self > Self::LARGEST_STANDARD
    }

    /// The stable name used when persisting a category.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::ExtraSmall => "extra-small",
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::ExtraLarge => "extra-large",
            SizeCategory::ExtraLarge2 => "extra-large-2",
            SizeCategory::ExtraLarge3 => "extra-large-3",
            SizeCategory::AccessibilityMedium => "accessibility-medium",
            SizeCategory::AccessibilityLarge => "accessibility-large",
            SizeCategory::AccessibilityExtraLarge => "accessibility-extra-large",
            SizeCategory::AccessibilityExtraLarge2 => "accessibility-extra-large-2",
            SizeCategory::AccessibilityExtraLarge3 => "accessibility-extra-large-3",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`SizeCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size category '{input}'")]
pub struct ParseSizeCategoryError {
    input: String,
}

impl ParseSizeCategoryError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for SizeCategory {
    type Err = ParseSizeCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SizeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| ParseSizeCategoryError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_is_default() {
        assert_eq!(SizeCategory::default(), SizeCategory::Large);
    }

    #[test]
    fn test_bands() {
        let accessibility: Vec<_> = SizeCategory::ALL
            .into_iter()
            .filter(|c| c.is_accessibility())
            .collect();
        assert_eq!(accessibility.len(), 5);
        assert_eq!(accessibility[0], SizeCategory::AccessibilityMedium);
        assert!(!SizeCategory::ExtraLarge3.is_accessibility());
        assert!(!SizeCategory::ExtraSmall.is_accessibility());
    }

    #[test]
    fn test_all_is_sorted() {
        assert!(SizeCategory::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_every_name() {
        for category in SizeCategory::ALL {
            assert_eq!(category.as_str().parse::<SizeCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "gigantic".parse::<SizeCategory>().unwrap_err();
        assert_eq!(err.input(), "gigantic");
        assert!(err.to_string().contains("gigantic"));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for category in SizeCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: SizeCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }
}
