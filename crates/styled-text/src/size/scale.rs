//! Scale factors for each size category.

use serde::{Deserialize, Serialize};

use super::category::SizeCategory;

/// Multiplier applied to a point size for `category`.
///
/// Factors are measured against body text at [`SizeCategory::Large`], which
/// scales by exactly `1.0`.
pub fn scale_factor(category: SizeCategory) -> f64 {
    match category {
        SizeCategory::ExtraSmall => 0.824,
        SizeCategory::Small => 0.882,
        SizeCategory::Medium => 0.941,
        SizeCategory::Large => 1.0,
        SizeCategory::ExtraLarge => 1.118,
        SizeCategory::ExtraLarge2 => 1.235,
        SizeCategory::ExtraLarge3 => 1.353,
        SizeCategory::AccessibilityMedium => 1.647,
        SizeCategory::AccessibilityLarge => 1.941,
        SizeCategory::AccessibilityExtraLarge => 2.353,
        SizeCategory::AccessibilityExtraLarge2 => 2.765,
        SizeCategory::AccessibilityExtraLarge3 => 3.118,
    }
}

/// How a style reacts to the preferred size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingMode {
    /// Fonts are used as given.
    #[default]
    NoScaling,
    /// Scale with the standard band; accessibility sizes are capped at
    /// [`SizeCategory::LARGEST_STANDARD`].
    ScaleStandardOnly,
    /// Scale with every category, including the accessibility band.
    ScaleIncludingAccessibility,
}

impl ScalingMode {
    /// Returns the category whose factor applies under this mode.
    pub fn clamp(self, category: SizeCategory) -> SizeCategory {
        match self {
            ScalingMode::ScaleStandardOnly if category.is_accessibility() => {
                SizeCategory::LARGEST_STANDARD
            }
            _ => category,
        }
    }

    /// The factor this mode applies for `category`.
    ///
    /// [`ScalingMode::NoScaling`] never consults the table.
    pub fn factor_for(self, category: SizeCategory) -> f64 {
        match self {
            ScalingMode::NoScaling => 1.0,
            mode => scale_factor(mode.clamp(category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_values() {
        let expected = [
            (SizeCategory::ExtraSmall, 0.824),
            (SizeCategory::Small, 0.882),
            (SizeCategory::Medium, 0.941),
            (SizeCategory::Large, 1.0),
            (SizeCategory::ExtraLarge, 1.118),
            (SizeCategory::ExtraLarge2, 1.235),
            (SizeCategory::ExtraLarge3, 1.353),
            (SizeCategory::AccessibilityMedium, 1.647),
            (SizeCategory::AccessibilityLarge, 1.941),
            (SizeCategory::AccessibilityExtraLarge, 2.353),
            (SizeCategory::AccessibilityExtraLarge2, 2.765),
            (SizeCategory::AccessibilityExtraLarge3, 3.118),
        ];
        for (category, factor) in expected {
            assert_eq!(scale_factor(category), factor, "{category}");
        }
    }

    #[test]
    fn test_standard_only_caps_accessibility() {
        let mode = ScalingMode::ScaleStandardOnly;
        assert_eq!(
            mode.clamp(SizeCategory::AccessibilityLarge),
            SizeCategory::ExtraLarge3
        );
        assert_eq!(mode.factor_for(SizeCategory::AccessibilityLarge), 1.353);
        assert_eq!(mode.factor_for(SizeCategory::Small), 0.882);
    }

    #[test]
    fn test_including_accessibility_uses_table() {
        let mode = ScalingMode::ScaleIncludingAccessibility;
        assert_eq!(mode.factor_for(SizeCategory::AccessibilityLarge), 1.941);
    }

    #[test]
    fn test_no_scaling_is_identity() {
        for category in SizeCategory::ALL {
            assert_eq!(ScalingMode::NoScaling.factor_for(category), 1.0);
        }
    }

    proptest! {
        #[test]
        fn prop_factor_grows_with_category(a in 0usize..12, b in 0usize..12) {
            let (a, b) = (SizeCategory::ALL[a], SizeCategory::ALL[b]);
            if a < b {
                prop_assert!(scale_factor(a) < scale_factor(b));
            }
        }

        #[test]
        fn prop_standard_only_never_exceeds_largest_standard(i in 0usize..12) {
            let factor = ScalingMode::ScaleStandardOnly.factor_for(SizeCategory::ALL[i]);
            prop_assert!(factor <= scale_factor(SizeCategory::LARGEST_STANDARD));
        }
    }
}
