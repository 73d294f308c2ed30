// SPDX-License-Identifier: GPL-3.0-only

//! Key width selection from label measurements.
//!
//! Text measurement needs font metrics the layout engine does not own, so
//! it is consumed through the [`LabelWidthEstimator`] trait. The host
//! keyboard implements it on top of its text renderer; tests implement it
//! with fixed per-character advances.

// ============================================================================
// Estimator Seam
// ============================================================================

/// Measures the minimum width needed to render a key label.
///
/// Implementations return `min_width` for labels that fit it (single
/// characters are assumed to) and the measured text width plus the key's
/// horizontal padding for wider labels.
pub trait LabelWidthEstimator {
    /// Returns the minimum key width in pixels that can hold `label`.
    fn estimate(&self, label: &str, min_width: u32) -> u32;
}

// ============================================================================
// Width Selection
// ============================================================================

/// Picks the popup key width for a set of labels.
///
/// Single-character labels are assumed to fit `min_key_width` and are never
/// measured; every longer label is estimated and the overall maximum wins.
/// The result is fed to the layout calculator as the uniform key width when
/// no cached preview size is available.
pub fn max_key_width<E>(estimator: &E, labels: &[&str], min_key_width: u32) -> u32
where
    E: LabelWidthEstimator + ?Sized,
{
    let mut max_width = min_key_width;
    for label in labels {
        // A single character fits the minimum width by contract.
        if label.chars().count() > 1 {
            max_width = max_width.max(estimator.estimate(label, min_key_width));
        }
    }
    max_width
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance estimator: every character is `advance` pixels wide,
    /// plus a flat horizontal padding, floored at the minimum width.
    struct FixedAdvance {
        advance: u32,
        padding: u32,
    }

    impl LabelWidthEstimator for FixedAdvance {
        fn estimate(&self, label: &str, min_width: u32) -> u32 {
            let measured = label.chars().count() as u32 * self.advance + self.padding;
            measured.max(min_width)
        }
    }

    /// Test 1: Single-character labels never widen the keys
    #[test]
    fn test_single_characters_fit_minimum() {
        let estimator = FixedAdvance {
            advance: 40,
            padding: 10,
        };
        // 40px glyphs would exceed the 30px minimum, but single characters
        // are skipped by contract.
        let width = max_key_width(&estimator, &["\u{00e0}", "\u{00e9}", "\u{00ee}"], 30);
        assert_eq!(width, 30);
    }

    /// Test 2: The widest multi-character label wins
    #[test]
    fn test_widest_label_wins() {
        let estimator = FixedAdvance {
            advance: 10,
            padding: 4,
        };
        let width = max_key_width(&estimator, &["a", "ss", "oeu"], 20);
        // "oeu": 3 chars * 10 + 4 = 34.
        assert_eq!(width, 34);
    }

    /// Test 3: The minimum width is a floor
    #[test]
    fn test_minimum_width_is_floor() {
        let estimator = FixedAdvance {
            advance: 2,
            padding: 1,
        };
        let width = max_key_width(&estimator, &["ab", "cd"], 50);
        assert_eq!(width, 50, "narrow labels must not shrink the keys");
    }

    /// Test 4: Non-BMP single glyphs count as one character
    #[test]
    fn test_non_bmp_glyph_counts_as_single_char() {
        let estimator = FixedAdvance {
            advance: 100,
            padding: 0,
        };
        // U+1F600 is one char (two UTF-16 units); it must be skipped.
        let width = max_key_width(&estimator, &["\u{1F600}"], 40);
        assert_eq!(width, 40);
    }
}
