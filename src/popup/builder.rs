// SPDX-License-Identifier: GPL-3.0-only

//! Assembly of popup keyboards from key specs and computed layout.
//!
//! The assembler walks the alternate-key specs in order, asks the layout
//! parameters for each key's position, and collects the positioned keys
//! into a [`PopupKeyboard`]. Assembly itself cannot fail: the only failure
//! mode is the layout computation, which happens before assembly starts.

use serde::{Deserialize, Serialize};

use crate::popup::params::PopupLayoutParams;
use crate::popup::types::{ConfigurationError, PopupKey, PopupStyle};

// ============================================================================
// Popup Keyboard
// ============================================================================

/// A fully laid-out popup keyboard: the ordered keys plus the parameters
/// they were positioned with.
///
/// The collection is immutable once built and discarded together with the
/// popup; nothing is cached across long-press invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupKeyboard {
    params: PopupLayoutParams,
    keys: Vec<PopupKey>,
    default_coord_x: u32,
}

impl PopupKeyboard {
    /// The laid-out keys, in key-spec order.
    pub fn keys(&self) -> &[PopupKey] {
        &self.keys
    }

    /// The layout parameters the keys were positioned with.
    pub fn params(&self) -> &PopupLayoutParams {
        &self.params
    }

    /// X coordinate of the anchor column's center within the popup.
    ///
    /// The caller aligns this point with the center of the long-pressed
    /// parent key when placing the popup surface.
    pub fn default_coord_x(&self) -> u32 {
        self.default_coord_x
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Computes the layout for `specs` and assembles the popup keyboard.
///
/// This is the one-stop entry point for a long-press event: it runs
/// [`PopupLayoutParams::compute`] over the live parent-keyboard metrics and
/// then positions one key per spec.
///
/// # Arguments
///
/// * `specs` - Alternate-key specs in reading order (opaque to this crate)
/// * `max_columns` - Maximum column count for the popup
/// * `key_width` - Popup key width in pixels, including the horizontal gap
/// * `row_height` - Popup row height in pixels, including the vertical gap
/// * `anchor_x` - X coordinate of the parent key's center in the parent keyboard
/// * `parent_width` - Parent keyboard width in pixels
/// * `style` - Gap and padding constants from the host theme
///
/// # Errors
///
/// Propagates the calculator's [`ConfigurationError`]; assembly adds no
/// failure modes of its own.
pub fn build_popup_keyboard(
    specs: &[String],
    max_columns: u32,
    key_width: u32,
    row_height: u32,
    anchor_x: u32,
    parent_width: u32,
    style: PopupStyle,
) -> Result<PopupKeyboard, ConfigurationError> {
    let params = PopupLayoutParams::compute(
        specs.len() as u32,
        max_columns,
        key_width,
        row_height,
        anchor_x,
        parent_width,
        style,
    )?;
    Ok(assemble_popup_keyboard(specs, params))
}

/// Assembles a popup keyboard from specs and already-computed parameters.
///
/// For index `n`, the key lands in row `n / num_columns` at the coordinate
/// the parameters report for that index, with the default key width and row
/// height, and with its edge flags marked.
pub fn assemble_popup_keyboard(specs: &[String], params: PopupLayoutParams) -> PopupKeyboard {
    debug_assert_eq!(
        specs.len() as u32,
        params.num_keys,
        "parameters must have been computed for this spec list"
    );

    let mut keys = Vec::with_capacity(specs.len());
    for (n, spec) in specs.iter().enumerate() {
        let n = n as u32;
        let row = n / params.num_columns;
        let mut key = PopupKey::new(
            spec.clone(),
            params.x(n, row),
            params.y(row),
            params.key_width,
            params.row_height,
        );
        params.mark_edges(&mut key, row);
        keys.push(key);
    }

    tracing::trace!(
        num_keys = keys.len(),
        num_rows = params.num_rows,
        num_columns = params.num_columns,
        "assembled popup keyboard"
    );

    let default_coord_x = params.default_key_coord_x() + params.key_width / 2;
    PopupKeyboard {
        params,
        keys,
        default_coord_x,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_style() -> PopupStyle {
        PopupStyle {
            vertical_gap: 0,
            top_padding: 0,
            bottom_padding: 0,
        }
    }

    fn specs(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    /// Test 1: Keys come back in spec order with the default dimensions
    #[test]
    fn test_assembles_one_key_per_spec() {
        let specs = specs(&["\u{00e0}", "\u{00e1}", "\u{00e2}", "\u{00e3}", "\u{00e4}"]);
        let popup = build_popup_keyboard(&specs, 5, 50, 60, 125, 250, bare_style())
            .expect("layout should be computable");

        assert_eq!(popup.keys().len(), 5);
        for (key, spec) in popup.keys().iter().zip(&specs) {
            assert_eq!(&key.spec, spec, "spec order must be preserved");
            assert_eq!(key.width, 50);
            assert_eq!(key.height, 60);
        }
    }

    /// Test 2: Two-row assembly positions every key per the fill order
    ///
    /// 7 keys capped at 4 columns: left=1, right=3, top row shifted half a
    /// key right. Indices 0..3 fill the bottom row around the anchor,
    /// indices 4..6 fill the shifted top row.
    #[test]
    fn test_two_row_positions_and_edges() {
        let specs = specs(&["1", "2", "3", "4", "5", "6", "7"]);
        let popup = build_popup_keyboard(&specs, 4, 50, 60, 200, 400, bare_style())
            .expect("layout should be computable");
        let keys = popup.keys();

        let expected: &[(i32, u32)] = &[
            (50, 60),
            (100, 60),
            (0, 60),
            (150, 60),
            (75, 0),
            (125, 0),
            (25, 0),
        ];
        for (n, (key, &(x, y))) in keys.iter().zip(expected).enumerate() {
            assert_eq!((key.x, key.y), (x, y), "key {n} position");
        }

        // Bottom row (row 0) carries the top-edge flag, the last row the
        // bottom-edge flag, per the upward-growing row convention.
        for key in &keys[..4] {
            assert!(key.is_top_edge && !key.is_bottom_edge);
        }
        for key in &keys[4..] {
            assert!(key.is_bottom_edge && !key.is_top_edge);
        }
    }

    /// Test 3: Single-key popup is both edges and anchor-aligned
    #[test]
    fn test_single_key_popup() {
        let specs = specs(&["\u{00e9}"]);
        let popup = build_popup_keyboard(&specs, 5, 50, 60, 125, 250, bare_style())
            .expect("layout should be computable");

        let key = &popup.keys()[0];
        assert_eq!((key.x, key.y), (0, 0));
        assert!(key.is_top_edge && key.is_bottom_edge);
        assert_eq!(
            popup.default_coord_x(),
            25,
            "anchor center sits mid-key in a single-column popup"
        );
    }

    /// Test 4: Default coordinate points at the anchor column's center
    #[test]
    fn test_default_coord_x() {
        let specs = specs(&["a", "b", "c", "d", "e"]);
        let popup = build_popup_keyboard(&specs, 5, 50, 60, 125, 250, bare_style())
            .expect("layout should be computable");

        // left=2 columns before the anchor, plus half a key width.
        assert_eq!(popup.default_coord_x(), 2 * 50 + 25);
    }

    /// Test 5: Calculator failure propagates unchanged
    #[test]
    fn test_propagates_configuration_error() {
        let specs = specs(&["a", "b", "c"]);
        let result = build_popup_keyboard(&specs, 3, 50, 60, 50, 100, bare_style());
        let err = result.expect_err("too-narrow parent must be rejected");
        assert_eq!(err.max_columns, 3);
    }
}
