// SPDX-License-Identifier: GPL-3.0-only

//! Layout calculation for popup keyboards.
//!
//! This module computes the geometry of a popup keyboard from scalar inputs:
//! how many rows and columns the alternate keys occupy, how the columns are
//! balanced around the long-pressed (anchor) key, how a partially filled top
//! row is centered, and where each key lands in pixels.
//!
//! # Coordinate Model
//!
//! - Row index 0 is the **bottom-most** row; row indices grow upward. The
//!   top row (`num_rows - 1`) is the last one in reading order and may be
//!   partially filled.
//! - Column position 0 is the **anchor column**, the column directly above
//!   the long-pressed key. Positive positions extend to the right, negative
//!   to the left.
//! - Key coordinates are relative to the popup keyboard's own origin. The
//!   caller aligns the popup over the parent key using
//!   [`PopupLayoutParams::default_key_coord_x`].
//!
//! # Fill Order
//!
//! Linear key indices are distributed alternately right-then-left around
//! the anchor: index 0 takes the anchor column, then 1 goes one column
//! right, 2 one column left, 3 two columns right, and so on, until one side
//! runs out of columns and the remaining indices spill onto the other side.

use serde::{Deserialize, Serialize};

use crate::popup::types::{ConfigurationError, PopupKey, PopupStyle};

// ============================================================================
// Layout Parameters
// ============================================================================

/// Computed layout of a popup keyboard.
///
/// One instance is produced per long-press invocation by
/// [`PopupLayoutParams::compute`] and never mutated afterwards. All
/// coordinate queries are pure functions of the stored fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupLayoutParams {
    /// Number of alternate keys in the popup.
    pub num_keys: u32,

    /// Width of every popup key in pixels, including the horizontal gap.
    pub key_width: u32,

    /// Height of every popup row in pixels, including the vertical gap.
    pub row_height: u32,

    /// Number of rows, at least 1.
    pub num_rows: u32,

    /// Number of columns, at least 1.
    pub num_columns: u32,

    /// Columns laid out left of the anchor column.
    pub left_keys: u32,

    /// Columns laid out right of the anchor, counting the anchor column
    /// itself. Always at least 1.
    pub right_keys: u32,

    /// Half-key-width horizontal shift applied to the top row only:
    /// -1, 0, or +1 half key widths.
    pub top_row_adjustment: i32,

    /// Total popup width in pixels (`num_columns * key_width`).
    pub total_width: u32,

    /// Total popup height in pixels. Only the bottom row's gutter is
    /// trimmed, then the top and bottom paddings are added.
    pub total_height: u32,

    /// Styling constants the layout was computed with.
    pub style: PopupStyle,
}

impl PopupLayoutParams {
    /// Computes the popup layout for a set of alternate keys.
    ///
    /// The column count is first optimized toward a dense grid, then the
    /// columns are balanced around the anchor within the physical bounds of
    /// the parent keyboard, so the popup never overflows the parent surface.
    ///
    /// # Arguments
    ///
    /// * `num_keys` - Number of alternate keys, at least 1
    /// * `max_columns` - Maximum column count, at least 1
    /// * `key_width` - Popup key width in pixels, including the horizontal gap
    /// * `row_height` - Popup row height in pixels, including the vertical gap
    /// * `anchor_x` - X coordinate of the parent key's center in the parent keyboard
    /// * `parent_width` - Parent keyboard width in pixels
    /// * `style` - Gap and padding constants from the host theme
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the parent surface is physically
    /// too narrow to ever host `max_columns` keys of this width
    /// (`parent_width / key_width < max_columns`, or `key_width == 0`).
    /// No partial state is produced.
    pub fn compute(
        num_keys: u32,
        max_columns: u32,
        key_width: u32,
        row_height: u32,
        anchor_x: u32,
        parent_width: u32,
        style: PopupStyle,
    ) -> Result<Self, ConfigurationError> {
        if key_width == 0 || parent_width / key_width < max_columns {
            return Err(ConfigurationError::new(parent_width, key_width, max_columns));
        }
        debug_assert!(num_keys >= 1, "popup must hold at least one key");
        debug_assert!(max_columns >= 1, "column cap must be at least 1");
        debug_assert!(row_height > 0, "row height must be positive");
        debug_assert!(
            anchor_x <= parent_width,
            "anchor must lie within the parent keyboard"
        );

        let num_rows = num_keys.div_ceil(max_columns);
        let num_columns = optimized_columns(num_keys, max_columns, num_rows);

        let nominal_left = (num_columns - 1) / 2;
        let nominal_right = num_columns - nominal_left; // includes the anchor column

        // Maximum number of keys that physically fit on either side of the
        // anchor within the parent keyboard bounds.
        let max_left = anchor_x / key_width;
        let max_right = (parent_width - anchor_x) / key_width;

        let (mut left_keys, mut right_keys) = if nominal_left > max_left {
            (max_left, num_columns - max_left)
        } else if nominal_right > max_right + 1 {
            // The +1 accounts for the anchor column itself.
            (num_columns - (max_right + 1), max_right + 1)
        } else {
            (nominal_left, nominal_right)
        };

        // The left keys fill the left side of the parent key: the popup is
        // flush against the parent's left edge, so nudge the grid one column
        // to the right when the right side still has room for it.
        if left_keys == max_left && left_keys > 0 && right_keys <= max_right {
            left_keys -= 1;
            right_keys += 1;
        }
        // The right keys fill the right side of the parent key: nudge the
        // grid one column to the left when the left side still has room.
        if right_keys - 1 == max_right && right_keys > 1 && left_keys < max_left {
            left_keys += 1;
            right_keys -= 1;
        }
        debug_assert!(right_keys >= 1, "anchor column must stay on the right side");
        debug_assert_eq!(left_keys + right_keys, num_columns);

        // Centering of a partially filled top row. An even shortfall is
        // symmetric already; an odd one shifts half a key width toward the
        // roomier side.
        let empty_slots = top_row_empty_slots(num_keys, num_columns);
        let top_row_adjustment = if num_rows < 2 || empty_slots % 2 == 0 {
            0
        } else if left_keys < right_keys - 1 {
            1
        } else {
            -1
        };

        let total_width = num_columns * key_width;
        // Only the bottom row's gutter is trimmed from the grid height.
        let total_height = (num_rows * row_height + style.top_padding + style.bottom_padding)
            .saturating_sub(style.vertical_gap);

        tracing::debug!(
            num_keys,
            num_rows,
            num_columns,
            left_keys,
            right_keys,
            top_row_adjustment,
            total_width,
            total_height,
            "computed popup keyboard layout"
        );

        Ok(Self {
            num_keys,
            key_width,
            row_height,
            num_rows,
            num_columns,
            left_keys,
            right_keys,
            top_row_adjustment,
            total_width,
            total_height,
            style,
        })
    }

    /// Returns the signed column offset of linear key index `n` from the
    /// anchor column.
    ///
    /// Index-within-row 0 means the anchor column and returns 0. The
    /// remaining positions alternate one-right/one-left starting from the
    /// column immediately right of the anchor, spilling over to the other
    /// side when one side is exhausted.
    pub fn column_position(&self, n: u32) -> i32 {
        let col = n % self.num_columns;
        if col == 0 {
            // Anchor position.
            return 0;
        }
        let mut pos = 0;
        let mut right = 1; // the anchor occupies the first right slot
        let mut left = 0;
        let mut assigned = 0;
        loop {
            // Assign a right-side column if one is available.
            if right < self.right_keys {
                pos = right as i32;
                right += 1;
                assigned += 1;
            }
            if assigned >= col {
                break;
            }
            // Assign a left-side column if one is available.
            if left < self.left_keys {
                left += 1;
                pos = -(left as i32);
                assigned += 1;
            }
            if assigned >= col {
                break;
            }
        }
        pos
    }

    /// X coordinate of the anchor column's left edge within the popup.
    pub fn default_key_coord_x(&self) -> u32 {
        self.left_keys * self.key_width
    }

    /// X coordinate of the key at linear index `n` in row `row`.
    ///
    /// Top-row keys additionally receive the half-key-width centering
    /// adjustment, which can make the result negative.
    pub fn x(&self, n: u32, row: u32) -> i32 {
        let x = self.column_position(n) * self.key_width as i32
            + self.default_key_coord_x() as i32;
        if self.is_top_row(row) {
            return x + self.top_row_adjustment * (self.key_width as i32 / 2);
        }
        x
    }

    /// Y coordinate of the keys in row `row`. Row 0 is the bottom-most row,
    /// so higher row indices land closer to the popup's top padding.
    pub fn y(&self, row: u32) -> u32 {
        (self.num_rows - 1 - row) * self.row_height + self.style.top_padding
    }

    /// Sets the edge flags of `key` according to its row.
    ///
    /// Row 0 is the bottom-most row and therefore carries `is_top_edge`
    /// per the popup's upward-growing row convention; the last (visually
    /// top-most) row carries `is_bottom_edge`. A single-row popup sets both.
    pub fn mark_edges(&self, key: &mut PopupKey, row: u32) {
        if row == 0 {
            key.is_top_edge = true;
        }
        if self.is_top_row(row) {
            key.is_bottom_edge = true;
        }
    }

    fn is_top_row(&self, row: u32) -> bool {
        row == self.num_rows - 1
    }
}

// ============================================================================
// Grid Partition Helpers
// ============================================================================

/// Number of unfilled slots in the top (partial) row of a grid.
fn top_row_empty_slots(num_keys: u32, num_columns: u32) -> u32 {
    let remaining = num_keys % num_columns;
    if remaining == 0 {
        0
    } else {
        num_columns - remaining
    }
}

/// Picks the densest column count not exceeding `max_columns`.
///
/// Starting from `min(num_keys, max_columns)`, the count is decremented
/// while an entire extra row's worth of top-row slots would sit empty. This
/// prefers a squarer grid over a wide one with a nearly empty top row.
fn optimized_columns(num_keys: u32, max_columns: u32, num_rows: u32) -> u32 {
    let mut num_columns = num_keys.min(max_columns);
    while top_row_empty_slots(num_keys, num_columns) >= num_rows {
        num_columns -= 1;
    }
    num_columns
}

// ============================================================================
// Tests
// ============================================================================
