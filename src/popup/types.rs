// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the popup keyboard layout engine.
//!
//! This module defines the styling constants consumed by the layout
//! calculator, the `PopupKey` record produced by the assembler, and the
//! single error type the calculator can report.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Default vertical gap between popup rows in pixels.
pub const DEFAULT_VERTICAL_GAP: u32 = 4;

/// Default padding above the top-most popup row in pixels.
pub const DEFAULT_TOP_PADDING: u32 = 8;

/// Default padding below the bottom-most popup row in pixels.
pub const DEFAULT_BOTTOM_PADDING: u32 = 8;

// ============================================================================
// Styling
// ============================================================================

/// Externally supplied styling constants for a popup keyboard.
///
/// These values come from the host keyboard's theme and are carried through
/// the layout computation unchanged. All values are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupStyle {
    /// Vertical gap between rows. Only the bottom row's gutter is trimmed
    /// from the popup's total height.
    pub vertical_gap: u32,

    /// Padding above the visually top-most row.
    pub top_padding: u32,

    /// Padding below the visually bottom-most row.
    pub bottom_padding: u32,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            vertical_gap: DEFAULT_VERTICAL_GAP,
            top_padding: DEFAULT_TOP_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
        }
    }
}

// ============================================================================
// Popup Keys
// ============================================================================

/// One laid-out alternate key in a popup keyboard.
///
/// Created by the assembler from a key-spec string plus the coordinate
/// computed by the layout calculator. Immutable once the popup keyboard is
/// built; owned by the resulting collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupKey {
    /// Opaque key-spec string (label, output character, icon reference).
    /// Parsing the spec is the host keyboard's concern.
    pub spec: String,

    /// X coordinate of the key's top-left corner, relative to the popup
    /// keyboard origin. Signed: a `-1` top-row adjustment can place a
    /// top-row key half a key width left of the origin.
    pub x: i32,

    /// Y coordinate of the key's top-left corner.
    pub y: u32,

    /// Key width in pixels, including the horizontal gap.
    pub width: u32,

    /// Key height in pixels, including the vertical gap.
    pub height: u32,

    /// Whether the key sits on the visually top-most edge of the popup.
    /// Row index 0 is the bottom-most row, so this is set for row 0.
    pub is_top_edge: bool,

    /// Whether the key sits on the visually bottom-most edge of the popup
    /// (the last-created, possibly partial row).
    pub is_bottom_edge: bool,
}

impl PopupKey {
    /// Creates a new popup key at the given position with no edge flags set.
    pub fn new(spec: impl Into<String>, x: i32, y: u32, width: u32, height: u32) -> Self {
        Self {
            spec: spec.into(),
            x,
            y,
            width,
            height,
            is_top_edge: false,
            is_bottom_edge: false,
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Error for a parent keyboard too narrow to host the requested popup.
///
/// Raised synchronously at the start of layout computation when
/// `parent_width / key_width < max_columns` (or when `key_width` is zero,
/// which is the same caller-side misconfiguration). Not recoverable within
/// the layout engine: the invoker is expected to either not present the
/// popup or retry with different style/metric values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    /// Width of the parent keyboard surface in pixels.
    pub parent_width: u32,
    /// Requested popup key width in pixels.
    pub key_width: u32,
    /// Requested maximum column count.
    pub max_columns: u32,
    /// Optional suggestion for fixing the error.
    pub suggestion: Option<String>,
}

impl ConfigurationError {
    /// Creates a configuration error with a standard suggestion.
    pub fn new(parent_width: u32, key_width: u32, max_columns: u32) -> Self {
        Self {
            parent_width,
            key_width,
            max_columns,
            suggestion: Some(
                "Reduce the key width or the maximum column count so that \
                 max_columns keys fit within the parent keyboard width"
                    .into(),
            ),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parent keyboard is too small to hold the popup keyboard: \
             parent_width={} key_width={} max_columns={}",
            self.parent_width, self.key_width, self.max_columns
        )?;
        if let Some(hint) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigurationError {}

// ============================================================================
// Tests
// ============================================================================
