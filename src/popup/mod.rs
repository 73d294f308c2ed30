// SPDX-License-Identifier: GPL-3.0-only

//! Popup ("more keys") keyboard layout for long-press alternatives.
//!
//! When a key with alternate characters is long-pressed, the host keyboard
//! shows a transient popup above it. This module computes that popup's
//! geometry: the row/column grid, the left/right balance of columns around
//! the long-pressed (anchor) key, the centering of a partially filled top
//! row, and the pixel coordinate of every popup key, all without ever
//! letting the popup overflow the parent keyboard surface.
//!
//! Everything here is pure and synchronous. Rendering, hit-testing, key-spec
//! parsing, and font measurement stay with the host; the latter is consumed
//! through the [`LabelWidthEstimator`] trait.
//!
//! # Usage
//!
//! When a long press is detected on a key that has alternates:
//!
//! 1. Pick the key width with [`max_key_width`] (or reuse a cached preview
//!    size when the popup has a single key).
//! 2. Build the popup with [`build_popup_keyboard`] from the key specs and
//!    the live parent-keyboard metrics.
//! 3. Place the popup surface so that [`PopupKeyboard::default_coord_x`]
//!    lines up with the parent key's center, then hand the keys to the
//!    renderer.
//!
//! ```rust,ignore
//! use morekeys::popup::{build_popup_keyboard, PopupStyle};
//!
//! let specs: Vec<String> = vec!["à".into(), "á".into(), "â".into()];
//! let popup = build_popup_keyboard(
//!     &specs,
//!     5,                     // maximum columns
//!     52,                    // key width, gap included
//!     64,                    // row height, gap included
//!     260,                   // anchor key center x in the parent
//!     720,                   // parent keyboard width
//!     PopupStyle::default(),
//! )?;
//!
//! for key in popup.keys() {
//!     // key.x / key.y are relative to the popup origin
//! }
//! ```
//!
//! # Error Handling
//!
//! The only failure is [`ConfigurationError`]: the parent keyboard is too
//! narrow to ever host the requested maximum column count at the requested
//! key width. It signals inconsistent style/metric values on the caller's
//! side and is raised before any layout state exists.

// Sub-modules
pub mod builder;
pub mod params;
pub mod types;
pub mod width;

// Re-export public API - layout computation
pub use params::PopupLayoutParams;

// Re-export public API - assembly
pub use builder::{assemble_popup_keyboard, build_popup_keyboard, PopupKeyboard};

// Re-export public API - data types and error
pub use types::{
    ConfigurationError, PopupKey, PopupStyle, DEFAULT_BOTTOM_PADDING, DEFAULT_TOP_PADDING,
    DEFAULT_VERTICAL_GAP,
};

// Re-export public API - width estimation seam
pub use width::{max_key_width, LabelWidthEstimator};

// ============================================================================
// Public API Integration Tests
// ============================================================================
