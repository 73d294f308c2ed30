// SPDX-License-Identifier: GPL-3.0-only

//! Morekeys - layout engine for long-press popup keys on soft keyboards.
//!
//! This crate computes the geometry of a transient popup keyboard ("more
//! keys") that appears above a long-pressed key, offering alternate
//! characters such as accented variants. It owns the layout algorithm only:
//! row/column partition, left/right balance around the long-pressed key,
//! top-row centering, and per-key pixel coordinates, bounded by the parent
//! keyboard surface.
//!
//! Rendering, touch handling, key-spec parsing, and font measurement are the
//! host keyboard's concern; text measurement is consumed through the
//! [`popup::LabelWidthEstimator`] trait.
//!
//! # Modules
//!
//! - `popup`: the layout calculator, the popup assembler, the data types,
//!   and the label-width estimation seam.

pub mod popup;

// Re-export the long-press entry points at the crate root
pub use crate::popup::{
    build_popup_keyboard, max_key_width, ConfigurationError, LabelWidthEstimator, PopupKey,
    PopupKeyboard, PopupLayoutParams, PopupStyle,
};
