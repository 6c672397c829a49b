// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidi-aware text layout for font proofing.
//!
//! Given a string, a compiled font and a target line width, this crate produces
//! ordered, positioned glyph sequences ready for rendering:
//!
//! 1. [`Segmenter`] splits text into runs of a single script and bidi level.
//! 2. [`reorder_segments`] puts logical-order segments into visual order.
//! 3. [`ShapingAdapter`] shapes each segment through a [`ShapingEngine`]
//!    (HarfRust by default) into an immutable, sliceable [`GlyphRun`].
//! 4. [`break_lines`] fits runs into lines of a maximum width, splitting runs
//!    without breaking the text to glyph mapping, including for right-to-left runs.
//! 5. [`Paragraph`] accumulates shaped runs and lazily caches its [`GlyphLine`]s.
//!
//! All measurements are in font design units; no scaling is applied.
//!
//! ## Features
//!
//! - `harfrust` (enabled by default): the [`HarfrustEngine`] shaping engine and
//!   [`GlyphOrder::from_font_data`].
//!
//! ## Example
//!
//! ```
//! use proof_layout::{BaseDirection, Segmenter, reorder_segments};
//!
//! let segmenter = Segmenter::new();
//! let (segments, base) = segmenter.segment("/en/\u{62e}\u{637}/fa");
//! assert_eq!(base, BaseDirection::Ltr);
//! assert_eq!(segments.len(), 4);
//!
//! let visual = reorder_segments(&segments, base);
//! assert_eq!(visual.len(), segments.len());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod glyph_order;
mod glyph_run;
mod line_break;
#[cfg(feature = "harfrust")]
mod lru_cache;
mod paragraph;
mod properties;
mod reorder;
mod script;
mod segment;
mod setting;
mod shape;

#[cfg(test)]
mod tests;

pub use crate::error::{Error, ErrorKind};
pub use crate::glyph_order::GlyphOrder;
pub use crate::glyph_run::{GlyphName, GlyphRun, GlyphVector};
pub use crate::line_break::break_lines;
pub use crate::paragraph::{GlyphLine, GlyphRecord, GlyphSet, Paragraph, PositionedGlyph};
pub use crate::properties::{CharProperties, IcuCharProperties};
pub use crate::reorder::{reorder_segments, reorder_visual};
pub use crate::script::Script;
pub use crate::segment::{BaseDirection, BidiLevel, Segment, Segmenter, segment_text};
pub use crate::setting::{FontFeature, FontVariation, Setting, Tag};
#[cfg(feature = "harfrust")]
pub use crate::shape::HarfrustEngine;
pub use crate::shape::{
    Direction, ShapeOptions, ShapeRequest, ShapedGlyph, ShapingAdapter, ShapingEngine,
};

pub use icu_properties::props::GeneralCategory;
pub use unicode_bidi::BidiClass;
