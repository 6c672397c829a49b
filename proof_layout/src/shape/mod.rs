// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping segments into glyph runs.
//!
//! The layout core talks to shapers through [`ShapingEngine`]. The
//! [`ShapingAdapter`] owns an engine and the font's [`GlyphOrder`], and turns
//! one [`Segment`] into one [`GlyphRun`].

#[cfg(feature = "harfrust")]
mod cache;
#[cfg(feature = "harfrust")]
mod harfrust_engine;

#[cfg(feature = "harfrust")]
pub use harfrust_engine::HarfrustEngine;

use crate::{
    BidiLevel, FontFeature, FontVariation, GlyphOrder, GlyphRun, GlyphVector, Script, Segment,
};

/// Writing direction handed to the shaping engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right.
    #[default]
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

impl Direction {
    /// The direction of text at the given bidi embedding level.
    pub const fn from_level(level: BidiLevel) -> Self {
        if level & 1 != 0 {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    /// Returns `true` for [`Direction::RightToLeft`].
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

/// Settings applied to every segment shaped by a [`ShapingAdapter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeOptions {
    /// OpenType features to toggle.
    pub features: Vec<FontFeature>,
    /// Variation axis coordinates.
    pub variations: Vec<FontVariation>,
    /// BCP 47 language tag, e.g. `"fa"`.
    pub language: Option<String>,
    /// Script override. When unset, each segment's detected script is used.
    pub script: Option<Script>,
}

/// One request to a [`ShapingEngine`].
#[derive(Clone, Copy, Debug)]
pub struct ShapeRequest<'a> {
    /// The text of one segment.
    pub text: &'a str,
    /// The segment's direction.
    pub direction: Direction,
    /// The script to shape with.
    pub script: Script,
    /// BCP 47 language tag.
    pub language: Option<&'a str>,
    /// Feature toggles.
    pub features: &'a [FontFeature],
    /// Variation axis coordinates.
    pub variations: &'a [FontVariation],
}

/// One glyph of shaping output, in font design units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShapedGlyph {
    /// Glyph identifier in the font.
    pub glyph_id: u32,
    /// Index of the first character of the request text that produced this glyph.
    pub cluster: u32,
    /// Horizontal positioning offset.
    pub x_offset: i32,
    /// Vertical positioning offset.
    pub y_offset: i32,
    /// Horizontal advance.
    pub x_advance: i32,
    /// Vertical advance.
    pub y_advance: i32,
}

/// A text shaper.
///
/// Implementations return one entry per output glyph in visual
/// (left-to-right) order, including for right-to-left requests, with clusters
/// counted in characters (not bytes) from the start of
/// [`ShapeRequest::text`]. Shaping must be deterministic for identical
/// requests.
pub trait ShapingEngine {
    /// Shapes `request.text`.
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Vec<ShapedGlyph>;
}

impl<E: ShapingEngine + ?Sized> ShapingEngine for &mut E {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Vec<ShapedGlyph> {
        (**self).shape(request)
    }
}

impl<E: ShapingEngine + ?Sized> ShapingEngine for Box<E> {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Vec<ShapedGlyph> {
        (**self).shape(request)
    }
}

/// Shapes segments against one font.
#[derive(Debug)]
pub struct ShapingAdapter<E> {
    engine: E,
    glyph_order: GlyphOrder,
}

#[cfg(feature = "harfrust")]
impl<'a> ShapingAdapter<HarfrustEngine<'a>> {
    /// Creates an adapter shaping with HarfRust against font `index` of a
    /// compiled font blob.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFont`](crate::ErrorKind::InvalidFont) if
    /// the blob cannot be parsed.
    pub fn from_font_data(data: &'a [u8], index: u32) -> Result<Self, crate::Error> {
        Ok(Self::new(
            HarfrustEngine::new(data, index)?,
            GlyphOrder::from_font_data(data, index)?,
        ))
    }
}

impl<E: ShapingEngine> ShapingAdapter<E> {
    /// Creates an adapter from an engine and the glyph order of its font.
    pub fn new(engine: E, glyph_order: GlyphOrder) -> Self {
        Self {
            engine,
            glyph_order,
        }
    }

    /// The glyph order used to name glyphs.
    pub fn glyph_order(&self) -> &GlyphOrder {
        &self.glyph_order
    }

    /// The shaping engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the shaping engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Shapes one segment.
    pub fn shape_segment(&mut self, segment: &Segment, options: &ShapeOptions) -> GlyphRun {
        let request = ShapeRequest {
            text: segment.text(),
            direction: Direction::from_level(segment.bidi_level()),
            script: options.script.unwrap_or(segment.script()),
            language: options.language.as_deref(),
            features: &options.features,
            variations: &options.variations,
        };
        let shaped = self.engine.shape(&request);
        log::debug!(
            "shaped {:?} ({}, {:?}) into {} glyphs",
            request.text,
            request.script,
            request.direction,
            shaped.len()
        );

        let mut glyphs = Vec::with_capacity(shaped.len());
        let mut offsets = Vec::with_capacity(shaped.len());
        let mut advances = Vec::with_capacity(shaped.len());
        let mut clusters = Vec::with_capacity(shaped.len());
        for glyph in &shaped {
            if self.glyph_order.get(glyph.glyph_id).is_none() {
                log::trace!("glyph id {} is outside the glyph order", glyph.glyph_id);
            }
            glyphs.push(self.glyph_order.name(glyph.glyph_id));
            offsets.push(GlyphVector::new(glyph.x_offset, glyph.y_offset));
            advances.push(GlyphVector::new(glyph.x_advance, glyph.y_advance));
            clusters.push(glyph.cluster);
        }
        GlyphRun::new(segment.clone(), glyphs, offsets, advances, clusters)
    }

    /// Shapes each segment, in the order given.
    pub fn shape_segments(&mut self, segments: &[Segment], options: &ShapeOptions) -> Vec<GlyphRun> {
        segments
            .iter()
            .map(|segment| self.shape_segment(segment, options))
            .collect()
    }
}
