// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraphs and the lines computed from them.

use std::sync::OnceLock;

use crate::{
    BaseDirection, CharProperties, GlyphName, GlyphOrder, GlyphRun, GlyphVector,
    IcuCharProperties, Segmenter, ShapeOptions, ShapingAdapter, ShapingEngine, break_lines,
    reorder_visual,
};

/// A source of glyph identities for rendering.
pub trait GlyphSet {
    /// Returns `true` if the glyph set has a glyph named `name`.
    fn contains(&self, name: &str) -> bool;

    /// The glyph drawn in place of glyphs missing from the set.
    fn fallback_glyph(&self) -> GlyphName;
}

impl GlyphSet for GlyphOrder {
    fn contains(&self, name: &str) -> bool {
        self.id(name).is_some()
    }

    /// Glyph 0, conventionally `.notdef`.
    fn fallback_glyph(&self) -> GlyphName {
        self.name(0)
    }
}

/// A glyph with its offset and advance, as consumed by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlyphRecord {
    /// The glyph name.
    pub glyph: GlyphName,
    /// Offset from the pen position.
    pub offset: GlyphVector,
    /// Pen movement after drawing the glyph.
    pub advance: GlyphVector,
}

/// A glyph at an absolute position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedGlyph {
    /// The glyph name.
    pub glyph: GlyphName,
    /// Horizontal position, including the glyph's offset.
    pub x: f32,
    /// Vertical position, including the glyph's offset.
    pub y: f32,
}

/// One line of a [`Paragraph`], with its runs in visual order.
#[derive(Clone, Debug)]
pub struct GlyphLine {
    glyph_runs: Vec<GlyphRun>,
    x: f32,
    y: f32,
    width: OnceLock<f32>,
}

impl GlyphLine {
    /// Creates a line at the origin.
    pub fn new(glyph_runs: Vec<GlyphRun>) -> Self {
        Self {
            glyph_runs,
            x: 0.0,
            y: 0.0,
            width: OnceLock::new(),
        }
    }

    /// The runs of the line, left to right.
    pub fn glyph_runs(&self) -> &[GlyphRun] {
        &self.glyph_runs
    }

    /// Horizontal position of the line's left edge.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical position of the line.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// The sum of the widths of the line's runs.
    pub fn width(&self) -> f32 {
        *self
            .width
            .get_or_init(|| self.glyph_runs.iter().map(GlyphRun::width).sum())
    }

    /// Iterates the glyphs of the line from left to right.
    pub fn glyph_records(&self) -> impl Iterator<Item = GlyphRecord> + '_ {
        self.glyph_runs.iter().flat_map(|run| {
            run.glyphs()
                .iter()
                .zip(run.offsets())
                .zip(run.advances())
                .map(|((glyph, offset), advance)| GlyphRecord {
                    glyph: glyph.clone(),
                    offset: *offset,
                    advance: *advance,
                })
        })
    }

    /// Like [`glyph_records`](Self::glyph_records), with glyphs missing from
    /// `glyph_set` replaced by its fallback glyph.
    pub fn resolved_records<'a, G: GlyphSet + ?Sized>(
        &'a self,
        glyph_set: &'a G,
    ) -> impl Iterator<Item = GlyphRecord> + 'a {
        self.glyph_records().map(move |mut record| {
            if !glyph_set.contains(record.glyph.as_str()) {
                record.glyph = glyph_set.fallback_glyph();
            }
            record
        })
    }

    /// Iterates the glyphs of the line with absolute positions, starting the
    /// pen at the line origin.
    pub fn positioned_glyphs(&self) -> impl Iterator<Item = PositionedGlyph> + '_ {
        let (mut pen_x, mut pen_y) = (self.x, self.y);
        self.glyph_records().map(move |record| {
            let glyph = PositionedGlyph {
                glyph: record.glyph,
                x: pen_x + record.offset.x as f32,
                y: pen_y + record.offset.y as f32,
            };
            pen_x += record.advance.x as f32;
            pen_y += record.advance.y as f32;
            glyph
        })
    }
}

/// Shaped runs of one paragraph and the lines laid out from them.
///
/// Text can be appended in several calls, each possibly shaped with a
/// different font. Lines are computed on first access and cached until the
/// text or the line width changes.
#[derive(Clone, Debug)]
pub struct Paragraph<P = IcuCharProperties> {
    base: BaseDirection,
    line_width: Option<f32>,
    text: String,
    char_len: usize,
    glyph_runs: Vec<GlyphRun>,
    lines: OnceLock<Vec<GlyphLine>>,
    segmenter: Segmenter<P>,
}

impl Paragraph {
    /// Creates an empty paragraph.
    ///
    /// Without a line width, all text is laid out on a single line.
    pub fn new(base: BaseDirection, line_width: Option<f32>) -> Self {
        Self::with_properties(base, line_width, IcuCharProperties::new())
    }
}

impl<P: CharProperties> Paragraph<P> {
    /// Creates an empty paragraph reading character data from `properties`.
    pub fn with_properties(base: BaseDirection, line_width: Option<f32>, properties: P) -> Self {
        Self {
            base,
            line_width,
            text: String::new(),
            char_len: 0,
            glyph_runs: Vec::new(),
            lines: OnceLock::new(),
            segmenter: Segmenter::with_properties(properties),
        }
    }

    /// The paragraph direction.
    pub fn base_direction(&self) -> BaseDirection {
        self.base
    }

    /// The maximum line width, if any.
    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    /// Sets the maximum line width. Cached lines are discarded.
    pub fn set_line_width(&mut self, line_width: Option<f32>) {
        self.line_width = line_width;
        self.lines.take();
    }

    /// All text appended so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The shaped runs, in logical order.
    pub fn glyph_runs(&self) -> &[GlyphRun] {
        &self.glyph_runs
    }

    /// Segments `text` in the paragraph direction, shapes every segment with
    /// `shaper` and appends the runs. Cached lines are discarded.
    ///
    /// Segment start indices count from the start of the paragraph.
    pub fn add_text_from_font<E: ShapingEngine>(
        &mut self,
        text: &str,
        shaper: &mut ShapingAdapter<E>,
        options: &ShapeOptions,
    ) {
        let (segments, _) = self.segmenter.segment_with_base(text, Some(self.base));
        for segment in segments {
            let segment = segment.shifted(self.char_len);
            self.glyph_runs.push(shaper.shape_segment(&segment, options));
        }
        self.text.push_str(text);
        self.char_len += text.chars().count();
        self.lines.take();
    }

    /// Returns `true` if lines will be recomputed on next access.
    pub fn is_dirty(&self) -> bool {
        self.lines.get().is_none()
    }

    /// Computes the lines if they are not cached.
    pub fn calculate_glyph_lines(&self) {
        self.glyph_lines();
    }

    /// The lines of the paragraph, top to bottom.
    pub fn glyph_lines(&self) -> &[GlyphLine] {
        self.lines.get_or_init(|| self.layout_lines())
    }

    /// The glyph records of every line, with glyphs missing from `glyph_set`
    /// replaced by its fallback glyph.
    pub fn resolved_records<G: GlyphSet + ?Sized>(&self, glyph_set: &G) -> Vec<Vec<GlyphRecord>> {
        self.glyph_lines()
            .iter()
            .map(|line| line.resolved_records(glyph_set).collect())
            .collect()
    }

    fn layout_lines(&self) -> Vec<GlyphLine> {
        let width = self.line_width.unwrap_or(f32::INFINITY);
        let rtl = self.base.is_rtl();
        let lines: Vec<GlyphLine> = break_lines(&self.glyph_runs, width, self.segmenter.properties())
            .into_iter()
            .map(|runs| {
                let mut line = GlyphLine::new(reorder_visual(&runs, rtl, GlyphRun::is_rtl));
                if let Some(line_width) = self.line_width.filter(|_| rtl) {
                    line.x = line_width - line.width();
                }
                line
            })
            .collect();
        log::debug!(
            "laid out {} runs into {} lines at width {:?}",
            self.glyph_runs.len(),
            lines.len(),
            self.line_width
        );
        lines
    }
}
