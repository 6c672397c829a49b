// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod fake_engine;
#[cfg(feature = "harfrust")]
mod test_font;

pub(crate) use fake_engine::{FakeEngine, RecordedRequest};
#[cfg(feature = "harfrust")]
pub(crate) use test_font::TestFont;

use crate::{GlyphRun, ShapeOptions, ShapingAdapter, segment_text};

/// Segments `text`, detecting its direction, and shapes every segment with `engine`.
pub(crate) fn shape_text(text: &str, engine: FakeEngine) -> Vec<GlyphRun> {
    let engine = engine.with_chars(text);
    let order = engine.glyph_order();
    let mut shaper = ShapingAdapter::new(engine, order);
    let (segments, _) = segment_text(text);
    shaper.shape_segments(&segments, &ShapeOptions::default())
}

/// The logical text of each line.
pub(crate) fn line_texts(lines: &[Vec<GlyphRun>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.iter().map(|run| run.segment().text()).collect())
        .collect()
}
