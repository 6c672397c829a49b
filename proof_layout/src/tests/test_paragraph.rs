// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::FakeEngine;
use crate::{
    BaseDirection, GlyphName, GlyphSet, GlyphVector, Paragraph, PositionedGlyph, ShapeOptions,
    ShapingAdapter,
};

fn adapter(text: &str, advance: i32) -> ShapingAdapter<FakeEngine> {
    let engine = FakeEngine::new(advance).with_chars(text);
    let order = engine.glyph_order();
    ShapingAdapter::new(engine, order)
}

/// Only knows the glyphs it was given.
struct SparseGlyphs(Vec<&'static str>);

impl GlyphSet for SparseGlyphs {
    fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|glyph| *glyph == name)
    }

    fn fallback_glyph(&self) -> GlyphName {
        ".notdef".into()
    }
}

#[test]
fn lines_are_cached_until_mutation() {
    let mut shaper = adapter("ab cd", 100);
    let mut paragraph = Paragraph::new(BaseDirection::Ltr, Some(350.0));
    assert!(paragraph.is_dirty());
    assert!(paragraph.glyph_lines().is_empty());
    assert!(!paragraph.is_dirty());

    paragraph.add_text_from_font("ab cd", &mut shaper, &ShapeOptions::default());
    assert!(paragraph.is_dirty());
    paragraph.calculate_glyph_lines();
    assert!(!paragraph.is_dirty());
    assert_eq!(paragraph.glyph_lines().len(), 2);

    paragraph.set_line_width(None);
    assert!(paragraph.is_dirty());
    assert_eq!(paragraph.glyph_lines().len(), 1);
    assert_eq!(paragraph.glyph_lines()[0].width(), 500.0);
}

#[test]
fn appended_text_keeps_paragraph_offsets() {
    let mut shaper = adapter("abcdef", 100);
    let mut paragraph = Paragraph::new(BaseDirection::Ltr, None);
    paragraph.add_text_from_font("abc", &mut shaper, &ShapeOptions::default());
    paragraph.add_text_from_font("def", &mut shaper, &ShapeOptions::default());
    assert_eq!(paragraph.text(), "abcdef");
    let starts: Vec<_> = paragraph
        .glyph_runs()
        .iter()
        .map(|run| run.segment().start_index())
        .collect();
    assert_eq!(starts, [0, 3]);
}

#[test]
fn line_width_is_sum_of_runs() {
    let text = "ab \u{5d0}\u{5d1} cd";
    let mut shaper = adapter(text, 100);
    let mut paragraph = Paragraph::new(BaseDirection::Ltr, None);
    paragraph.add_text_from_font(text, &mut shaper, &ShapeOptions::default());
    let line = &paragraph.glyph_lines()[0];
    let sum: f32 = line.glyph_runs().iter().map(|run| run.width()).sum();
    assert_eq!(line.width(), sum);
    assert_eq!(line.width(), 800.0);
    assert_eq!(line.x(), 0.0);
}

#[test]
fn rtl_lines_are_visual_and_right_aligned() {
    let text = "\u{5d0}\u{5d1} cd";
    let mut shaper = adapter(text, 100);
    let mut paragraph = Paragraph::new(BaseDirection::Rtl, Some(1000.0));
    paragraph.add_text_from_font(text, &mut shaper, &ShapeOptions::default());

    let line = &paragraph.glyph_lines()[0];
    let texts: Vec<_> = line
        .glyph_runs()
        .iter()
        .map(|run| run.segment().text())
        .collect();
    assert_eq!(texts, ["cd", "\u{5d0}\u{5d1} "]);
    assert_eq!(line.x(), 500.0);

    let glyphs: Vec<_> = line.glyph_records().map(|record| record.glyph).collect();
    assert_eq!(
        glyphs,
        ["uni0063", "uni0064", "uni0020", "uni05D1", "uni05D0"].map(GlyphName::from)
    );
}

#[test]
fn positioned_glyphs_accumulate_advances() {
    let mut shaper = adapter("abc", 100);
    let mut paragraph = Paragraph::new(BaseDirection::Ltr, None);
    paragraph.add_text_from_font("abc", &mut shaper, &ShapeOptions::default());
    let xs: Vec<_> = paragraph.glyph_lines()[0]
        .positioned_glyphs()
        .map(|PositionedGlyph { x, .. }| x)
        .collect();
    assert_eq!(xs, [0.0, 100.0, 200.0]);
}

#[test]
fn missing_glyphs_use_fallback() {
    let mut shaper = adapter("ab", 100);
    let mut paragraph = Paragraph::new(BaseDirection::Ltr, None);
    paragraph.add_text_from_font("ab", &mut shaper, &ShapeOptions::default());

    let records = paragraph.resolved_records(&SparseGlyphs(vec!["uni0061"]));
    assert_eq!(records.len(), 1);
    let names: Vec<_> = records[0].iter().map(|record| record.glyph.as_str()).collect();
    assert_eq!(names, ["uni0061", ".notdef"]);
    assert_eq!(records[0][1].advance, GlyphVector::new(100, 0));

    let order = shaper.glyph_order();
    assert!(order.contains("uni0062"));
    assert_eq!(order.fallback_glyph(), ".notdef");
}
