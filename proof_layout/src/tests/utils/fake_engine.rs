// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::{Direction, GlyphOrder, Script, ShapeRequest, ShapedGlyph, ShapingEngine};

/// What a [`FakeEngine`] was asked to shape.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordedRequest {
    pub(crate) text: String,
    pub(crate) direction: Direction,
    pub(crate) script: Script,
    pub(crate) language: Option<String>,
}

/// A deterministic shaper producing one glyph per character.
///
/// Glyph `0` is `.notdef`; registered characters get glyphs named `uniXXXX`
/// from 1 on. Right-to-left requests come back in visual order, with
/// decreasing clusters.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeEngine {
    chars: Vec<char>,
    advances: HashMap<char, i32>,
    default_advance: i32,
    pub(crate) requests: Vec<RecordedRequest>,
}

impl FakeEngine {
    pub(crate) fn new(default_advance: i32) -> Self {
        Self {
            default_advance,
            ..Self::default()
        }
    }

    /// Registers characters and their advances.
    pub(crate) fn with_advances(mut self, advances: &[(char, i32)]) -> Self {
        for &(ch, advance) in advances {
            self.register(ch);
            self.advances.insert(ch, advance);
        }
        self
    }

    /// Registers every character of `text` with the default advance.
    pub(crate) fn with_chars(mut self, text: &str) -> Self {
        for ch in text.chars() {
            self.register(ch);
        }
        self
    }

    pub(crate) fn glyph_order(&self) -> GlyphOrder {
        GlyphOrder::from_names(
            core::iter::once(".notdef".to_string())
                .chain(self.chars.iter().map(|&ch| glyph_name(ch))),
        )
    }

    fn register(&mut self, ch: char) {
        if !self.chars.contains(&ch) {
            self.chars.push(ch);
        }
    }

    fn glyph_id(&self, ch: char) -> u32 {
        self.chars
            .iter()
            .position(|&known| known == ch)
            .map_or(0, |index| index as u32 + 1)
    }
}

pub(crate) fn glyph_name(ch: char) -> String {
    format!("uni{:04X}", ch as u32)
}

impl ShapingEngine for FakeEngine {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Vec<ShapedGlyph> {
        self.requests.push(RecordedRequest {
            text: request.text.to_string(),
            direction: request.direction,
            script: request.script,
            language: request.language.map(str::to_string),
        });
        let mut glyphs: Vec<ShapedGlyph> = request
            .text
            .chars()
            .enumerate()
            .map(|(index, ch)| ShapedGlyph {
                glyph_id: self.glyph_id(ch),
                cluster: index as u32,
                x_advance: self
                    .advances
                    .get(&ch)
                    .copied()
                    .unwrap_or(self.default_advance),
                ..ShapedGlyph::default()
            })
            .collect();
        if request.direction.is_rtl() {
            glyphs.reverse();
        }
        glyphs
    }
}
