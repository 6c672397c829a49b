// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal TrueType font assembled in memory.
//!
//! The font has `cmap` (format 12), `hhea`, `hmtx`, `maxp` (version 0.5) and
//! `post` (version 2.0) tables and no outlines, which is enough to shape and
//! to read glyph names.

/// One glyph of a [`TestFont`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct TestGlyph {
    pub(crate) name: &'static str,
    pub(crate) ch: Option<char>,
    pub(crate) advance: u16,
}

/// Builds font binaries from a glyph list. Glyph 0 is always `.notdef`.
#[derive(Clone, Debug)]
pub(crate) struct TestFont {
    glyphs: Vec<TestGlyph>,
}

impl TestFont {
    pub(crate) fn new(notdef_advance: u16) -> Self {
        Self {
            glyphs: vec![TestGlyph {
                name: ".notdef",
                ch: None,
                advance: notdef_advance,
            }],
        }
    }

    pub(crate) fn glyph(mut self, name: &'static str, ch: char, advance: u16) -> Self {
        self.glyphs.push(TestGlyph {
            name,
            ch: Some(ch),
            advance,
        });
        self
    }

    /// `.notdef`, `a`-`c` (600, 700, 800) and Hebrew `alef`, `bet` (900, 1000).
    pub(crate) fn latin_hebrew() -> Self {
        Self::new(500)
            .glyph("a", 'a', 600)
            .glyph("b", 'b', 700)
            .glyph("c", 'c', 800)
            .glyph("alef", '\u{5d0}', 900)
            .glyph("bet", '\u{5d1}', 1000)
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut tables = [
            (*b"cmap", self.cmap()),
            (*b"hhea", self.hhea()),
            (*b"hmtx", self.hmtx()),
            (*b"maxp", self.maxp()),
            (*b"post", self.post()),
        ];
        tables.sort_by_key(|(tag, _)| *tag);

        let mut font = Writer::default();
        font.u32(0x0001_0000);
        font.u16(tables.len() as u16);
        // searchRange, entrySelector and rangeShift are not consulted.
        font.u16(0);
        font.u16(0);
        font.u16(0);

        let mut offset = 12 + 16 * tables.len();
        for (tag, data) in &tables {
            font.bytes(tag);
            font.u32(0);
            font.u32(offset as u32);
            font.u32(data.len() as u32);
            offset += padded(data.len());
        }
        for (_, data) in &tables {
            font.bytes(data);
            font.bytes(&[0; 3][..padded(data.len()) - data.len()]);
        }
        font.0
    }

    fn num_glyphs(&self) -> u16 {
        self.glyphs.len() as u16
    }

    fn cmap(&self) -> Vec<u8> {
        let mut groups: Vec<(u32, u32)> = (0_u32..)
            .zip(&self.glyphs)
            .filter_map(|(id, glyph)| Some((u32::from(glyph.ch?), id)))
            .collect();
        groups.sort_unstable();

        let mut cmap = Writer::default();
        cmap.u16(0);
        cmap.u16(1);
        // Windows, Unicode full repertoire.
        cmap.u16(3);
        cmap.u16(10);
        cmap.u32(12);
        cmap.u16(12);
        cmap.u16(0);
        cmap.u32(16 + 12 * groups.len() as u32);
        cmap.u32(0);
        cmap.u32(groups.len() as u32);
        for (ch, id) in groups {
            cmap.u32(ch);
            cmap.u32(ch);
            cmap.u32(id);
        }
        cmap.0
    }

    fn hhea(&self) -> Vec<u8> {
        let max_advance = self.glyphs.iter().map(|glyph| glyph.advance).max();
        let mut hhea = Writer::default();
        hhea.u32(0x0001_0000);
        hhea.i16(800);
        hhea.i16(-200);
        hhea.i16(0);
        hhea.u16(max_advance.unwrap_or_default());
        // minLeftSideBearing, minRightSideBearing, xMaxExtent.
        hhea.i16(0);
        hhea.i16(0);
        hhea.i16(0);
        // caretSlopeRise, caretSlopeRun, caretOffset.
        hhea.i16(1);
        hhea.i16(0);
        hhea.i16(0);
        for _ in 0..4 {
            hhea.i16(0);
        }
        hhea.i16(0);
        hhea.u16(self.num_glyphs());
        hhea.0
    }

    fn hmtx(&self) -> Vec<u8> {
        let mut hmtx = Writer::default();
        for glyph in &self.glyphs {
            hmtx.u16(glyph.advance);
            hmtx.i16(0);
        }
        hmtx.0
    }

    fn maxp(&self) -> Vec<u8> {
        let mut maxp = Writer::default();
        maxp.u32(0x0000_5000);
        maxp.u16(self.num_glyphs());
        maxp.0
    }

    fn post(&self) -> Vec<u8> {
        let mut post = Writer::default();
        post.u32(0x0002_0000);
        // italicAngle, underline metrics, isFixedPitch and memory hints.
        post.bytes(&[0; 28]);
        post.u16(self.num_glyphs());
        let mut custom = Vec::new();
        for glyph in &self.glyphs {
            if glyph.name == ".notdef" {
                post.u16(0);
            } else {
                post.u16(258 + custom.len() as u16);
                custom.push(glyph.name);
            }
        }
        for name in custom {
            post.bytes(&[name.len() as u8]);
            post.bytes(name.as_bytes());
        }
        post.0
    }
}

fn padded(len: usize) -> usize {
    len.next_multiple_of(4)
}

/// Big-endian byte sink.
#[derive(Default)]
struct Writer(Vec<u8>);

impl Writer {
    fn bytes(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    fn u16(&mut self, value: u16) {
        self.bytes(&value.to_be_bytes());
    }

    fn i16(&mut self, value: i16) {
        self.bytes(&value.to_be_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.bytes(&value.to_be_bytes());
    }
}
