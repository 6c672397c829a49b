// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaped glyph sequences and zero-copy views into them.

use core::fmt;
use core::ops::Range;
use std::sync::{Arc, OnceLock};

use crate::{Error, Segment};

/// The name of a glyph in a font's glyph order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphName(Arc<str>);

impl GlyphName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GlyphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for GlyphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for GlyphName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GlyphName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GlyphName {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl From<String> for GlyphName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl PartialEq<str> for GlyphName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for GlyphName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// A 2D displacement in font design units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphVector {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl GlyphVector {
    /// Creates a vector.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Backing storage shared by a shaped run and every view sliced from it.
struct RunStorage {
    segment: Segment,
    /// Number of characters in `segment`.
    text_len: usize,
    glyphs: Vec<GlyphName>,
    offsets: Vec<GlyphVector>,
    advances: Vec<GlyphVector>,
    clusters: Vec<u32>,
}

/// An immutable sequence of shaped glyphs for one [`Segment`].
///
/// Glyphs are stored in visual (left-to-right) order. `clusters()[i]` is the
/// character index, relative to `segment().text()`, of the first character
/// that produced glyph `i`; clusters are non-decreasing for left-to-right runs
/// and non-increasing for right-to-left runs.
///
/// Runs are cheap to clone and to [`slice`](Self::slice): every slice shares
/// the glyph, offset and advance storage of the run that was originally
/// shaped, and only carries its own index range, segment and clusters.
#[derive(Clone)]
pub struct GlyphRun {
    root: Arc<RunStorage>,
    range: Range<usize>,
    segment: Segment,
    clusters: Vec<u32>,
    width: OnceLock<f32>,
}

impl GlyphRun {
    /// Creates a run from shaping output.
    ///
    /// # Panics
    ///
    /// Panics if `glyphs`, `offsets`, `advances` and `clusters` differ in
    /// length.
    pub fn new(
        segment: Segment,
        glyphs: Vec<GlyphName>,
        offsets: Vec<GlyphVector>,
        advances: Vec<GlyphVector>,
        clusters: Vec<u32>,
    ) -> Self {
        let len = glyphs.len();
        assert!(
            offsets.len() == len && advances.len() == len && clusters.len() == len,
            "glyph run parts differ in length: {len} glyphs, {} offsets, {} advances, {} clusters",
            offsets.len(),
            advances.len(),
            clusters.len()
        );
        let root = Arc::new(RunStorage {
            text_len: segment.char_len(),
            segment: segment.clone(),
            glyphs,
            offsets,
            advances,
            clusters: clusters.clone(),
        });
        Self {
            root,
            range: 0..len,
            segment,
            clusters,
            width: OnceLock::new(),
        }
    }

    /// The number of glyphs in the run.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Returns `true` if the run holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The segment covered by this run.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Returns `true` if the run's segment is right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.segment.is_rtl()
    }

    /// Glyph names, in visual order.
    pub fn glyphs(&self) -> &[GlyphName] {
        &self.root.glyphs[self.range.clone()]
    }

    /// Per-glyph positioning offsets.
    pub fn offsets(&self) -> &[GlyphVector] {
        &self.root.offsets[self.range.clone()]
    }

    /// Per-glyph advances.
    pub fn advances(&self) -> &[GlyphVector] {
        &self.root.advances[self.range.clone()]
    }

    /// Per-glyph cluster indices, relative to [`segment().text()`](Segment::text).
    pub fn clusters(&self) -> &[u32] {
        &self.clusters
    }

    /// Sum of the absolute horizontal advances.
    pub fn width(&self) -> f32 {
        *self.width.get_or_init(|| {
            self.advances()
                .iter()
                .map(|advance| advance.x.unsigned_abs() as f32)
                .sum()
        })
    }

    /// Returns the glyphs `start..end` as a new run.
    ///
    /// The returned run's segment text is the smallest character span that
    /// covers the clusters of the selected glyphs, and its clusters are
    /// relative to that span. Slicing a slice resolves against the originally
    /// shaped run.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::SliceOutOfBounds`](crate::ErrorKind::SliceOutOfBounds)
    /// if `start > end` or `end > self.len()`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, Error> {
        if start > end || end > self.len() {
            return Err(Error::slice_out_of_bounds(start, end, self.len()));
        }
        Ok(self.view(start, end))
    }

    /// Splits the run at glyph `index` (clamped to the run length) into
    /// `(..index, index..)`.
    pub(crate) fn split_at(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.len());
        (self.view(0, index), self.view(index, self.len()))
    }

    fn view(&self, start: usize, end: usize) -> Self {
        let root = &self.root;
        let range = self.range.start + start..self.range.start + end;
        let clusters = &root.clusters[range.clone()];
        let (Some(&min), Some(&max)) = (clusters.iter().min(), clusters.iter().max()) else {
            let segment = Segment::new(
                String::new(),
                self.segment.script(),
                self.segment.bidi_level(),
                self.segment.start_index(),
            );
            return Self {
                root: Arc::clone(root),
                range,
                segment,
                clusters: Vec::new(),
                width: OnceLock::new(),
            };
        };

        // A cluster ends where the next higher cluster of the root begins.
        let text_start = (min as usize).min(root.text_len);
        let text_end = root
            .clusters
            .iter()
            .copied()
            .filter(|&cluster| cluster > max)
            .min()
            .map_or(root.text_len, |cluster| cluster as usize)
            .min(root.text_len);
        let text: String = root
            .segment
            .text()
            .chars()
            .skip(text_start)
            .take(text_end.saturating_sub(text_start))
            .collect();
        let segment = Segment::new(
            text,
            root.segment.script(),
            root.segment.bidi_level(),
            root.segment.start_index() + min as usize,
        );
        Self {
            root: Arc::clone(root),
            segment,
            clusters: clusters.iter().map(|cluster| cluster - min).collect(),
            range,
            width: OnceLock::new(),
        }
    }
}

impl PartialEq for GlyphRun {
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment
            && self.clusters == other.clusters
            && self.glyphs() == other.glyphs()
            && self.offsets() == other.offsets()
            && self.advances() == other.advances()
    }
}

impl fmt::Debug for GlyphRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphRun")
            .field("segment", &self.segment)
            .field("range", &self.range)
            .field("glyphs", &self.glyphs())
            .field("clusters", &self.clusters)
            .finish_non_exhaustive()
    }
}
