// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text into runs of a single script and bidi level.

use icu_properties::props::GeneralCategory;
use unicode_bidi::{BidiClass, BidiInfo, Level};

use crate::properties::BidiClassSource;
use crate::{CharProperties, IcuCharProperties, Script};

/// A bidirectional embedding level (even = left-to-right, odd = right-to-left).
pub type BidiLevel = u8;

/// The base direction of a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseDirection {
    /// Left-to-right, base level 0.
    #[default]
    Ltr,
    /// Right-to-left, base level 1.
    Rtl,
}

impl BaseDirection {
    /// The paragraph embedding level for this direction.
    pub const fn level(self) -> BidiLevel {
        match self {
            Self::Ltr => 0,
            Self::Rtl => 1,
        }
    }

    /// The direction of a paragraph with the given embedding level.
    pub const fn from_level(level: BidiLevel) -> Self {
        if level & 1 != 0 { Self::Rtl } else { Self::Ltr }
    }

    /// Returns `true` for [`BaseDirection::Rtl`].
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// A run of text sharing one script and one bidi level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    text: String,
    script: Script,
    bidi_level: BidiLevel,
    start_index: usize,
}

impl Segment {
    /// Creates a segment.
    ///
    /// `start_index` is the character offset of the segment's first character
    /// in its paragraph.
    pub fn new(
        text: impl Into<String>,
        script: Script,
        bidi_level: BidiLevel,
        start_index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            script,
            bidi_level,
            start_index,
        }
    }

    /// The text of the segment.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The script shared by every character of the segment.
    pub fn script(&self) -> Script {
        self.script
    }

    /// The bidi embedding level shared by every character of the segment.
    pub fn bidi_level(&self) -> BidiLevel {
        self.bidi_level
    }

    /// The character offset of this segment in its paragraph.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Returns `true` if the segment runs right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.bidi_level & 1 != 0
    }

    /// The number of characters in the segment.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Moves the segment `offset` characters further into its paragraph.
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        self.start_index += offset;
        self
    }
}

/// Splits paragraphs into [`Segment`]s.
///
/// Each character is classified by script and by the embedding level that the
/// Unicode Bidirectional Algorithm (UAX #9) resolves for it; maximal runs of
/// characters sharing both become one segment.
#[derive(Clone, Debug, Default)]
pub struct Segmenter<P = IcuCharProperties> {
    properties: P,
}

impl Segmenter {
    /// Creates a segmenter using ICU4X Unicode data.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: CharProperties> Segmenter<P> {
    /// Creates a segmenter reading character data from `properties`.
    pub fn with_properties(properties: P) -> Self {
        Self { properties }
    }

    /// The character property source.
    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Segments `text`, detecting the base direction from its first strong
    /// character (left-to-right when there is none).
    pub fn segment(&self, text: &str) -> (Vec<Segment>, BaseDirection) {
        self.segment_with_base(text, None)
    }

    /// Segments `text`, optionally forcing the paragraph base direction.
    ///
    /// `text` is expected to hold a single paragraph. Should it contain
    /// paragraph separators anyway, each paragraph is resolved on its own and
    /// the returned direction is that of the first.
    pub fn segment_with_base(
        &self,
        text: &str,
        base: Option<BaseDirection>,
    ) -> (Vec<Segment>, BaseDirection) {
        if text.is_empty() {
            return (Vec::new(), base.unwrap_or_default());
        }
        let scripts = self.detect_scripts(text);
        let (levels, base) = self.resolve_levels(text, base);

        let mut segments: Vec<Segment> = Vec::new();
        let mut current: Option<Segment> = None;
        for (index, ((ch, script), level)) in text.chars().zip(scripts).zip(levels).enumerate() {
            match &mut current {
                Some(segment) if segment.script == script && segment.bidi_level == level => {
                    segment.text.push(ch);
                }
                _ => {
                    segments.extend(current.take());
                    current = Some(Segment::new(ch.to_string(), script, level, index));
                }
            }
        }
        segments.extend(current);

        log::debug!(
            "segmented {} chars into {} segments, base {:?}",
            text.chars().count(),
            segments.len(),
            base
        );
        (segments, base)
    }

    /// Resolves one script per character.
    ///
    /// Characters in the common, inherited, unwritten or unknown scripts take
    /// the script of the preceding character. A closing mirrored bracket is
    /// left unresolved so that it joins whichever run follows it. Unresolved
    /// characters are then filled from the next resolved character, and
    /// finally from the previous one.
    fn detect_scripts(&self, text: &str) -> Vec<Script> {
        let mut scripts: Vec<Option<Script>> = Vec::with_capacity(text.len());
        let mut prev = None;
        for ch in text.chars() {
            let own = self.properties.script(ch);
            let mut script = if own.is_unresolved() { prev } else { Some(own) };
            if self.properties.general_category(ch) == GeneralCategory::ClosePunctuation
                && self.properties.is_mirrored(ch)
            {
                script = None;
            }
            scripts.push(script);
            prev = script;
        }

        let mut next = None;
        for script in scripts.iter_mut().rev() {
            match script {
                Some(resolved) => next = Some(*resolved),
                None => *script = next,
            }
        }
        let mut prev = None;
        for script in &mut scripts {
            match script {
                Some(resolved) => prev = Some(*resolved),
                None => *script = prev,
            }
        }

        scripts
            .into_iter()
            .map(|script| script.unwrap_or(Script::UNKNOWN))
            .collect()
    }

    /// Resolves one embedding level per character, after rule L1.
    ///
    /// Characters removed by rule X9 (embedding controls and boundary
    /// neutrals) take the level of the preceding character, or the paragraph
    /// level at the start of a paragraph.
    fn resolve_levels(
        &self,
        text: &str,
        base: Option<BaseDirection>,
    ) -> (Vec<BidiLevel>, BaseDirection) {
        let source = BidiClassSource(&self.properties);
        let default_level = base.map(|base| match base {
            BaseDirection::Ltr => Level::ltr(),
            BaseDirection::Rtl => Level::rtl(),
        });
        let info = BidiInfo::new_with_data_source(&source, text, default_level);

        let resolved_base = info
            .paragraphs
            .first()
            .map(|para| BaseDirection::from_level(para.level.number()))
            .or(base)
            .unwrap_or_default();

        let mut levels = Vec::with_capacity(text.len());
        for para in &info.paragraphs {
            let para_levels = info.reordered_levels_per_char(para, para.range.clone());
            let mut prev = para.level.number();
            for ((byte_index, _), level) in text[para.range.clone()]
                .char_indices()
                .zip(para_levels)
            {
                let class = info.original_classes[para.range.start + byte_index];
                let level = if removed_by_x9(class) {
                    prev
                } else {
                    level.number()
                };
                levels.push(level);
                prev = level;
            }
        }
        (levels, resolved_base)
    }
}

fn removed_by_x9(class: BidiClass) -> bool {
    matches!(
        class,
        BidiClass::RLE
            | BidiClass::LRE
            | BidiClass::RLO
            | BidiClass::LRO
            | BidiClass::PDF
            | BidiClass::BN
    )
}

/// Segments `text` with ICU4X Unicode data, detecting the base direction.
///
/// Returns the segments in logical order together with the paragraph base
/// direction.
pub fn segment_text(text: &str) -> (Vec<Segment>, BaseDirection) {
    Segmenter::new().segment(text)
}
