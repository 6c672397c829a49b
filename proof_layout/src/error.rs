// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for layout operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information. Bounds
/// violations report the attempted range and the run length, settings errors
/// report the byte position of the bad entry, and invalid fonts carry the
/// parser's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start index of the caller-provided range.
    start: usize,

    /// The end index (exclusive) of the caller-provided range.
    end: usize,

    /// The length of the sliced sequence at the time of failure.
    len: usize,

    /// Byte offset of the malformed entry in a settings list.
    position: Option<usize>,

    /// Detail from an underlying parser, when available.
    detail: Option<String>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the sliced run; an `is_empty` method would be misleading."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start index of the range provided by the caller.
    ///
    /// Zero unless the kind is [`ErrorKind::SliceOutOfBounds`].
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end index of the range provided by the caller.
    ///
    /// Zero unless the kind is [`ErrorKind::SliceOutOfBounds`].
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length of the sequence that was being sliced.
    ///
    /// Zero unless the kind is [`ErrorKind::SliceOutOfBounds`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// The byte offset in the settings list where parsing failed.
    ///
    /// Only [`ErrorKind::InvalidSetting`] errors have a position.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Extra detail from the font parser or settings parser, if available.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub(crate) fn slice_out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::SliceOutOfBounds,
            start,
            end,
            len,
            position: None,
            detail: None,
        }
    }

    #[cfg_attr(
        not(feature = "harfrust"),
        allow(dead_code, reason = "only font parsing reports invalid fonts")
    )]
    pub(crate) fn invalid_font(detail: impl core::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::InvalidFont,
            start: 0,
            end: 0,
            len: 0,
            position: None,
            detail: Some(format!("{detail}")),
        }
    }

    pub(crate) fn invalid_setting(source: &str, position: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidSetting,
            start: 0,
            end: 0,
            len: 0,
            position: Some(position),
            detail: Some(source.into()),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::SliceOutOfBounds => write!(
                f,
                "glyph range {}..{} out of bounds for run of {} glyphs",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidFont => match &self.detail {
                Some(detail) => write!(f, "invalid font data: {detail}"),
                None => f.write_str("invalid font data"),
            },
            ErrorKind::InvalidSetting => {
                let position = self.position.unwrap_or_default();
                match &self.detail {
                    Some(source) => {
                        write!(f, "invalid font setting list {source:?} at byte {position}")
                    }
                    None => write!(f, "invalid font setting list at byte {position}"),
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A glyph range was outside the run, or had `start > end`.
    ///
    /// The line breaker never produces such a range; seeing this from layout
    /// indicates a defect rather than bad input.
    SliceOutOfBounds,

    /// A compiled font blob could not be parsed.
    ///
    /// Raised when constructing a shaping engine or reading a glyph order.
    InvalidFont,

    /// A feature or variation settings list could not be parsed.
    InvalidSetting,
}
