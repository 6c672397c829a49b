// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An ISO 15924 script tag (four ASCII letters, e.g. `Latn`, `Arab`).
///
/// Stored in canonical `Titlecase` form so that tags compare byte-for-byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script {
    raw: [u8; 4],
}

impl Script {
    /// The “common” script (`Zyyy`): punctuation, digits, spaces.
    pub const COMMON: Self = Self::from_bytes(*b"Zyyy");

    /// The “inherited” script (`Zinh`): combining marks.
    pub const INHERITED: Self = Self::from_bytes(*b"Zinh");

    /// The “unwritten” script (`Zxxx`).
    pub const UNWRITTEN: Self = Self::from_bytes(*b"Zxxx");

    /// The “unknown” script (`Zzzz`).
    pub const UNKNOWN: Self = Self::from_bytes(*b"Zzzz");

    /// Latin (`Latn`).
    pub const LATIN: Self = Self::from_bytes(*b"Latn");

    /// Arabic (`Arab`).
    pub const ARABIC: Self = Self::from_bytes(*b"Arab");

    /// Hebrew (`Hebr`).
    pub const HEBREW: Self = Self::from_bytes(*b"Hebr");

    /// Creates a `Script` from raw ISO 15924 bytes.
    ///
    /// The input must be four ASCII bytes in canonical form. This function does not validate.
    #[must_use]
    #[inline(always)]
    pub const fn from_bytes(raw: [u8; 4]) -> Self {
        Self { raw }
    }

    /// Returns the raw ISO 15924 bytes.
    #[must_use]
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.raw
    }

    /// Returns the canonical string form (e.g. `Latn`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.raw).unwrap_or("Zzzz")
    }

    /// Parses an ISO 15924 script identifier, normalizing to `Titlecase`.
    ///
    /// Returns `None` unless the input is exactly four ASCII letters.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self::from_bytes([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_lowercase(),
            bytes[2].to_ascii_lowercase(),
            bytes[3].to_ascii_lowercase(),
        ]))
    }

    /// Returns `true` for the scripts that carry no script identity of their
    /// own (common, inherited, unwritten and unknown).
    ///
    /// Characters in these scripts take the script of their neighbors during
    /// segmentation.
    pub fn is_unresolved(self) -> bool {
        matches!(
            self,
            Self::COMMON | Self::INHERITED | Self::UNWRITTEN | Self::UNKNOWN
        )
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Script").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
