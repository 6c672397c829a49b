// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Error;

/// A 4-byte OpenType tag (for example `wght`, `liga`, `fa  `).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// Creates a tag from 4 bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Returns this tag as 4 bytes.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parses a tag from a 1 to 4 character ASCII string, padding with spaces.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes.len() > 4 {
            return None;
        }
        if !bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            return None;
        }
        let mut raw = [b' '; 4];
        raw[..bytes.len()].copy_from_slice(bytes);
        Some(Self::from_bytes(raw))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        let s = core::str::from_utf8(&bytes).unwrap_or("????");
        f.write_str(s)
    }
}

/// A single OpenType setting (tag + value).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Setting<T> {
    /// The tag that identifies the setting.
    pub tag: Tag,
    /// The value for the setting.
    pub value: T,
}

impl<T> Setting<T> {
    /// Creates a new setting.
    pub const fn new(tag: Tag, value: T) -> Self {
        Self { tag, value }
    }
}

/// Toggles an OpenType layout feature on or off.
pub type FontFeature = Setting<bool>;

/// Sets a variation axis coordinate, in user-space units.
pub type FontVariation = Setting<f32>;

impl Setting<bool> {
    /// Parses a comma separated list of feature toggles in the CSS
    /// `font-feature-settings` style, e.g. `"'liga' off, 'kern', 'ss01' 1"`.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, Error> {
        ParseList::new(s)
            .map(|item| {
                let (pos, tag, value) = item.map_err(|pos| Error::invalid_setting(s, pos))?;
                let value = match value {
                    "on" | "" | "1" => true,
                    "off" | "0" => false,
                    _ => return Err(Error::invalid_setting(s, pos)),
                };
                Ok(Self { tag, value })
            })
            .collect()
    }
}

impl Setting<f32> {
    /// Parses a comma separated list of axis coordinates in the CSS
    /// `font-variation-settings` style, e.g. `"'wght' 700, 'wdth' 75.5"`.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, Error> {
        ParseList::new(s)
            .map(|item| {
                let (pos, tag, value) = item.map_err(|pos| Error::invalid_setting(s, pos))?;
                let value = value
                    .parse::<f32>()
                    .map_err(|_| Error::invalid_setting(s, pos))?;
                Ok(Self { tag, value })
            })
            .collect()
    }
}

/// Splits a settings list into `(position, tag, value)` entries, yielding
/// `Err(position)` on the first malformed entry and stopping afterwards.
struct ParseList<'a> {
    source: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> ParseList<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            failed: false,
        }
    }

    fn skip_while(&mut self, f: impl Fn(u8) -> bool) {
        while self.pos < self.source.len() && f(self.source[self.pos]) {
            self.pos += 1;
        }
    }

    fn entry(&mut self) -> Result<(usize, Tag, &'a str), usize> {
        let quote = self.source[self.pos];
        if quote != b'"' && quote != b'\'' {
            return Err(self.pos);
        }
        self.pos += 1;
        let tag_start = self.pos;
        self.skip_while(|ch| ch != quote);
        if self.pos >= self.source.len() {
            return Err(tag_start);
        }
        let tag = core::str::from_utf8(&self.source[tag_start..self.pos])
            .ok()
            .filter(|tag| tag.len() == 4)
            .and_then(Tag::parse)
            .ok_or(tag_start)?;
        self.pos += 1;
        self.skip_while(|ch| ch.is_ascii_whitespace());
        let value_start = self.pos;
        self.skip_while(|ch| ch != b',');
        let value = core::str::from_utf8(&self.source[value_start..self.pos])
            .map_err(|_| value_start)?
            .trim();
        Ok((value_start, tag, value))
    }
}

impl<'a> Iterator for ParseList<'a> {
    type Item = Result<(usize, Tag, &'a str), usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.skip_while(|ch| ch.is_ascii_whitespace() || ch == b',');
        if self.pos >= self.source.len() {
            return None;
        }
        let entry = self.entry();
        self.failed = entry.is_err();
        Some(entry)
    }
}
