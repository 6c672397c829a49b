// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::GlyphName;

/// Maps numeric glyph identifiers to glyph names, and back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphOrder {
    names: Vec<GlyphName>,
    /// First identifier of each name.
    ids: HashMap<GlyphName, u32>,
}

impl GlyphOrder {
    /// Creates a glyph order where glyph `i` is the `i`th name.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GlyphName>,
    {
        Self::from_vec(names.into_iter().map(Into::into).collect())
    }

    fn from_vec(names: Vec<GlyphName>) -> Self {
        let mut ids = HashMap::with_capacity(names.len());
        for (id, name) in (0_u32..).zip(&names) {
            ids.entry(name.clone()).or_insert(id);
        }
        Self { names, ids }
    }

    /// Reads the glyph order of font `index` in a compiled font blob.
    ///
    /// Names come from the `post` table. Glyphs it does not name, or every
    /// glyph when the table is missing, get `glyphNNNNN` names.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFont`](crate::ErrorKind::InvalidFont) if
    /// the blob or its `maxp` table cannot be read.
    #[cfg(feature = "harfrust")]
    pub fn from_font_data(data: &[u8], index: u32) -> Result<Self, crate::Error> {
        use read_fonts::types::GlyphId16;
        use read_fonts::{FontRef, TableProvider};

        let font = FontRef::from_index(data, index).map_err(crate::Error::invalid_font)?;
        let num_glyphs = font.maxp().map_err(crate::Error::invalid_font)?.num_glyphs();
        let post = font.post().ok();
        if post.is_none() {
            log::debug!("font has no post table, using generated glyph names");
        }
        let names = (0..num_glyphs)
            .map(|id| {
                post.as_ref()
                    .and_then(|post| post.glyph_name(GlyphId16::new(id)))
                    .map_or_else(|| fallback_name(id.into()), GlyphName::from)
            })
            .collect();
        Ok(Self::from_vec(names))
    }

    /// The name of glyph `id`, if the font has such a glyph.
    pub fn get(&self, id: u32) -> Option<&GlyphName> {
        self.names.get(usize::try_from(id).ok()?)
    }

    /// The name of glyph `id`, or a generated `glyphNNNNN` name for
    /// identifiers outside the glyph order.
    pub fn name(&self, id: u32) -> GlyphName {
        self.get(id).cloned().unwrap_or_else(|| fallback_name(id))
    }

    /// The identifier of the glyph named `name`.
    ///
    /// If several glyphs share the name, the lowest identifier wins.
    pub fn id(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    /// Returns `true` if some glyph is named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// The number of glyphs.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the glyph order is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates the names in glyph identifier order.
    pub fn names(&self) -> impl Iterator<Item = &GlyphName> + '_ {
        self.names.iter()
    }
}

fn fallback_name(id: u32) -> GlyphName {
    format!("glyph{id:05}").into()
}
