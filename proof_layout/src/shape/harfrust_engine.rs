// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use super::cache::{InstanceId, InstanceKey, PlanId, PlanKey};
use super::{Direction, ShapeRequest, ShapedGlyph, ShapingEngine};
use crate::lru_cache::LruCache;
use crate::{Error, FontVariation, Script, Tag};

const MAX_CACHE_ENTRIES: usize = 16;

/// A [`ShapingEngine`] backed by HarfRust.
///
/// Borrows the compiled font for its lifetime. Shape plans and variation
/// instances are cached across calls.
pub struct HarfrustEngine<'a> {
    font: harfrust::FontRef<'a>,
    data: harfrust::ShaperData,
    instances: LruCache<InstanceId, harfrust::ShaperInstance>,
    plans: LruCache<PlanId, harfrust::ShapePlan>,
    buffer: Option<harfrust::UnicodeBuffer>,
    features: Vec<harfrust::Feature>,
}

impl<'a> HarfrustEngine<'a> {
    /// Creates an engine for font `index` of a compiled font blob (a font
    /// file or a collection).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFont`](crate::ErrorKind::InvalidFont) if
    /// the blob cannot be parsed.
    pub fn new(data: &'a [u8], index: u32) -> Result<Self, Error> {
        let font = harfrust::FontRef::from_index(data, index).map_err(Error::invalid_font)?;
        let shaper_data = harfrust::ShaperData::new(&font);
        Ok(Self {
            font,
            data: shaper_data,
            instances: LruCache::new(MAX_CACHE_ENTRIES),
            plans: LruCache::new(MAX_CACHE_ENTRIES),
            buffer: Some(harfrust::UnicodeBuffer::new()),
            features: Vec::new(),
        })
    }
}

impl fmt::Debug for HarfrustEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarfrustEngine").finish_non_exhaustive()
    }
}

impl ShapingEngine for HarfrustEngine<'_> {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> Vec<ShapedGlyph> {
        let direction = match request.direction {
            Direction::LeftToRight => harfrust::Direction::LeftToRight,
            Direction::RightToLeft => harfrust::Direction::RightToLeft,
        };
        let script = script_to_harfrust(request.script);
        let language = request
            .language
            .and_then(|language| language.parse::<harfrust::Language>().ok());
        self.features.clear();
        self.features
            .extend(request.features.iter().map(|feature| {
                harfrust::Feature::new(tag_to_harfrust(feature.tag), feature.value.into(), ..)
            }));

        let font = &self.font;
        let instance = self
            .instances
            .get_or_insert_with(InstanceKey(request.variations), || {
                harfrust::ShaperInstance::from_variations(font, variations_iter(request.variations))
            });
        let shaper = self.data.shaper(font).instance(Some(instance)).build();
        let features = &self.features;
        let plan = self.plans.get_or_insert_with(
            PlanKey::new(
                direction,
                script,
                language.as_ref(),
                features,
                request.variations,
            ),
            || harfrust::ShapePlan::new(&shaper, direction, Some(script), language.as_ref(), features),
        );

        let mut buffer = self
            .buffer
            .take()
            .unwrap_or_else(harfrust::UnicodeBuffer::new);
        buffer.clear();
        // Clusters are character indices into the request text.
        for (index, ch) in request.text.chars().enumerate() {
            buffer.add(ch, index as u32);
        }
        buffer.set_direction(direction);
        buffer.set_script(script);
        if let Some(language) = language {
            buffer.set_language(language);
        }

        let glyph_buffer = shaper.shape_with_plan(plan, buffer, features);
        let glyphs = glyph_buffer
            .glyph_infos()
            .iter()
            .zip(glyph_buffer.glyph_positions())
            .map(|(info, position)| ShapedGlyph {
                glyph_id: info.glyph_id,
                cluster: info.cluster,
                x_offset: position.x_offset,
                y_offset: position.y_offset,
                x_advance: position.x_advance,
                y_advance: position.y_advance,
            })
            .collect();
        self.buffer = Some(glyph_buffer.clear());
        glyphs
    }
}

fn tag_to_harfrust(tag: Tag) -> harfrust::Tag {
    harfrust::Tag::new(&tag.to_bytes())
}

fn script_to_harfrust(script: Script) -> harfrust::Script {
    harfrust::Script::from_iso15924_tag(harfrust::Tag::new(&script.to_bytes()))
        .unwrap_or(harfrust::script::UNKNOWN)
}

fn variations_iter(variations: &[FontVariation]) -> impl Iterator<Item = harfrust::Variation> + '_ {
    variations.iter().map(|variation| harfrust::Variation {
        tag: tag_to_harfrust(variation.tag),
        value: variation.value,
    })
}
