// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode character properties used by segmentation and line breaking.

use icu_properties::props::{BidiClass as IcuBidiClass, BidiMirrored, GeneralCategory};
use icu_properties::{
    CodePointMapData, CodePointMapDataBorrowed, CodePointSetData, CodePointSetDataBorrowed,
    PropertyNamesShort, PropertyNamesShortBorrowed,
};
use unicode_bidi::{BidiClass, BidiDataSource};

use crate::Script;

/// A source of Unicode character properties.
///
/// The [`Segmenter`](crate::Segmenter) and [`break_lines`](crate::break_lines)
/// read all character data through this trait, so an alternative Unicode
/// version (or a test double) can be substituted without touching the bidi
/// implementation.
pub trait CharProperties {
    /// The general category of `ch` (e.g. `Zs` for space separators).
    fn general_category(&self, ch: char) -> GeneralCategory;

    /// The bidirectional class of `ch`.
    fn bidi_class(&self, ch: char) -> BidiClass;

    /// Whether `ch` has the `Bidi_Mirrored` property.
    fn is_mirrored(&self, ch: char) -> bool;

    /// The script of `ch`.
    fn script(&self, ch: char) -> Script;

    /// Whether `ch` is a space separator (`Zs`), the only class the line
    /// breaker will break after.
    fn is_space(&self, ch: char) -> bool {
        self.general_category(ch) == GeneralCategory::SpaceSeparator
    }
}

impl<P: CharProperties + ?Sized> CharProperties for &P {
    fn general_category(&self, ch: char) -> GeneralCategory {
        (**self).general_category(ch)
    }

    fn bidi_class(&self, ch: char) -> BidiClass {
        (**self).bidi_class(ch)
    }

    fn is_mirrored(&self, ch: char) -> bool {
        (**self).is_mirrored(ch)
    }

    fn script(&self, ch: char) -> Script {
        (**self).script(ch)
    }

    fn is_space(&self, ch: char) -> bool {
        (**self).is_space(ch)
    }
}

/// Character properties backed by ICU4X compiled data.
#[derive(Clone, Copy)]
pub struct IcuCharProperties {
    general_category: CodePointMapDataBorrowed<'static, GeneralCategory>,
    bidi_class: CodePointMapDataBorrowed<'static, IcuBidiClass>,
    mirrored: CodePointSetDataBorrowed<'static>,
    script: CodePointMapDataBorrowed<'static, icu_properties::props::Script>,
    script_names: PropertyNamesShortBorrowed<'static, icu_properties::props::Script>,
}

impl IcuCharProperties {
    /// Creates a property source over the Unicode data compiled into ICU4X.
    pub fn new() -> Self {
        Self {
            general_category: CodePointMapData::<GeneralCategory>::new(),
            bidi_class: CodePointMapData::<IcuBidiClass>::new(),
            mirrored: CodePointSetData::new::<BidiMirrored>(),
            script: CodePointMapData::<icu_properties::props::Script>::new(),
            script_names: PropertyNamesShort::<icu_properties::props::Script>::new(),
        }
    }
}

impl Default for IcuCharProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for IcuCharProperties {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IcuCharProperties").finish_non_exhaustive()
    }
}

impl CharProperties for IcuCharProperties {
    fn general_category(&self, ch: char) -> GeneralCategory {
        self.general_category.get(ch)
    }

    fn bidi_class(&self, ch: char) -> BidiClass {
        self.bidi_class.bidi_class(ch)
    }

    fn is_mirrored(&self, ch: char) -> bool {
        self.mirrored.contains(ch)
    }

    fn script(&self, ch: char) -> Script {
        self.script_names
            .get_locale_script(self.script.get(ch))
            .and_then(|script| Script::parse(script.as_str()))
            .unwrap_or(Script::UNKNOWN)
    }
}

/// Exposes a [`CharProperties`] as the bidi class source of `unicode-bidi`.
pub(crate) struct BidiClassSource<'a, P: ?Sized>(pub(crate) &'a P);

impl<P: CharProperties + ?Sized> BidiDataSource for BidiClassSource<'_, P> {
    fn bidi_class(&self, ch: char) -> BidiClass {
        self.0.bidi_class(ch)
    }
}
