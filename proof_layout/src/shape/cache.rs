// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::FontVariation;
use crate::lru_cache::LookupKey;

pub(crate) type InstanceId = Box<[FontVariation]>;

/// Looks up a variation instance by its axis coordinates.
pub(crate) struct InstanceKey<'a>(pub(crate) &'a [FontVariation]);

impl LookupKey<InstanceId> for InstanceKey<'_> {
    fn matches(&self, stored: &InstanceId) -> bool {
        self.0 == &**stored
    }

    fn into_owned(self) -> InstanceId {
        self.0.into()
    }
}

pub(crate) type PlanId = (
    harfrust::Direction,
    harfrust::Script,
    Option<harfrust::Language>,
    Box<[harfrust::Feature]>,
    Box<[FontVariation]>,
);

pub(crate) struct PlanKey<'a> {
    direction: harfrust::Direction,
    script: harfrust::Script,
    language: Option<&'a harfrust::Language>,
    features: &'a [harfrust::Feature],
    variations: &'a [FontVariation],
}

impl<'a> PlanKey<'a> {
    pub(crate) fn new(
        direction: harfrust::Direction,
        script: harfrust::Script,
        language: Option<&'a harfrust::Language>,
        features: &'a [harfrust::Feature],
        variations: &'a [FontVariation],
    ) -> Self {
        Self {
            direction,
            script,
            language,
            features,
            variations,
        }
    }
}

impl LookupKey<PlanId> for PlanKey<'_> {
    fn matches(&self, stored: &PlanId) -> bool {
        self.direction == stored.0
            && self.script == stored.1
            && self.language == stored.2.as_ref()
            && *self.features == *stored.3
            && *self.variations == *stored.4
    }

    fn into_owned(self) -> PlanId {
        (
            self.direction,
            self.script,
            self.language.cloned(),
            self.features.into(),
            self.variations.into(),
        )
    }
}
