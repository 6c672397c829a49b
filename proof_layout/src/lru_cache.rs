// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Borrowed form of a cache key.
///
/// Lookups compare against stored keys without allocating; the owned key is
/// only built when a lookup misses.
pub(crate) trait LookupKey<K> {
    fn matches(&self, stored: &K) -> bool;
    fn into_owned(self) -> K;
}

struct Slot<K, V> {
    last_used: u64,
    key: K,
    value: V,
}

/// A small least-recently-used cache with linear lookup.
///
/// Sized for a handful of shaping plans or variation instances per font.
pub(crate) struct LruCache<K, V> {
    slots: Vec<Slot<K, V>>,
    clock: u64,
    capacity: usize,
}

impl<K, V> LruCache<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            clock: 0,
            capacity: capacity.max(1),
        }
    }

    /// Returns the value cached under `key`, building it with `make` on a miss.
    ///
    /// When the cache is full, a miss replaces the least recently used slot.
    pub(crate) fn get_or_insert_with(
        &mut self,
        key: impl LookupKey<K>,
        make: impl FnOnce() -> V,
    ) -> &V {
        self.clock += 1;
        let index = match self.slots.iter().position(|slot| key.matches(&slot.key)) {
            Some(index) => index,
            None => self.insert(key.into_owned(), make()),
        };
        let slot = &mut self.slots[index];
        slot.last_used = self.clock;
        &slot.value
    }

    fn insert(&mut self, key: K, value: V) -> usize {
        let slot = Slot {
            last_used: self.clock,
            key,
            value,
        };
        if self.slots.len() < self.capacity {
            self.slots.push(slot);
            return self.slots.len() - 1;
        }
        let oldest = self
            .slots
            .iter()
            .enumerate()
            .min_by_key(|(_, slot)| slot.last_used)
            .map_or(0, |(index, _)| index);
        self.slots[oldest] = slot;
        oldest
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.len()
    }
}
