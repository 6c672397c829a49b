// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::{BaseDirection, Segment};

/// Reorders items from logical to visual (left-to-right) order.
///
/// Consecutive items are grouped by whether `is_rtl` matches the paragraph
/// direction. Groups running with the paragraph keep their order, groups
/// running against it are reversed, and for a right-to-left paragraph the
/// whole sequence is then reversed.
///
/// The result is a permutation of `items`.
pub fn reorder_visual<T: Clone>(
    items: &[T],
    base_is_rtl: bool,
    is_rtl: impl Fn(&T) -> bool,
) -> Vec<T> {
    let mut visual = Vec::with_capacity(items.len());
    let mut group: SmallVec<[&T; 8]> = SmallVec::new();
    let mut group_with_base = true;
    for item in items {
        let with_base = is_rtl(item) == base_is_rtl;
        if with_base != group_with_base && !group.is_empty() {
            flush(&mut visual, &mut group, group_with_base);
        }
        group_with_base = with_base;
        group.push(item);
    }
    flush(&mut visual, &mut group, group_with_base);
    if base_is_rtl {
        visual.reverse();
    }
    visual
}

fn flush<T: Clone>(visual: &mut Vec<T>, group: &mut SmallVec<[&T; 8]>, with_base: bool) {
    if with_base {
        visual.extend(group.drain(..).cloned());
    } else {
        visual.extend(group.drain(..).rev().cloned());
    }
}

/// Reorders segments from logical to visual order for a paragraph with the
/// given base direction.
pub fn reorder_segments(segments: &[Segment], base: BaseDirection) -> Vec<Segment> {
    reorder_visual(segments, base.is_rtl(), Segment::is_rtl)
}
