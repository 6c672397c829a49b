// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::{FakeEngine, shape_text};
use crate::{ErrorKind, GlyphRun};

fn hello() -> GlyphRun {
    let mut runs = shape_text("Hello world example", FakeEngine::new(500));
    assert_eq!(runs.len(), 1, "expected a single Latin run");
    runs.remove(0)
}

#[test]
fn slice_maps_back_to_text() {
    let run = hello();
    assert_eq!(run.len(), 19);
    let world = run.slice(6, 11).unwrap();
    assert_eq!(world.len(), 5);
    assert_eq!(world.segment().text(), "world");
    assert_eq!(world.segment().start_index(), 6);
    assert_eq!(world.clusters(), &[0, 1, 2, 3, 4]);
    assert_eq!(world.glyphs()[0], "uni0077");
    assert_eq!(world.width(), 2500.0);
}

#[test]
fn nested_slices_resolve_against_root() {
    let run = hello();
    let tail = run.slice(6, 19).unwrap();
    assert_eq!(tail.segment().text(), "world example");
    let world = tail.slice(0, 5).unwrap();
    assert_eq!(world, run.slice(6, 11).unwrap());
    let orl = world.slice(1, 4).unwrap();
    assert_eq!(orl.segment().text(), "orl");
    assert_eq!(orl.segment().start_index(), 7);
    assert_eq!(orl.clusters(), &[0, 1, 2]);
}

#[test]
fn full_slice_is_equal() {
    let run = hello();
    assert_eq!(run.slice(0, run.len()).unwrap(), run);
    for (start, end) in [(0, 0), (3, 9), (18, 19)] {
        assert_eq!(run.slice(start, end).unwrap().len(), end - start);
    }
}

#[test]
fn out_of_bounds_slices_fail() {
    let run = hello();
    let err = run.slice(4, 20).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SliceOutOfBounds);
    assert_eq!((err.start(), err.end(), err.len()), (4, 20, 19));

    let err = run.slice(5, 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SliceOutOfBounds);

    let world = run.slice(6, 11).unwrap();
    assert_eq!(world.slice(0, 6).unwrap_err().len(), 5);
}
