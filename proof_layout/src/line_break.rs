// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking over shaped runs.

use core::mem;

use crate::{CharProperties, GlyphRun};

/// Breaks runs, given in logical order, into lines no wider than `line_width`.
///
/// Runs that fit are placed whole. A run that overflows the current line is
/// split after the last space character whose glyphs still fit. Without such
/// a space the run moves to the next line, or, if it is the first thing on
/// its line, is split after as many glyphs as fit.
///
/// If not even one glyph of a run fits on an empty line, breaking stops and
/// the lines produced so far are returned.
///
/// Splitting a right-to-left run keeps the logically earlier glyphs on the
/// current line. Runs within a returned line remain in logical order.
pub fn break_lines<P: CharProperties>(
    runs: &[GlyphRun],
    line_width: f32,
    properties: &P,
) -> Vec<Vec<GlyphRun>> {
    let mut pending: Vec<GlyphRun> = runs.iter().rev().cloned().collect();
    let mut lines = Vec::new();
    let mut line: Vec<GlyphRun> = Vec::new();
    let mut line_advance = 0.0_f32;

    while let Some(run) = pending.pop() {
        let run_width = run.width();
        if line_advance + run_width <= line_width {
            line_advance += run_width;
            line.push(run);
            continue;
        }

        let available = line_width - line_advance;
        let split = match space_break(&run, available, properties) {
            Some(split) => {
                log::trace!("breaking {:?} after a space at glyph {split}", run.segment().text());
                split
            }
            None if !line.is_empty() => {
                log::trace!("moving {:?} to the next line", run.segment().text());
                pending.push(run);
                lines.push(mem::take(&mut line));
                line_advance = 0.0;
                continue;
            }
            None => {
                let fitting = fitting_glyphs(&run, available);
                if fitting == 0 {
                    log::warn!(
                        "glyph in {:?} is wider than the line width {line_width}, stopping",
                        run.segment().text()
                    );
                    return lines;
                }
                log::trace!(
                    "no space in {:?}, breaking after {fitting} glyphs",
                    run.segment().text()
                );
                if run.is_rtl() {
                    run.len() - fitting
                } else {
                    fitting
                }
            }
        };

        let (earlier, later) = split_logical(&run, split);
        line.push(earlier);
        lines.push(mem::take(&mut line));
        line_advance = 0.0;
        pending.push(later);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Counts the glyphs, in logical order, whose advances fit in `available`.
fn fitting_glyphs(run: &GlyphRun, available: f32) -> usize {
    let widths = run
        .advances()
        .iter()
        .map(|advance| advance.x.unsigned_abs() as f32);
    let mut total = 0.0;
    let fits = |width: &f32| {
        total += *width;
        total <= available
    };
    if run.is_rtl() {
        widths.rev().take_while(fits).count()
    } else {
        widths.take_while(fits).count()
    }
}

/// Finds the visual glyph index at which to split `run` after its last
/// fitting space character.
///
/// A space at the very start of the run is not a break opportunity.
fn space_break<P: CharProperties>(run: &GlyphRun, available: f32, properties: &P) -> Option<usize> {
    let len = run.len();
    let clusters = run.clusters();
    let fitting = fitting_glyphs(run, available);
    // Characters before the first glyph that does not fit.
    let fitting_chars = if fitting == len {
        run.segment().char_len()
    } else if run.is_rtl() {
        clusters[len - 1 - fitting] as usize
    } else {
        clusters[fitting] as usize
    };

    let space = run
        .segment()
        .text()
        .chars()
        .take(fitting_chars)
        .enumerate()
        .filter(|&(index, ch)| index > 0 && properties.is_space(ch))
        .map(|(index, _)| index)
        .last()?;
    let break_char = (space + 1) as u32;

    let split = if run.is_rtl() {
        clusters
            .iter()
            .take_while(|&&cluster| cluster >= break_char)
            .count()
    } else {
        clusters
            .iter()
            .position(|&cluster| cluster >= break_char)
            .unwrap_or(len)
    };
    (split != 0 && split != len).then_some(split)
}

/// Splits `run` at visual index `split` into `(logically earlier, logically later)`.
fn split_logical(run: &GlyphRun, split: usize) -> (GlyphRun, GlyphRun) {
    let (left, right) = run.split_at(split);
    if run.is_rtl() {
        (right, left)
    } else {
        (left, right)
    }
}
