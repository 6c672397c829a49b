// Copyright 2025 the Proof Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_glyph_run;
mod test_paragraph;
mod utils;
