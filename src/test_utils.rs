// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Re-exports the `approx` assertion macros for float comparison (pixel
//! offsets, opacities) and builds the demo page for controller tests.

pub use approx::assert_abs_diff_eq;

use crate::application::page::{Page, PageSettings};
use crate::infrastructure::{build_from_manifest, IntervalTimer, Scene};
use crate::manifest::PageManifest;
use std::time::Instant;

/// Demo page attached with default settings, plus its timer and start
/// instant.
pub fn demo_page() -> (Scene, IntervalTimer, Page, Instant) {
    let start = Instant::now();
    let mut scene = build_from_manifest(&PageManifest::demo());
    let mut timer = IntervalTimer::new(start);
    let page = Page::attach(&mut scene, &mut timer, &PageSettings::default());
    (scene, timer, page, start)
}
