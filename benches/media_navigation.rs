// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery and lightbox operations.
//!
//! Measures the performance of:
//! - Gallery construction (selector queries over the page tree)
//! - Lightbox navigation (next/previous, image and video surfaces)
//! - Full click dispatch (bubbling through the page wiring)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_showcase::application::page::{Page, PageSettings};
use iced_showcase::application::port::PresentationTree;
use iced_showcase::application::query::{build_gallery, GALLERY_GROUPS};
use iced_showcase::domain::ui::Key;
use iced_showcase::infrastructure::{build_from_manifest, IntervalTimer, Scene};
use iced_showcase::manifest::{Feature, PageManifest, Slide};
use std::hint::black_box;
use std::time::Instant;

/// Demo page padded with extra slides and features so queries have work
/// to do.
fn large_manifest() -> PageManifest {
    let mut manifest = PageManifest::demo();
    for index in 0..200 {
        let ext = if index % 5 == 0 { "mp4" } else { "png" };
        manifest.slides.push(Slide {
            src: format!("media/slide-{index}.{ext}"),
            title: Some(format!("Slide {index}")),
        });
        manifest.features.push(Feature {
            title: format!("Feature {index}"),
            body: String::new(),
            media: Some(format!("media/feature-{index}.gif")),
        });
    }
    manifest
}

fn attached() -> (Scene, IntervalTimer, Page) {
    let mut scene = build_from_manifest(&large_manifest());
    let mut timer = IntervalTimer::new(Instant::now());
    let page = Page::attach(&mut scene, &mut timer, &PageSettings::default());
    (scene, timer, page)
}

fn bench_build_gallery(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let scene = build_from_manifest(&large_manifest());

    group.bench_function("build_gallery", |b| {
        b.iter(|| black_box(build_gallery(&scene, &GALLERY_GROUPS)));
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let (mut scene, mut timer, mut page) = attached();
    let slide = scene.query_all(".slideshow-slide")[0];
    page.click(&mut scene, &mut timer, slide);

    group.bench_function("navigate_next", |b| {
        b.iter(|| {
            page.key(&mut scene, Key::ArrowRight);
            black_box(page.lightbox().and_then(|l| l.current_index()));
        });
    });

    group.bench_function("navigate_previous", |b| {
        b.iter(|| {
            page.key(&mut scene, Key::ArrowLeft);
            black_box(page.lightbox().and_then(|l| l.current_index()));
        });
    });

    group.finish();
}

fn bench_click_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let (mut scene, mut timer, mut page) = attached();
    let media = scene.query_all(".feature-gif img");
    let last = media[media.len() - 1];

    group.bench_function("open_and_close", |b| {
        b.iter(|| {
            page.click(&mut scene, &mut timer, last);
            page.key(&mut scene, Key::Escape);
            black_box(&page);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_gallery,
    bench_navigate,
    bench_click_dispatch
);
criterion_main!(benches);
