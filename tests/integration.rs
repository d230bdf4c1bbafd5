// SPDX-License-Identifier: MPL-2.0
use iced_showcase::application::controller::AutoplaySettings;
use iced_showcase::application::effects::{Viewport, REVEALED_CLASS, REVEAL_SELECTOR};
use iced_showcase::application::page::{Page, PageSettings};
use iced_showcase::application::port::{Display, NodeId, PresentationTree};
use iced_showcase::config::{self, Config};
use iced_showcase::domain::ui::{Key, SlideInterval};
use iced_showcase::infrastructure::{build_from_manifest, IntervalTimer, Scene};
use iced_showcase::manifest::PageManifest;
use iced_showcase::ui::layout::PageLayout;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const MIXED_MANIFEST: &str = r#"
[hero]
title = "Mixed"

[[slide]]
src = "a.png"
title = "Picture"

[[slide]]
src = "b.mp4"
title = "Clip"

[[feature]]
title = "Still"
media = "c.png"
"#;

fn settings(autoplay: bool, interval_ms: u64) -> PageSettings {
    PageSettings {
        autoplay: AutoplaySettings {
            interval: SlideInterval::from_millis(interval_ms),
            enabled: autoplay,
        },
        ..PageSettings::default()
    }
}

fn setup(
    manifest: &PageManifest,
    settings: &PageSettings,
) -> (Scene, IntervalTimer, Page, Instant) {
    let start = Instant::now();
    let mut scene = build_from_manifest(manifest);
    let mut timer = IntervalTimer::new(start);
    let page = Page::attach(&mut scene, &mut timer, settings);
    (scene, timer, page, start)
}

fn first(scene: &Scene, selector: &str) -> NodeId {
    scene.query_all(selector)[0]
}

fn display(scene: &Scene, node: NodeId) -> Display {
    scene.element(node).map(|e| e.display()).unwrap_or_default()
}

fn is_playing(scene: &Scene, node: NodeId) -> bool {
    scene.element(node).is_some_and(|e| e.is_playing())
}

#[test]
fn lightbox_walks_mixed_gallery() {
    let manifest = PageManifest::from_toml(MIXED_MANIFEST).expect("valid manifest");
    let (mut scene, mut timer, mut page, _) = setup(&manifest, &settings(false, 6000));
    let overlay = first(&scene, "#lightbox");
    let image = first(&scene, ".lightbox-image");
    let video = first(&scene, ".lightbox-video");

    let target = first(&scene, ".slideshow-slide");
    page.click(&mut scene, &mut timer, target);
    assert!(scene.has_class(overlay, "active"));
    assert_eq!(scene.src(image), Some("a.png"));
    assert_eq!(display(&scene, image), Display::Block);

    page.key(&mut scene, Key::ArrowRight);
    assert_eq!(display(&scene, image), Display::None);
    assert_eq!(display(&scene, video), Display::Block);
    assert_eq!(scene.src(video), Some("b.mp4"));
    assert!(is_playing(&scene, video));

    page.key(&mut scene, Key::ArrowRight);
    assert_eq!(scene.src(image), Some("c.png"));
    assert_eq!(display(&scene, image), Display::Block);
    assert_eq!(display(&scene, video), Display::None);
    assert_eq!(scene.src(video), None);
    assert!(!is_playing(&scene, video));

    page.key(&mut scene, Key::ArrowRight);
    assert_eq!(scene.src(image), Some("a.png"));

    page.key(&mut scene, Key::ArrowLeft);
    assert_eq!(scene.src(image), Some("c.png"));

    page.key(&mut scene, Key::Escape);
    assert!(!scene.has_class(overlay, "active"));
}

#[test]
fn closing_on_video_releases_it() {
    let manifest = PageManifest::from_toml(MIXED_MANIFEST).expect("valid manifest");
    let (mut scene, mut timer, mut page, _) = setup(&manifest, &settings(false, 6000));
    let video = first(&scene, ".lightbox-video");
    let clip = scene.query_all(".slideshow-slide")[1];

    page.click(&mut scene, &mut timer, clip);
    assert!(is_playing(&scene, video));

    page.key(&mut scene, Key::Escape);

    assert!(!is_playing(&scene, video));
    assert_eq!(scene.src(video), None);
}

#[test]
fn clicks_inside_overlay_content_keep_it_open() {
    let manifest = PageManifest::from_toml(MIXED_MANIFEST).expect("valid manifest");
    let (mut scene, mut timer, mut page, _) = setup(&manifest, &settings(false, 6000));
    let overlay = first(&scene, "#lightbox");
    let image = first(&scene, ".lightbox-image");
    let target = first(&scene, ".feature-gif img");
    page.click(&mut scene, &mut timer, target);
    assert_eq!(scene.src(image), Some("c.png"));

    page.click(&mut scene, &mut timer, image);
    assert!(scene.has_class(overlay, "active"));

    page.click(&mut scene, &mut timer, overlay);
    assert!(!scene.has_class(overlay, "active"));
}

#[test]
fn keys_are_ignored_while_closed() {
    let manifest = PageManifest::from_toml(MIXED_MANIFEST).expect("valid manifest");
    let (mut scene, _timer, mut page, _) = setup(&manifest, &settings(false, 6000));
    let image = first(&scene, ".lightbox-image");
    let before = scene.src(image).map(str::to_string);

    page.key(&mut scene, Key::ArrowRight);
    page.key(&mut scene, Key::Escape);

    assert_eq!(scene.src(image).map(str::to_string), before);
    assert!(!page.lightbox().is_some_and(|l| l.is_open()));
}

#[test]
fn autoplay_advances_once_per_interval() {
    let (mut scene, mut timer, mut page, start) =
        setup(&PageManifest::demo(), &settings(true, 1000));

    for handle in timer.advance_to(start + Duration::from_millis(2000)) {
        assert!(page.timer_fired(&mut scene, handle));
    }

    assert_eq!(page.slideshow().map(|s| s.current()), Some(2));
    let slides = scene.query_all(".slideshow-slide");
    let dots = scene.query_all(".slideshow-dot");
    for (index, (slide, dot)) in slides.iter().zip(&dots).enumerate() {
        assert_eq!(scene.has_class(*slide, "active"), index == 2);
        assert_eq!(scene.has_class(*dot, "active"), index == 2);
    }
}

#[test]
fn dot_click_restarts_countdown() {
    let (mut scene, mut timer, mut page, start) =
        setup(&PageManifest::demo(), &settings(true, 1000));
    let dot = scene.query_all(".slideshow-dot")[2];

    assert!(timer
        .advance_to(start + Duration::from_millis(900))
        .is_empty());
    page.click(&mut scene, &mut timer, dot);
    assert_eq!(page.slideshow().map(|s| s.current()), Some(2));

    assert!(timer
        .advance_to(start + Duration::from_millis(1800))
        .is_empty());

    let fired = timer.advance_to(start + Duration::from_millis(1900));
    assert_eq!(fired.len(), 1);
    assert!(page.timer_fired(&mut scene, fired[0]));
    assert_eq!(page.slideshow().map(|s| s.current()), Some(0));
}

#[test]
fn title_label_follows_active_slide() {
    let manifest = PageManifest::from_toml(MIXED_MANIFEST).expect("valid manifest");
    let (mut scene, mut timer, mut page, _) = setup(&manifest, &settings(false, 6000));
    let label = scene.element_by_id("slideshow-title").expect("title label");
    let dot = scene.query_all(".slideshow-dot")[1];

    page.click(&mut scene, &mut timer, dot);

    assert_eq!(
        scene.element(label).map(|e| e.text_content()),
        Some("Clip")
    );
}

#[test]
fn scrolling_to_the_bottom_reveals_every_card() {
    let (mut scene, _timer, mut page, _) = setup(&PageManifest::demo(), &settings(false, 6000));
    let layout = PageLayout::compute(&scene, 1200.0);
    let viewport = Viewport {
        scroll_top: layout.content_height() - 600.0,
        height: 600.0,
    };

    let mut revealed = Vec::new();
    let mut scroll_top = 0.0;
    while scroll_top <= viewport.scroll_top {
        revealed.extend(page.scrolled(
            &mut scene,
            Viewport {
                scroll_top,
                height: viewport.height,
            },
            |node| layout.bounds(node),
        ));
        scroll_top += 100.0;
    }
    revealed.extend(page.scrolled(&mut scene, viewport, |node| layout.bounds(node)));

    let cards = scene.query_all(REVEAL_SELECTOR);
    assert_eq!(revealed.len(), cards.len());
    assert!(page.reveal().pending().is_empty());
    for card in cards {
        assert!(scene.has_class(card, REVEALED_CLASS));
        assert_eq!(scene.computed_style(card).opacity, 1.0);
    }
}

#[test]
fn config_round_trip_drives_settings() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    let mut config = Config::default();
    config.slideshow.interval_ms = Some(2500);
    config.slideshow.autoplay = Some(false);

    let content = toml::to_string_pretty(&config).expect("serialize config");
    std::fs::write(&path, content).expect("write config");
    let loaded = config::load_from_path(&path).expect("load config");
    let settings = PageSettings::from_config(&loaded);

    assert_eq!(settings.autoplay.interval.as_millis(), 2500);
    assert!(!settings.autoplay.enabled);
}

#[test]
fn manifest_file_builds_working_page() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("page.toml");
    std::fs::write(&path, MIXED_MANIFEST).expect("write manifest");

    let manifest = PageManifest::load_from_path(&path).expect("load manifest");
    let (_scene, timer, page, _) = setup(&manifest, &PageSettings::default());

    let lightbox = page.lightbox().expect("lightbox attached");
    assert_eq!(lightbox.gallery().len(), 3);
    assert_eq!(page.slideshow().map(|s| s.len()), Some(2));
    assert_eq!(timer.active_count(), 1);
}
