// SPDX-License-Identifier: MPL-2.0
//! Builds the landing page element tree from a [`PageManifest`].

use super::{Element, Scene};
use crate::application::port::NodeId;
use crate::manifest::PageManifest;

/// Section anchors shown in the navigation bar, as `(fragment, label)`.
const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#how-it-works", "How it works"),
    ("#download", "Download"),
];

/// Builds the page markup.
///
/// Slide and feature media become `img` elements whatever their type; the
/// lightbox carries both an image and a video surface.
#[must_use]
pub fn build(manifest: &PageManifest) -> Scene {
    let mut scene = Scene::new();
    let body = scene.root();

    let nav = scene.append(body, Element::new("nav").class("navbar"));
    for (href, label) in NAV_LINKS {
        scene.append(
            nav,
            Element::new("a").class("nav-link").attr("href", href).text(label),
        );
    }

    hero(&mut scene, body, manifest);
    features(&mut scene, body, manifest);
    steps(&mut scene, body, manifest);
    downloads(&mut scene, body, manifest);
    lightbox(&mut scene, body);

    scene
}

fn hero(scene: &mut Scene, body: NodeId, manifest: &PageManifest) {
    let header = scene.append(body, Element::new("header").class("hero"));
    scene.append(header, Element::new("div").class("hero-bg"));
    scene.append(
        header,
        Element::new("h1").class("hero-title").text(&manifest.hero.title),
    );
    scene.append(
        header,
        Element::new("p")
            .class("hero-tagline")
            .text(&manifest.hero.tagline),
    );

    if !manifest.slides.is_empty() {
        let slideshow = scene.append(header, Element::new("div").class("slideshow"));
        for slide in &manifest.slides {
            scene.append(
                slideshow,
                Element::new("img")
                    .class("slideshow-slide")
                    .attr("src", &slide.src)
                    .attr("alt", slide.title.as_deref().unwrap_or_default()),
            );
        }

        let dots = scene.append(slideshow, Element::new("div").class("slideshow-dots"));
        for (index, slide) in manifest.slides.iter().enumerate() {
            let mut dot = Element::new("button")
                .class("slideshow-dot")
                .attr("data-index", &index.to_string());
            if let Some(title) = &slide.title {
                dot = dot.attr("data-title", title);
            }
            scene.append(dots, dot);
        }

        let first_title = manifest
            .slides
            .first()
            .and_then(|s| s.title.as_deref())
            .unwrap_or_default();
        scene.append(
            slideshow,
            Element::new("p")
                .id("slideshow-title")
                .class("slideshow-title")
                .text(first_title),
        );
    }

    scene.append(
        header,
        Element::new("a")
            .class("btn")
            .attr("href", "#download")
            .text("Get it"),
    );
}

fn features(scene: &mut Scene, body: NodeId, manifest: &PageManifest) {
    let section = scene.append(body, Element::new("section").id("features"));
    scene.append(section, Element::new("h2").text("Features"));
    let grid = scene.append(section, Element::new("div").class("features-grid"));
    for feature in &manifest.features {
        let card = scene.append(grid, Element::new("div").class("feature-card"));
        if let Some(media) = &feature.media {
            let frame = scene.append(card, Element::new("div").class("feature-gif"));
            scene.append(
                frame,
                Element::new("img").attr("src", media).attr("alt", &feature.title),
            );
        }
        scene.append(card, Element::new("h3").text(&feature.title));
        scene.append(card, Element::new("p").text(&feature.body));
    }
}

fn steps(scene: &mut Scene, body: NodeId, manifest: &PageManifest) {
    let section = scene.append(body, Element::new("section").id("how-it-works"));
    scene.append(section, Element::new("h2").text("How it works"));
    let list = scene.append(section, Element::new("div").class("steps"));
    for (index, step) in manifest.steps.iter().enumerate() {
        let item = scene.append(list, Element::new("div").class("step"));
        scene.append(
            item,
            Element::new("span")
                .class("step-number")
                .text(&(index + 1).to_string()),
        );
        scene.append(item, Element::new("h3").text(&step.title));
        scene.append(item, Element::new("p").text(&step.body));
    }
}

fn downloads(scene: &mut Scene, body: NodeId, manifest: &PageManifest) {
    let section = scene.append(body, Element::new("section").id("download"));
    scene.append(section, Element::new("h2").text("Download"));
    let cards = scene.append(section, Element::new("div").class("download-cards"));
    for download in &manifest.downloads {
        let mut card = Element::new("a").class("download-card");
        if let Some(href) = &download.href {
            card = card.attr("href", href);
        }
        let card = scene.append(cards, card);
        scene.append(card, Element::new("h3").text(&download.title));
        scene.append(card, Element::new("p").text(&download.body));
    }
}

fn lightbox(scene: &mut Scene, body: NodeId) {
    let overlay = scene.append(body, Element::new("div").id("lightbox").class("lightbox"));
    scene.append(
        overlay,
        Element::new("button").class("lightbox-prev").text("\u{2039}"),
    );
    scene.append(overlay, Element::new("img").class("lightbox-image"));
    scene.append(
        overlay,
        Element::new("video").class("lightbox-video").hidden(),
    );
    scene.append(
        overlay,
        Element::new("button").class("lightbox-next").text("\u{203a}"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{Display, PresentationTree};
    use crate::manifest::{Feature, Slide};

    fn manifest() -> PageManifest {
        PageManifest {
            slides: vec![
                Slide {
                    src: "s1.png".into(),
                    title: Some("One".into()),
                },
                Slide {
                    src: "s2.mp4".into(),
                    title: None,
                },
            ],
            features: vec![
                Feature {
                    title: "A".into(),
                    body: String::new(),
                    media: Some("s2.mp4".into()),
                },
                Feature {
                    title: "B".into(),
                    body: String::new(),
                    media: None,
                },
            ],
            ..PageManifest::default()
        }
    }

    #[test]
    fn slides_and_dots_are_indexed() {
        let scene = build(&manifest());
        let slides = scene.query_all(".slideshow-slide");
        let dots = scene.query_all(".slideshow-dot");
        assert_eq!(slides.len(), 2);
        assert_eq!(dots.len(), 2);
        assert_eq!(scene.src(slides[1]), Some("s2.mp4"));
        assert_eq!(scene.attribute(dots[1], "data-index"), Some("1"));
        assert_eq!(scene.attribute(dots[0], "data-title"), Some("One"));
        assert_eq!(scene.attribute(dots[1], "data-title"), None);
    }

    #[test]
    fn feature_media_sits_under_feature_gif() {
        let scene = build(&manifest());
        let media = scene.query_all(".feature-gif img");
        assert_eq!(media.len(), 1);
        assert_eq!(scene.src(media[0]), Some("s2.mp4"));
        assert_eq!(scene.query_all(".feature-card").len(), 2);
    }

    #[test]
    fn lightbox_markup_is_complete() {
        let scene = build(&manifest());
        let overlay = scene.element_by_id("lightbox").expect("lightbox");
        assert_eq!(scene.query_all_within(overlay, "img").len(), 1);
        assert_eq!(scene.query_all_within(overlay, ".lightbox-prev").len(), 1);
        assert_eq!(scene.query_all_within(overlay, ".lightbox-next").len(), 1);
        let video = scene.query_all_within(overlay, "video");
        assert_eq!(video.len(), 1);
        assert_eq!(scene.element(video[0]).map(Element::display), Some(Display::None));
    }

    #[test]
    fn empty_manifest_has_no_slideshow() {
        let scene = build(&PageManifest::default());
        assert!(scene.query_all(".slideshow-slide").is_empty());
        assert!(scene.element_by_id("slideshow-title").is_none());
        assert!(scene.element_by_id("lightbox").is_some());
    }

    #[test]
    fn nav_links_target_existing_sections() {
        let scene = build(&PageManifest::demo());
        for link in scene.query_all("a[href^=\"#\"]") {
            let href = scene.attribute(link, "href").unwrap_or_default();
            assert!(
                scene.element_by_id(&href[1..]).is_some(),
                "dangling anchor {href}"
            );
        }
    }
}
