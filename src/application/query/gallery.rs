// SPDX-License-Identifier: MPL-2.0
//! Gallery index built from the page markup.
//!
//! Scans element groups in a fixed order and collects their `src`
//! locators into a [`GallerySequence`]. Elements without a `src` are
//! skipped; duplicates keep their first position.

use crate::application::port::PresentationTree;
use crate::domain::gallery::GallerySequence;

/// Selectors scanned for gallery media, in order: hero slides first, then
/// feature previews.
pub const GALLERY_GROUPS: [&str; 2] = [".slideshow-slide", ".feature-gif img"];

/// Builds the gallery from `groups`, each a selector scanned in document
/// order.
#[must_use]
pub fn build_gallery(tree: &impl PresentationTree, groups: &[&str]) -> GallerySequence {
    let sources = groups.iter().map(|selector| {
        tree.query_all(selector)
            .into_iter()
            .filter_map(|node| tree.src(node))
            .map(str::to_string)
            .collect::<Vec<_>>()
    });
    let gallery = GallerySequence::from_groups(sources);
    tracing::debug!(items = gallery.len(), "gallery built");
    gallery
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaSource;
    use crate::infrastructure::{Element, Scene};

    fn locators(gallery: &GallerySequence) -> Vec<&str> {
        gallery.iter().map(MediaSource::as_str).collect()
    }

    #[test]
    fn slides_come_before_feature_media() {
        let mut scene = Scene::new();
        let root = scene.root();
        // Features first in the document, slides still lead the gallery.
        let gif = scene.append(root, Element::new("div").class("feature-gif"));
        scene.append(gif, Element::new("img").attr("src", "f.gif"));
        scene.append(root, Element::new("img").class("slideshow-slide").attr("src", "s.png"));

        let gallery = build_gallery(&scene, &GALLERY_GROUPS);
        assert_eq!(locators(&gallery), ["s.png", "f.gif"]);
    }

    #[test]
    fn shared_media_appears_once() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene.append(root, Element::new("img").class("slideshow-slide").attr("src", "a.png"));
        scene.append(root, Element::new("img").class("slideshow-slide").attr("src", "b.mp4"));
        let gif = scene.append(root, Element::new("div").class("feature-gif"));
        scene.append(gif, Element::new("img").attr("src", "b.mp4"));
        scene.append(gif, Element::new("img").attr("src", "c.png"));

        let gallery = build_gallery(&scene, &GALLERY_GROUPS);
        assert_eq!(locators(&gallery), ["a.png", "b.mp4", "c.png"]);
    }

    #[test]
    fn elements_without_src_are_skipped() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene.append(root, Element::new("img").class("slideshow-slide"));
        scene.append(root, Element::new("img").class("slideshow-slide").attr("src", "a.png"));

        let gallery = build_gallery(&scene, &GALLERY_GROUPS);
        assert_eq!(locators(&gallery), ["a.png"]);
    }

    #[test]
    fn empty_page_yields_empty_gallery() {
        let gallery = build_gallery(&Scene::new(), &GALLERY_GROUPS);
        assert!(gallery.is_empty());
    }
}
