// SPDX-License-Identifier: MPL-2.0
//! Page wiring.
//!
//! [`Page::attach`] runs once against a freshly built tree: it sets up the
//! scroll effects, builds the gallery and attaches the controllers. The
//! host then forwards clicks, key presses, timer fires and scroll changes.
//! Every feature whose markup is missing is skipped on its own.

use crate::application::controller::{AutoplaySettings, LightboxController, SlideshowController};
use crate::application::effects::{self, Bounds, Parallax, RevealTracker, Viewport};
use crate::application::events::{bubble_path, ClickEvent};
use crate::application::port::{Cursor, NodeId, PresentationTree, Style, Timer, TimerHandle};
use crate::application::query::{build_gallery, GALLERY_GROUPS};
use crate::config::Config;
use crate::domain::ui::{Key, ParallaxFactor};
use std::time::Duration;

/// Selector of in-page links scrolled to on click.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Tunables resolved from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSettings {
    pub autoplay: AutoplaySettings,
    pub parallax: ParallaxFactor,
    pub stagger_step: Duration,
    pub reveal_threshold: f32,
}

impl PageSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            autoplay: AutoplaySettings {
                interval: config.slide_interval(),
                enabled: config.autoplay(),
            },
            parallax: config.parallax_factor(),
            stagger_step: config.stagger_step(),
            reveal_threshold: config.reveal_threshold(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// The interactive page: every controller and effect bound to one tree.
#[derive(Debug, Clone)]
pub struct Page {
    lightbox: Option<LightboxController>,
    slideshow: Option<SlideshowController>,
    parallax: Option<Parallax>,
    reveal: RevealTracker,
    anchors: Vec<NodeId>,
}

impl Page {
    /// Wires the page to `tree`, starting the slideshow timer on `timer`.
    pub fn attach(
        tree: &mut impl PresentationTree,
        timer: &mut impl Timer,
        settings: &PageSettings,
    ) -> Self {
        let parallax = Parallax::attach(tree, settings.parallax);
        let reveal = RevealTracker::attach(tree, settings.reveal_threshold);
        effects::apply_stagger(tree, settings.stagger_step);

        let gallery = build_gallery(tree, &GALLERY_GROUPS);
        let mut triggers = Vec::new();
        for selector in GALLERY_GROUPS {
            triggers.extend(tree.query_all(selector));
        }
        for slide in tree.query_all(GALLERY_GROUPS[0]) {
            tree.set_style(slide, Style::Cursor(Cursor::Pointer));
        }
        let lightbox = LightboxController::attach(tree, gallery, triggers);
        let slideshow = SlideshowController::attach(tree, timer, settings.autoplay);
        let anchors = tree.query_all(ANCHOR_SELECTOR);

        tracing::debug!(
            lightbox = lightbox.is_some(),
            slides = slideshow.as_ref().map_or(0, SlideshowController::len),
            anchors = anchors.len(),
            "page attached"
        );

        Self {
            lightbox,
            slideshow,
            parallax,
            reveal,
            anchors,
        }
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&LightboxController> {
        self.lightbox.as_ref()
    }

    #[must_use]
    pub fn slideshow(&self) -> Option<&SlideshowController> {
        self.slideshow.as_ref()
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Dispatches a click on `target`, bubbling it to the root.
    ///
    /// Returns the element to scroll to when an in-page link was clicked.
    pub fn click(
        &mut self,
        tree: &mut impl PresentationTree,
        timer: &mut impl Timer,
        target: NodeId,
    ) -> Option<NodeId> {
        let mut event = ClickEvent::new(target);
        let mut scroll_to = None;

        for node in bubble_path(tree, target) {
            if scroll_to.is_none() && self.anchors.contains(&node) {
                let href = tree.attribute(node, "href").map(str::to_string);
                scroll_to = href.and_then(|href| effects::resolve_anchor(&*tree, &href));
            }
            if let Some(lightbox) = self.lightbox.as_mut() {
                lightbox.on_click(tree, node, &mut event);
            }
            if let Some(slideshow) = self.slideshow.as_mut() {
                slideshow.on_click(tree, timer, node, &mut event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }

        scroll_to
    }

    pub fn key(&mut self, tree: &mut impl PresentationTree, key: Key) {
        if let Some(lightbox) = self.lightbox.as_mut() {
            lightbox.on_key(tree, key);
        }
    }

    /// Forwards a timer fire. Returns `true` when some controller owned it.
    pub fn timer_fired(&mut self, tree: &mut impl PresentationTree, handle: TimerHandle) -> bool {
        self.slideshow
            .as_mut()
            .is_some_and(|slideshow| slideshow.on_timer(tree, handle))
    }

    /// Applies scroll effects for the new viewport. Returns the elements
    /// revealed by this change.
    pub fn scrolled(
        &mut self,
        tree: &mut impl PresentationTree,
        viewport: Viewport,
        bounds: impl Fn(NodeId) -> Option<Bounds>,
    ) -> Vec<NodeId> {
        if let Some(parallax) = &self.parallax {
            parallax.on_scroll(tree, viewport.scroll_top, viewport.height);
        }
        self.reveal.update(tree, viewport, bounds)
    }
}
