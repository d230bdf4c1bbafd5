// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven page effects.
//!
//! - [`Parallax`]: moves the hero background slower than the content
//! - [`RevealTracker`]: fades cards in the first time they scroll into view
//! - [`apply_stagger`]: offsets transition delays of grid items
//! - [`resolve_anchor`]: maps `#fragment` links to their target element
//!
//! Geometry comes from whoever lays the page out; these types only do the
//! arithmetic and the tree updates.

use crate::application::port::{NodeId, PresentationTree, Style};
use crate::config::{REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN_BOTTOM, REVEAL_TRANSITION_MS};
use crate::domain::ui::ParallaxFactor;
use std::time::Duration;

pub const HERO_BACKGROUND_SELECTOR: &str = ".hero-bg";
pub const REVEAL_SELECTOR: &str = ".feature-card, .step, .download-card";
pub const STAGGER_CONTAINER_SELECTOR: &str = ".features-grid, .download-cards";
pub const STAGGER_ITEM_SELECTOR: &str = ".feature-card, .download-card";

/// Class added once an element has been revealed.
pub const REVEALED_CLASS: &str = "animate-in";

/// Vertical extent of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Visible window over the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset from the top of the page.
    pub scroll_top: f32,
    pub height: f32,
}

// =============================================================================
// Parallax
// =============================================================================

/// Background offset for a scroll position.
///
/// Returns `None` once the hero has scrolled out (`scrolled >= viewport
/// height`): the last applied offset stays in place.
#[must_use]
pub fn parallax_offset(scrolled: f32, viewport_height: f32, factor: ParallaxFactor) -> Option<f32> {
    (scrolled < viewport_height).then(|| scrolled * factor.value())
}

/// Hero background parallax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    background: NodeId,
    factor: ParallaxFactor,
}

impl Parallax {
    /// Returns `None` when the page has no hero background.
    pub fn attach(tree: &impl PresentationTree, factor: ParallaxFactor) -> Option<Self> {
        tree.query_all(HERO_BACKGROUND_SELECTOR)
            .first()
            .map(|&background| Self { background, factor })
    }

    pub fn on_scroll(&self, tree: &mut impl PresentationTree, scrolled: f32, viewport_height: f32) {
        if let Some(offset) = parallax_offset(scrolled, viewport_height, self.factor) {
            tree.set_style(self.background, Style::TranslateY(offset));
        }
    }
}

// =============================================================================
// Stagger
// =============================================================================

/// Transition delay of the `index`-th item of a grid.
#[must_use]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Gives the items of every grid container increasing transition delays,
/// restarting from zero in each container.
pub fn apply_stagger(tree: &mut impl PresentationTree, step: Duration) {
    for grid in tree.query_all(STAGGER_CONTAINER_SELECTOR) {
        for (index, item) in tree
            .query_all_within(grid, STAGGER_ITEM_SELECTOR)
            .into_iter()
            .enumerate()
        {
            tree.set_style(item, Style::TransitionDelay(stagger_delay(index, step)));
        }
    }
}

// =============================================================================
// Reveal
// =============================================================================

/// Share of `bounds` inside the viewport shrunk by the bottom root margin.
#[must_use]
pub fn visible_ratio(bounds: Bounds, viewport: Viewport) -> f32 {
    let root_top = viewport.scroll_top;
    let root_bottom = viewport.scroll_top + (viewport.height - REVEAL_ROOT_MARGIN_BOTTOM).max(0.0);

    if bounds.height <= 0.0 {
        let inside = bounds.top >= root_top && bounds.top <= root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let overlap = bounds.bottom().min(root_bottom) - bounds.top.max(root_top);
    (overlap / bounds.height).clamp(0.0, 1.0)
}

/// One-shot reveal of cards as they enter the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    pending: Vec<NodeId>,
    threshold: f32,
}

impl RevealTracker {
    /// Hides every revealable element and starts observing it.
    pub fn attach(tree: &mut impl PresentationTree, threshold: f32) -> Self {
        let pending = tree.query_all(REVEAL_SELECTOR);
        for &node in &pending {
            tree.set_style(node, Style::Opacity(0.0));
            tree.set_style(node, Style::TranslateY(REVEAL_OFFSET_PX));
            tree.set_style(
                node,
                Style::TransitionDuration(Duration::from_millis(REVEAL_TRANSITION_MS)),
            );
        }
        tree.insert_rule(
            REVEALED_CLASS,
            &[Style::Opacity(1.0), Style::TranslateY(0.0)],
        );
        Self {
            pending,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> &[NodeId] {
        &self.pending
    }

    /// Reveals the observed elements that are now visible enough and stops
    /// observing them. Elements `bounds` knows nothing about stay pending.
    pub fn update(
        &mut self,
        tree: &mut impl PresentationTree,
        viewport: Viewport,
        bounds: impl Fn(NodeId) -> Option<Bounds>,
    ) -> Vec<NodeId> {
        let threshold = self.threshold;
        let (revealed, pending): (Vec<NodeId>, Vec<NodeId>) =
            self.pending.iter().copied().partition(|&node| {
                bounds(node).is_some_and(|b| {
                    let ratio = visible_ratio(b, viewport);
                    ratio > 0.0 && ratio >= threshold
                })
            });
        self.pending = pending;
        for &node in &revealed {
            tree.add_class(node, REVEALED_CLASS);
        }
        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), left = self.pending.len(), "revealed");
        }
        revealed
    }
}

// =============================================================================
// Anchors
// =============================================================================

/// Target of an in-page link. Only `#id` fragments naming an existing
/// element resolve.
pub fn resolve_anchor(tree: &impl PresentationTree, href: &str) -> Option<NodeId> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    tree.element_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{Element, Scene};
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn parallax_follows_scroll_until_viewport_height() {
        let factor = ParallaxFactor::default();
        assert_eq!(parallax_offset(0.0, 800.0, factor), Some(0.0));
        assert_abs_diff_eq!(
            parallax_offset(100.0, 800.0, factor).unwrap_or_default(),
            30.0,
            epsilon = 1e-4
        );
        assert_eq!(parallax_offset(800.0, 800.0, factor), None);
        assert_eq!(parallax_offset(1200.0, 800.0, factor), None);
    }

    #[test]
    fn parallax_keeps_last_offset_past_the_hero() {
        let mut scene = Scene::new();
        let root = scene.root();
        let bg = scene.append(root, Element::new("div").class("hero-bg"));
        let parallax = Parallax::attach(&scene, ParallaxFactor::new(0.5)).expect("hero bg");

        parallax.on_scroll(&mut scene, 200.0, 600.0);
        parallax.on_scroll(&mut scene, 900.0, 600.0);

        assert_abs_diff_eq!(scene.computed_style(bg).translate_y, 100.0);
    }

    #[test]
    fn parallax_needs_a_background() {
        assert!(Parallax::attach(&Scene::new(), ParallaxFactor::default()).is_none());
    }

    #[test]
    fn stagger_restarts_per_grid() {
        let mut scene = Scene::new();
        let root = scene.root();
        let features = scene.append(root, Element::new("div").class("features-grid"));
        let f: Vec<_> = (0..3)
            .map(|_| scene.append(features, Element::new("div").class("feature-card")))
            .collect();
        let downloads = scene.append(root, Element::new("div").class("download-cards"));
        let d: Vec<_> = (0..2)
            .map(|_| scene.append(downloads, Element::new("a").class("download-card")))
            .collect();

        apply_stagger(&mut scene, Duration::from_millis(100));

        assert_eq!(scene.computed_style(f[2]).transition_delay, Duration::from_millis(200));
        assert_eq!(scene.computed_style(d[0]).transition_delay, Duration::ZERO);
        assert_eq!(scene.computed_style(d[1]).transition_delay, Duration::from_millis(100));
    }

    #[test]
    fn visible_ratio_accounts_for_bottom_margin() {
        let viewport = Viewport {
            scroll_top: 0.0,
            height: 800.0,
        };
        // Fully above the shrunk bottom edge.
        assert_abs_diff_eq!(visible_ratio(Bounds { top: 100.0, height: 100.0 }, viewport), 1.0);
        // Inside the 50px margin band only.
        assert_abs_diff_eq!(visible_ratio(Bounds { top: 760.0, height: 100.0 }, viewport), 0.0);
        // Half inside.
        assert_abs_diff_eq!(visible_ratio(Bounds { top: 700.0, height: 100.0 }, viewport), 0.5);
        // Scrolled past.
        let scrolled = Viewport {
            scroll_top: 1000.0,
            height: 800.0,
        };
        assert_abs_diff_eq!(visible_ratio(Bounds { top: 100.0, height: 100.0 }, scrolled), 0.0);
    }

    fn reveal_scene() -> (Scene, Vec<NodeId>) {
        let mut scene = Scene::new();
        let root = scene.root();
        let nodes = ["feature-card", "step", "download-card"]
            .iter()
            .map(|class| scene.append(root, Element::new("div").class(class)))
            .collect();
        (scene, nodes)
    }

    #[test]
    fn reveal_hides_observed_elements_on_attach() {
        let (mut scene, nodes) = reveal_scene();
        let tracker = RevealTracker::attach(&mut scene, 0.1);

        assert_eq!(tracker.pending(), nodes.as_slice());
        for node in nodes {
            let style = scene.computed_style(node);
            assert_abs_diff_eq!(style.opacity, 0.0);
            assert_abs_diff_eq!(style.translate_y, REVEAL_OFFSET_PX);
            assert_eq!(style.transition_duration, Duration::from_millis(600));
        }
    }

    #[test]
    fn reveal_is_one_shot() {
        let (mut scene, nodes) = reveal_scene();
        let mut tracker = RevealTracker::attach(&mut scene, 0.1);
        let layout = |node: NodeId| {
            let i = nodes.iter().position(|n| *n == node)?;
            Some(Bounds {
                top: 1000.0 * i as f32,
                height: 200.0,
            })
        };

        let first = tracker.update(
            &mut scene,
            Viewport {
                scroll_top: 0.0,
                height: 800.0,
            },
            layout,
        );
        assert_eq!(first, vec![nodes[0]]);
        let style = scene.computed_style(nodes[0]);
        assert_abs_diff_eq!(style.opacity, 1.0);
        assert_abs_diff_eq!(style.translate_y, 0.0);

        // Revealed elements are no longer observed.
        let again = tracker.update(
            &mut scene,
            Viewport {
                scroll_top: 0.0,
                height: 800.0,
            },
            layout,
        );
        assert!(again.is_empty());
        assert_eq!(tracker.pending(), &nodes[1..]);
    }

    #[test]
    fn reveal_respects_threshold() {
        let (mut scene, nodes) = reveal_scene();
        let mut tracker = RevealTracker::attach(&mut scene, 0.5);
        let viewport = Viewport {
            scroll_top: 0.0,
            height: 800.0,
        };
        // 30% of the element sits above the shrunk bottom edge.
        let partly = |_: NodeId| Some(Bounds { top: 720.0, height: 100.0 });

        assert!(tracker.update(&mut scene, viewport, partly).is_empty());
        assert!(!scene.has_class(nodes[0], REVEALED_CLASS));
    }

    #[test]
    fn anchors_resolve_fragments_only() {
        let mut scene = Scene::new();
        let root = scene.root();
        let section = scene.append(root, Element::new("section").id("download"));

        assert_eq!(resolve_anchor(&scene, "#download"), Some(section));
        assert_eq!(resolve_anchor(&scene, "#missing"), None);
        assert_eq!(resolve_anchor(&scene, "#"), None);
        assert_eq!(resolve_anchor(&scene, "download"), None);
        assert_eq!(resolve_anchor(&scene, "https://example.invalid/#download"), None);
    }
}
