// SPDX-License-Identifier: MPL-2.0
//! Hero slideshow controller.
//!
//! Cycles `.slideshow-slide` elements on a repeating timer. Each slide may
//! have a `.slideshow-dot` indicator at the same position, carrying
//! `data-index` and `data-title`; clicking a dot jumps to its slide and
//! restarts the countdown. The `#slideshow-title` label, when present,
//! shows the active slide's title.

use crate::application::events::ClickEvent;
use crate::application::port::{NodeId, PresentationTree, Timer, TimerHandle};
use crate::domain::slideshow::{Message, State, Transition};
use crate::domain::ui::SlideInterval;

pub const SLIDE_SELECTOR: &str = ".slideshow-slide";
pub const DOT_SELECTOR: &str = ".slideshow-dot";
pub const TITLE_ID: &str = "slideshow-title";

/// Class marking the active slide and dot.
pub const ACTIVE_CLASS: &str = "active";

/// Autoplay settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySettings {
    pub interval: SlideInterval,
    pub enabled: bool,
}

/// Slideshow bound to the hero markup.
#[derive(Debug, Clone)]
pub struct SlideshowController {
    state: State,
    slides: Vec<NodeId>,
    dots: Vec<NodeId>,
    title: Option<NodeId>,
    autoplay: AutoplaySettings,
    timer: Option<TimerHandle>,
}

impl SlideshowController {
    /// Binds to the slideshow markup, activates the first slide and starts
    /// autoplay when enabled.
    ///
    /// Returns `None` when the page has no slides.
    pub fn attach(
        tree: &mut impl PresentationTree,
        timer: &mut impl Timer,
        autoplay: AutoplaySettings,
    ) -> Option<Self> {
        let slides = tree.query_all(SLIDE_SELECTOR);
        let Some(state) = State::new(slides.len()) else {
            tracing::debug!("no slides, slideshow disabled");
            return None;
        };

        let mut controller = Self {
            state,
            slides,
            dots: tree.query_all(DOT_SELECTOR),
            title: tree.element_by_id(TITLE_ID),
            autoplay,
            timer: None,
        };
        controller.activate(tree, 0);
        if autoplay.enabled {
            controller.start_autoplay(timer);
        }
        Some(controller)
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.current()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Whether a timer is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Handle of the running timer, if any.
    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// (Re)starts the countdown from now.
    pub fn start_autoplay(&mut self, timer: &mut impl Timer) {
        self.stop_autoplay(timer);
        self.timer = Some(timer.schedule_repeating(self.autoplay.interval.as_duration()));
    }

    /// Cancels the countdown. Safe to call when stopped.
    pub fn stop_autoplay(&mut self, timer: &mut impl Timer) {
        if let Some(handle) = self.timer.take() {
            timer.cancel(handle);
        }
    }

    /// Handles a timer fire. Returns `false` for handles this slideshow does
    /// not own (including cancelled ones).
    pub fn on_timer(&mut self, tree: &mut impl PresentationTree, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        if let Some(transition) = self.state.handle(Message::Tick) {
            self.render(tree, transition);
        }
        true
    }

    /// Jumps to `index` and restarts the countdown when autoplay is on.
    ///
    /// Out-of-range targets are ignored and leave the timer untouched.
    pub fn go_to(
        &mut self,
        tree: &mut impl PresentationTree,
        timer: &mut impl Timer,
        index: usize,
    ) {
        let Some(transition) = self.state.handle(Message::GoTo(index)) else {
            tracing::debug!(index, len = self.len(), "slide index out of range");
            return;
        };
        self.render(tree, transition);
        if self.autoplay.enabled {
            self.start_autoplay(timer);
        }
    }

    /// Handles a click as seen at `current` on its bubble path.
    pub fn on_click(
        &mut self,
        tree: &mut impl PresentationTree,
        timer: &mut impl Timer,
        current: NodeId,
        _event: &mut ClickEvent,
    ) {
        if !self.dots.contains(&current) {
            return;
        }
        match tree
            .attribute(current, "data-index")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
        {
            Some(index) => self.go_to(tree, timer, index),
            None => tracing::debug!("dot without a usable data-index"),
        }
    }

    fn render(&self, tree: &mut impl PresentationTree, transition: Transition) {
        tracing::debug!(from = transition.from, to = transition.to, "slide change");
        self.deactivate(tree, transition.from);
        self.activate(tree, transition.to);
    }

    fn deactivate(&self, tree: &mut impl PresentationTree, index: usize) {
        for node in self.pair(index) {
            tree.remove_class(node, ACTIVE_CLASS);
        }
    }

    fn activate(&self, tree: &mut impl PresentationTree, index: usize) {
        for node in self.pair(index) {
            tree.add_class(node, ACTIVE_CLASS);
        }
        if let Some(label) = self.title {
            let title = self
                .dots
                .get(index)
                .and_then(|dot| tree.attribute(*dot, "data-title"))
                .unwrap_or_default()
                .to_string();
            tree.set_text(label, &title);
        }
    }

    /// Slide and indicator at `index`.
    fn pair(&self, index: usize) -> impl Iterator<Item = NodeId> + '_ {
        self.slides
            .get(index)
            .into_iter()
            .chain(self.dots.get(index))
            .copied()
    }
}
