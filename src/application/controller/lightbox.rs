// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller.
//!
//! Owns the gallery and the lightbox state machine, maps clicks and keys to
//! [`Message`]s and renders the resulting [`Effect`]s into the overlay
//! markup: an `#lightbox` element holding an `img` surface, an optional
//! `video` surface and optional `.lightbox-prev` / `.lightbox-next`
//! controls.

use crate::application::events::ClickEvent;
use crate::application::port::{Display, NodeId, PresentationTree};
use crate::domain::gallery::GallerySequence;
use crate::domain::lightbox::{Effect, Message, State};
use crate::domain::media::{MediaSource, MediaType};
use crate::domain::navigation::Direction;
use crate::domain::ui::Key;

/// Id of the overlay element.
pub const OVERLAY_ID: &str = "lightbox";

/// Class toggled on the overlay while it is shown.
pub const ACTIVE_CLASS: &str = "active";

/// Overlay elements the controller renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Surfaces {
    overlay: NodeId,
    image: NodeId,
    video: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Gallery lightbox bound to the page markup.
#[derive(Debug, Clone)]
pub struct LightboxController {
    gallery: GallerySequence,
    state: State,
    surfaces: Surfaces,
    triggers: Vec<NodeId>,
}

impl LightboxController {
    /// Binds the lightbox to the overlay markup.
    ///
    /// `triggers` are the elements whose click opens the lightbox on their
    /// own `src`. Returns `None` when the overlay or its image surface is
    /// missing; the rest of the page works without a lightbox.
    pub fn attach(
        tree: &impl PresentationTree,
        gallery: GallerySequence,
        triggers: Vec<NodeId>,
    ) -> Option<Self> {
        let Some(overlay) = tree.element_by_id(OVERLAY_ID) else {
            tracing::debug!("no #{OVERLAY_ID} element, lightbox disabled");
            return None;
        };
        let Some(image) = tree.query_all_within(overlay, "img").first().copied() else {
            tracing::warn!("#{OVERLAY_ID} has no image surface, lightbox disabled");
            return None;
        };
        let first = |selector: &str| tree.query_all_within(overlay, selector).first().copied();
        let surfaces = Surfaces {
            overlay,
            image,
            video: first("video"),
            prev: first(".lightbox-prev"),
            next: first(".lightbox-next"),
        };

        Some(Self {
            gallery,
            state: State::default(),
            surfaces,
            triggers,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &GallerySequence {
        &self.gallery
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    /// Overlay element.
    #[must_use]
    pub fn overlay(&self) -> NodeId {
        self.surfaces.overlay
    }

    /// Opens the lightbox on `source`, or on the first item when `source` is
    /// not part of the gallery.
    pub fn open(&mut self, tree: &mut impl PresentationTree, source: &str) {
        self.dispatch(tree, Message::Open(MediaSource::new(source)));
    }

    /// Steps to the neighbouring item. Ignored while closed.
    pub fn navigate(&mut self, tree: &mut impl PresentationTree, direction: Direction) {
        self.dispatch(tree, Message::Navigate(direction));
    }

    pub fn close(&mut self, tree: &mut impl PresentationTree) {
        self.dispatch(tree, Message::Close);
    }

    /// Handles a click as seen at `current` on its bubble path.
    pub fn on_click(
        &mut self,
        tree: &mut impl PresentationTree,
        current: NodeId,
        event: &mut ClickEvent,
    ) {
        if self.triggers.contains(&current) {
            if let Some(src) = tree.src(current).map(str::to_string) {
                self.open(tree, &src);
            }
        } else if Some(current) == self.surfaces.prev {
            event.stop_propagation();
            self.navigate(tree, Direction::Previous);
        } else if Some(current) == self.surfaces.next {
            event.stop_propagation();
            self.navigate(tree, Direction::Next);
        } else if current == self.surfaces.overlay && event.target() == self.surfaces.overlay {
            self.close(tree);
        }
    }

    /// Handles a key press. Only acts while open.
    pub fn on_key(&mut self, tree: &mut impl PresentationTree, key: Key) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(tree),
            Key::ArrowLeft => self.navigate(tree, Direction::Previous),
            Key::ArrowRight => self.navigate(tree, Direction::Next),
            Key::Other => {}
        }
    }

    fn dispatch(&mut self, tree: &mut impl PresentationTree, msg: Message) {
        let effect = self.state.handle(msg, &self.gallery);
        self.apply(tree, effect);
    }

    fn apply(&self, tree: &mut impl PresentationTree, effect: Effect) {
        let Surfaces {
            overlay,
            image,
            video,
            ..
        } = self.surfaces;

        match effect {
            Effect::None => {}
            Effect::Show {
                index,
                source,
                media_type,
            } => {
                tracing::debug!(index, source = %source, ?media_type, "lightbox show");
                match (media_type, video) {
                    (MediaType::Video, Some(video)) => {
                        tree.set_display(image, Display::None);
                        tree.set_display(video, Display::Block);
                        tree.set_src(video, Some(source.as_str()));
                        tree.play(video);
                    }
                    _ => {
                        if let Some(video) = video {
                            release_video(tree, video);
                        }
                        tree.set_display(image, Display::Block);
                        tree.set_src(image, Some(source.as_str()));
                    }
                }
                tree.add_class(overlay, ACTIVE_CLASS);
            }
            Effect::Hide => {
                tracing::debug!("lightbox hide");
                tree.remove_class(overlay, ACTIVE_CLASS);
                if let Some(video) = video {
                    tree.pause(video);
                    tree.set_src(video, None);
                }
            }
        }
    }
}

fn release_video(tree: &mut impl PresentationTree, video: NodeId) {
    tree.pause(video);
    tree.set_src(video, None);
    tree.set_display(video, Display::None);
}
