// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! The lightbox is either `Closed` or `Open` on one gallery position.
//! [`State::handle`] is pure: it mutates the state and returns the
//! [`Effect`] the presentation layer has to apply.

use super::gallery::GallerySequence;
use super::media::{MediaSource, MediaType};
use super::navigation::Direction;

/// Lightbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Closed,
    Open {
        /// Position in the gallery of the item on display.
        index: usize,
    },
}

/// Requests understood by the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open on the given source (first item if it is not in the gallery).
    Open(MediaSource),
    /// Step to the neighbouring item, wrapping at both ends.
    Navigate(Direction),
    /// Hide the overlay.
    Close,
}

/// Effects produced by lightbox transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to render.
    None,
    /// Show the overlay with the given item.
    Show {
        index: usize,
        source: MediaSource,
        media_type: MediaType,
    },
    /// Hide the overlay and release the video surface.
    Hide,
}

impl State {
    /// Handles a lightbox message against `gallery`.
    ///
    /// Misses and empty galleries never fail: opening an unknown source shows
    /// the first item, navigating while closed or over an empty gallery does
    /// nothing.
    pub fn handle(&mut self, msg: Message, gallery: &GallerySequence) -> Effect {
        match msg {
            Message::Open(source) => match gallery.resolve(&source) {
                Some(index) => {
                    *self = State::Open { index };
                    show(gallery, index)
                }
                None => Effect::None,
            },
            Message::Navigate(direction) => {
                let State::Open { index } = *self else {
                    return Effect::None;
                };
                match gallery.step(index, direction) {
                    Some(next) => {
                        *self = State::Open { index: next };
                        show(gallery, next)
                    }
                    None => Effect::None,
                }
            }
            Message::Close => {
                *self = State::Closed;
                Effect::Hide
            }
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, State::Open { .. })
    }

    /// Current gallery position, if open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self {
            State::Open { index } => Some(*index),
            State::Closed => None,
        }
    }
}

fn show(gallery: &GallerySequence, index: usize) -> Effect {
    match gallery.get(index) {
        Some(source) => Effect::Show {
            index,
            source: source.clone(),
            media_type: source.media_type(),
        },
        None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gallery() -> GallerySequence {
        GallerySequence::from_groups([vec!["a.png", "b.mp4", "c.png"]])
    }

    #[test]
    fn starts_closed() {
        let state = State::default();
        assert!(!state.is_open());
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn open_resolves_exact_match() {
        let gallery = sample_gallery();
        let mut state = State::default();

        let effect = state.handle(Message::Open("b.mp4".into()), &gallery);

        assert_eq!(state, State::Open { index: 1 });
        assert_eq!(
            effect,
            Effect::Show {
                index: 1,
                source: "b.mp4".into(),
                media_type: MediaType::Video,
            }
        );
    }

    #[test]
    fn open_unknown_source_shows_first_item() {
        let gallery = sample_gallery();
        let mut state = State::default();

        let effect = state.handle(Message::Open("nope.png".into()), &gallery);

        assert_eq!(state.current_index(), Some(0));
        assert!(matches!(effect, Effect::Show { index: 0, .. }));
    }

    #[test]
    fn open_on_empty_gallery_stays_closed() {
        let gallery = GallerySequence::default();
        let mut state = State::default();

        let effect = state.handle(Message::Open("a.png".into()), &gallery);

        assert_eq!(effect, Effect::None);
        assert_eq!(state, State::Closed);
    }

    #[test]
    fn navigate_while_closed_is_ignored() {
        let gallery = sample_gallery();
        let mut state = State::default();

        let effect = state.handle(Message::Navigate(Direction::Next), &gallery);

        assert_eq!(effect, Effect::None);
        assert_eq!(state, State::Closed);
    }

    #[test]
    fn navigate_with_empty_gallery_leaves_state_unchanged() {
        let gallery = GallerySequence::default();
        let mut state = State::Open { index: 0 };

        for direction in [Direction::Next, Direction::Previous] {
            let effect = state.handle(Message::Navigate(direction), &gallery);
            assert_eq!(effect, Effect::None);
            assert_eq!(state, State::Open { index: 0 });
        }
    }

    #[test]
    fn navigate_wraps_forward_and_backward() {
        let gallery = sample_gallery();
        let mut state = State::Open { index: 2 };

        state.handle(Message::Navigate(Direction::Next), &gallery);
        assert_eq!(state.current_index(), Some(0));

        state.handle(Message::Navigate(Direction::Previous), &gallery);
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn close_always_hides() {
        let gallery = sample_gallery();
        let mut state = State::Open { index: 1 };
        assert_eq!(state.handle(Message::Close, &gallery), Effect::Hide);
        assert_eq!(state, State::Closed);

        assert_eq!(state.handle(Message::Close, &gallery), Effect::Hide);
    }
}
