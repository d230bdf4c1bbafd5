// SPDX-License-Identifier: MPL-2.0
//! Slideshow state machine.
//!
//! A slideshow over `len` slides is always showing exactly one of them.
//! Timer bookkeeping lives with the controller; this type only knows which
//! slide is active and what the next one is.

/// Active-slide state for a non-empty slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    current: usize,
    len: usize,
}

/// Requests understood by the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Automatic advance to `(current + 1) mod len`.
    Tick,
    /// Manual jump to a given slide.
    GoTo(usize),
}

/// A change of active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

impl State {
    /// Creates the state with the first slide active.
    ///
    /// Returns `None` for zero slides: there is nothing to cycle over.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    /// Handles a slideshow message.
    ///
    /// Returns `None` for an out-of-range `GoTo` target, leaving the state
    /// untouched.
    pub fn handle(&mut self, msg: Message) -> Option<Transition> {
        let to = match msg {
            Message::Tick => (self.current + 1) % self.len,
            Message::GoTo(target) if target < self.len => target,
            Message::GoTo(_) => return None,
        };
        let from = std::mem::replace(&mut self.current, to);
        Some(Transition { from, to })
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }
}
