// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses reach the page only when no widget captured them.
//! Window resizes re-run the page layout.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::domain::ui::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period while an entrance transition is running.
const ANIMATION_FRAME_MS: u64 = 16;

/// Routes native keyboard and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => map_key(&key).map(Message::Key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Periodic tick. Runs faster while a transition needs redrawing.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    let period = if animating {
        ANIMATION_FRAME_MS
    } else {
        TICK_INTERVAL_MS
    };
    time::every(Duration::from_millis(period)).map(Message::Tick)
}

/// Keys the page reacts to; everything else is dropped here.
fn map_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_mapped() {
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::Escape)),
            Some(Key::Escape)
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(Key::ArrowLeft)
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(Key::ArrowRight)
        );
    }

    #[test]
    fn other_keys_are_dropped() {
        assert_eq!(map_key(&keyboard::Key::Named(Named::Enter)), None);
        assert_eq!(map_key(&keyboard::Key::Character("a".into())), None);
    }
}
