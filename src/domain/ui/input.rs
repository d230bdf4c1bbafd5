// SPDX-License-Identifier: MPL-2.0
//! Framework-independent keyboard input.

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any other key; always ignored.
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`"Escape"`, `"ArrowLeft"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}
