// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::ui::Key;
use crate::ui::landing;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    /// A key press not captured by any widget.
    Key(Key),
    /// Periodic tick driving the slideshow timer and transitions.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Page manifest to show; the built-in demo page when absent.
    pub manifest_path: Option<PathBuf>,
    /// Overrides the configured slide interval.
    pub interval_ms: Option<u64>,
    /// Disables slideshow autoplay regardless of the config.
    pub no_autoplay: bool,
}
