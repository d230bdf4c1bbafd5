// SPDX-License-Identifier: MPL-2.0
//! Controllers bind domain state machines to the presentation tree.
//!
//! Each controller owns its state, translates input into domain messages
//! and applies the resulting effects through [`PresentationTree`]. Tree and
//! timer are borrowed per call, never stored.
//!
//! [`PresentationTree`]: crate::application::port::PresentationTree

pub mod lightbox;
pub mod slideshow;

pub use lightbox::LightboxController;
pub use slideshow::{AutoplaySettings, SlideshowController};
