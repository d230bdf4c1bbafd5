// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core page logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and state machines.
//! It has no dependencies on external crates (except `std`) so every rule can
//! be tested without a presentation tree.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaSource`](media::MediaSource), [`MediaType`](media::MediaType))
//! - [`gallery`]: The deduplicated [`GallerySequence`](gallery::GallerySequence)
//! - [`navigation`]: [`Direction`](navigation::Direction) and wrap-around arithmetic
//! - [`lightbox`]: Open/closed lightbox state machine
//! - [`slideshow`]: Active-slide state machine
//! - [`ui`]: UI value objects ([`SlideInterval`](ui::SlideInterval),
//!   [`ParallaxFactor`](ui::ParallaxFactor), [`Key`](ui::Key))

pub mod gallery;
pub mod lightbox;
pub mod media;
pub mod navigation;
pub mod slideshow;
pub mod ui;
