// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` renders an interactive product landing page with the
//! Iced GUI framework.
//!
//! The page is described by a TOML [manifest](manifest::PageManifest) and
//! offers a hero slideshow with autoplay, a lightbox over every slide and
//! feature preview, and scroll-driven parallax, reveal and stagger effects.
//!
//! # Layers
//!
//! - [`domain`] - Pure state machines (gallery, lightbox, slideshow)
//! - [`application`] - Ports, controllers and page wiring
//! - [`infrastructure`] - Element tree and interval timer adapters
//! - [`ui`] / [`app`] - Iced view and update loop

#![doc(html_root_url = "https://docs.rs/iced_showcase/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod manifest;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
