// SPDX-License-Identifier: MPL-2.0
//! User interface: renders the page scene and reports input back.
//!
//! Follows the Elm-style "state down, messages up" pattern: the view reads
//! the [`Scene`](crate::infrastructure::Scene) and emits element-level
//! messages; the page logic decides what they mean.
//!
//! - [`landing`] - Page view (navbar, hero, sections, lightbox overlay)
//! - [`layout`] - Fixed-height page geometry for reveal and anchor jumps
//! - [`assets`] - Media files resolved at startup
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod assets;
pub mod design_tokens;
pub mod landing;
pub mod layout;
pub mod styles;
