// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`scene`]: In-memory element tree (implements [`PresentationTree`])
//! - [`interval_timer`]: Tick-driven repeating timers (implements [`Timer`])
//!
//! [`PresentationTree`]: crate::application::port::PresentationTree
//! [`Timer`]: crate::application::port::Timer

pub mod interval_timer;
pub mod scene;

// Re-export main types for convenience
pub use interval_timer::IntervalTimer;
pub use scene::{build_from_manifest, ComputedStyle, Element, Scene};
