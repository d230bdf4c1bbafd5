// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The controllers only ever talk to these traits, so they run unchanged on the
//! in-memory scene used by tests and by the Iced front-end.
//!
//! # Available Ports
//!
//! - [`presentation`]: Element lookup and mutation on the page markup
//! - [`timer`]: Repeating timers
//!
//! # Example
//!
//! ```
//! use iced_showcase::application::port::{PresentationTree, Timer};
//! use std::time::Duration;
//!
//! fn mark_all(tree: &mut impl PresentationTree, selector: &str) {
//!     for node in tree.query_all(selector) {
//!         tree.add_class(node, "seen");
//!     }
//! }
//!
//! fn every_second(timer: &mut impl Timer) {
//!     let handle = timer.schedule_repeating(Duration::from_secs(1));
//!     timer.cancel(handle);
//! }
//! ```

pub mod presentation;
pub mod timer;

// Re-export main types for convenience
pub use presentation::{Cursor, Display, NodeId, PresentationTree, Style};
pub use timer::{Timer, TimerHandle};
