// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Read-only services (gallery index)
//! - [`controller`]: Lightbox and slideshow controllers
//! - [`effects`]: Parallax, reveal, stagger and anchor resolution
//! - [`events`]: Click events with bubbling
//! - [`page`]: Startup wiring and input dispatch
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives [`page::Page`]
//!
//! # Example
//!
//! ```
//! use iced_showcase::application::page::{Page, PageSettings};
//! use iced_showcase::infrastructure::{build_from_manifest, IntervalTimer};
//! use iced_showcase::manifest::PageManifest;
//! use std::time::Instant;
//!
//! let mut scene = build_from_manifest(&PageManifest::demo());
//! let mut timer = IntervalTimer::new(Instant::now());
//! let page = Page::attach(&mut scene, &mut timer, &PageSettings::default());
//! assert!(page.lightbox().is_some());
//! ```

pub mod controller;
pub mod effects;
pub mod events;
pub mod page;
pub mod port;
pub mod query;
