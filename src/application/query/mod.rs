// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These services only read the presentation tree; they never mutate it.
//!
//! # Available Services
//!
//! - [`gallery`]: Gallery index over slides and feature media

pub mod gallery;

// Re-export main types
pub use gallery::{build_gallery, GALLERY_GROUPS};
