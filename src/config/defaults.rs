// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Slideshow**: Autoplay interval bounds
//! - **Host loop**: Tick period used to poll timers
//! - **Effects**: Parallax, reveal and stagger tuning

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between two automatic slide advances (in milliseconds).
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 6000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_SLIDE_INTERVAL_MS: u64 = 1000;

/// Maximum autoplay interval (in milliseconds).
pub const MAX_SLIDE_INTERVAL_MS: u64 = 60_000;

/// Whether the hero slideshow advances on its own by default.
pub const DEFAULT_AUTOPLAY: bool = true;

// ==========================================================================
// Host Loop Defaults
// ==========================================================================

/// Period of the tick subscription that drives the interval timer.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Fraction of the scroll distance applied to the hero background.
pub const DEFAULT_PARALLAX_FACTOR: f32 = 0.3;

/// Minimum parallax factor (background pinned to content).
pub const MIN_PARALLAX_FACTOR: f32 = 0.0;

/// Maximum parallax factor (background fully static on screen).
pub const MAX_PARALLAX_FACTOR: f32 = 1.0;

/// Extra transition delay per grid item (in milliseconds).
pub const DEFAULT_STAGGER_STEP_MS: u64 = 100;

/// Visible ratio an element must reach before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;

/// Pixels trimmed from the bottom of the viewport for reveal checks.
pub const REVEAL_ROOT_MARGIN_BOTTOM: f32 = 50.0;

/// Initial downward offset of not-yet-revealed elements (in pixels).
pub const REVEAL_OFFSET_PX: f32 = 20.0;

/// Duration of the reveal opacity/transform transition (in milliseconds).
pub const REVEAL_TRANSITION_MS: u64 = 600;
