// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Slide Interval Bounds
// =============================================================================

/// Autoplay interval bounds (1 to 60 seconds).
pub mod slide_interval_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN_MS: u64 = 1000;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 6000;
}

// =============================================================================
// SlideInterval
// =============================================================================

/// Delay between two automatic slideshow advances.
///
/// # Example
///
/// ```
/// use iced_showcase::domain::ui::SlideInterval;
///
/// assert_eq!(SlideInterval::default().as_millis(), 6000);
/// assert_eq!(SlideInterval::from_millis(10).as_millis(), 1000); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideInterval(u64);

impl SlideInterval {
    /// Creates an interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(slide_interval_bounds::MIN_MS, slide_interval_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideInterval {
    fn default() -> Self {
        Self(slide_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Parallax Bounds
// =============================================================================

/// Parallax factor bounds.
pub mod parallax_bounds {
    /// Background moves with the content.
    pub const MIN: f32 = 0.0;
    /// Background stays fixed on screen.
    pub const MAX: f32 = 1.0;
    /// Default factor.
    pub const DEFAULT: f32 = 0.3;
}

// =============================================================================
// ParallaxFactor
// =============================================================================

/// Share of the scroll distance applied to the hero background (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFactor(f32);

impl ParallaxFactor {
    /// Creates a factor, clamping to the valid range. NaN maps to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(parallax_bounds::MIN, parallax_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ParallaxFactor {
    fn default() -> Self {
        Self(parallax_bounds::DEFAULT)
    }
}
