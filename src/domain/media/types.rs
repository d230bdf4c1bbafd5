// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;

/// Locator suffixes that are rendered through the video surface.
pub const VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".webm"];

/// Represents different types of media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Anything without a recognized video suffix (PNG, JPEG, GIF, ...).
    Image,
    /// MP4 or WebM video.
    Video,
}

/// Classifies a locator by its suffix.
///
/// The match is exact and case-sensitive: `clip.MP4` is treated as an image.
#[must_use]
pub fn detect_media_type(locator: &str) -> MediaType {
    if VIDEO_EXTENSIONS.iter().any(|ext| locator.ends_with(ext)) {
        MediaType::Video
    } else {
        MediaType::Image
    }
}

/// Opaque locator of a displayable resource.
///
/// Two sources are equal only if their locator strings are identical.
///
/// # Example
///
/// ```
/// use iced_showcase::domain::media::{MediaSource, MediaType};
///
/// let clip = MediaSource::new("media/demo.webm");
/// assert_eq!(clip.media_type(), MediaType::Video);
/// assert_eq!(MediaSource::from("shot.png").media_type(), MediaType::Image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaSource(String);

impl MediaSource {
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Returns the raw locator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn media_type(&self) -> MediaType {
        detect_media_type(&self.0)
    }
}

impl From<&str> for MediaSource {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for MediaSource {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

impl AsRef<str> for MediaSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_equality() {
        assert_eq!(MediaType::Image, MediaType::Image);
        assert_eq!(MediaType::Video, MediaType::Video);
        assert_ne!(MediaType::Image, MediaType::Video);
    }

    #[test]
    fn video_suffixes_are_detected() {
        assert_eq!(detect_media_type("b.mp4"), MediaType::Video);
        assert_eq!(detect_media_type("https://cdn.test/intro.webm"), MediaType::Video);
    }

    #[test]
    fn everything_else_is_an_image() {
        for locator in ["a.png", "demo.gif", "photo.jpeg", "", "mp4", "clip.mp4.png"] {
            assert_eq!(detect_media_type(locator), MediaType::Image, "{locator}");
        }
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(detect_media_type("clip.MP4"), MediaType::Image);
    }

    #[test]
    fn query_strings_defeat_the_suffix_match() {
        assert_eq!(detect_media_type("clip.mp4?t=3"), MediaType::Image);
    }

    #[test]
    fn equality_is_exact_string_match() {
        assert_eq!(MediaSource::new("a.png"), MediaSource::from("a.png"));
        assert_ne!(MediaSource::new("a.png"), MediaSource::new("./a.png"));
        assert_ne!(MediaSource::new("a.png"), MediaSource::new("A.png"));
    }

    #[test]
    fn display_shows_the_locator() {
        assert_eq!(MediaSource::new("x/y.webm").to_string(), "x/y.webm");
        assert_eq!(MediaSource::new("x/y.webm").media_type(), MediaType::Video);
    }
}
