// SPDX-License-Identifier: MPL-2.0
//! The deduplicated, ordered list of media available to the lightbox.

use super::media::MediaSource;
use super::navigation::{wrap_index, Direction};
use std::collections::HashSet;

/// Ordered sequence of unique media sources.
///
/// Built once from element groups scanned in a fixed order. Order matters
/// because lightbox navigation is relative over this sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySequence {
    sources: Vec<MediaSource>,
}

impl GallerySequence {
    /// Builds the sequence from groups scanned in order, keeping only the
    /// first occurrence of every source.
    ///
    /// # Example
    ///
    /// ```
    /// use iced_showcase::domain::gallery::GallerySequence;
    ///
    /// let gallery = GallerySequence::from_groups([
    ///     vec!["hero.png", "demo.mp4"],
    ///     vec!["demo.mp4", "card.gif"],
    /// ]);
    /// let locators: Vec<&str> = gallery.iter().map(|s| s.as_str()).collect();
    /// assert_eq!(locators, ["hero.png", "demo.mp4", "card.gif"]);
    /// ```
    #[must_use]
    pub fn from_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<MediaSource>,
    {
        let mut seen = HashSet::new();
        let mut sources = Vec::new();
        for source in groups.into_iter().flatten().map(Into::into) {
            if seen.insert(source.clone()) {
                sources.push(source);
            }
        }
        Self { sources }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaSource> {
        self.sources.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaSource> {
        self.sources.iter()
    }

    /// Position of `source` by exact match.
    #[must_use]
    pub fn position(&self, source: &MediaSource) -> Option<usize> {
        self.sources.iter().position(|s| s == source)
    }

    /// Position of `source`, or 0 when it is not part of the gallery.
    ///
    /// Returns `None` only for an empty gallery.
    #[must_use]
    pub fn resolve(&self, source: &MediaSource) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(self.position(source).unwrap_or(0))
    }

    /// Index one step away from `index`, wrapping at both ends.
    #[must_use]
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        wrap_index(index, direction, self.len())
    }
}
