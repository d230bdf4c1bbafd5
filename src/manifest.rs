// SPDX-License-Identifier: MPL-2.0
//! Page manifest: the content of the landing page.
//!
//! The manifest describes *what* the page shows (slides, feature cards,
//! steps and download cards) in TOML. The scene builder turns it into the
//! element tree the controllers operate on.
//!
//! # Example
//!
//! ```toml
//! [hero]
//! title = "IcedShowcase"
//! tagline = "Look before you leap."
//!
//! [[slide]]
//! src = "media/overview.png"
//! title = "Overview"
//!
//! [[feature]]
//! title = "Fast"
//! body = "Opens instantly."
//! media = "media/fast.webm"
//! ```

use crate::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hero header text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
}

/// One slideshow slide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A feature card, optionally illustrated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// A "how it works" step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Step {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A download card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Download {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Full page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageManifest {
    #[serde(default)]
    pub hero: Hero,
    #[serde(default, rename = "slide", skip_serializing_if = "Vec::is_empty")]
    pub slides: Vec<Slide>,
    #[serde(default, rename = "feature", skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, rename = "step", skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(default, rename = "download", skip_serializing_if = "Vec::is_empty")]
    pub downloads: Vec<Download>,
}

impl PageManifest {
    /// Parses and validates a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for invalid TOML and
    /// [`ManifestError::EmptySource`] when a slide or feature media entry
    /// carries an empty locator.
    pub fn from_toml(content: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|err| ManifestError::Parse(err.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not validate.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> std::result::Result<(), ManifestError> {
        if let Some(position) = self.slides.iter().position(|s| s.src.trim().is_empty()) {
            return Err(ManifestError::EmptySource {
                section: "slide",
                position,
            });
        }
        if let Some(position) = self
            .features
            .iter()
            .position(|f| f.media.as_deref().is_some_and(|m| m.trim().is_empty()))
        {
            return Err(ManifestError::EmptySource {
                section: "feature",
                position,
            });
        }
        Ok(())
    }

    /// Built-in page shown when no manifest is given or it fails to load.
    #[must_use]
    pub fn demo() -> Self {
        let slide = |src: &str, title: &str| Slide {
            src: src.to_string(),
            title: Some(title.to_string()),
        };
        let feature = |title: &str, body: &str, media: Option<&str>| Feature {
            title: title.to_string(),
            body: body.to_string(),
            media: media.map(str::to_string),
        };
        let step = |title: &str, body: &str| Step {
            title: title.to_string(),
            body: body.to_string(),
        };
        let download = |title: &str, body: &str| Download {
            title: title.to_string(),
            body: body.to_string(),
            href: None,
        };

        Self {
            hero: Hero {
                title: "IcedShowcase".to_string(),
                tagline: "A landing page that stays out of your way.".to_string(),
            },
            slides: vec![
                slide("media/overview.png", "Overview"),
                slide("media/lightbox.png", "Lightbox"),
                slide("media/playback.mp4", "Video playback"),
            ],
            features: vec![
                feature(
                    "Click to enlarge",
                    "Every slide and feature preview opens in a lightbox.",
                    Some("media/lightbox.png"),
                ),
                feature(
                    "Keyboard friendly",
                    "Arrow keys browse the gallery, Escape closes it.",
                    Some("media/keyboard.gif"),
                ),
                feature(
                    "Video aware",
                    "Clips play inline and stop as soon as you leave them.",
                    Some("media/playback.mp4"),
                ),
                feature("No setup", "Point it at a manifest and go.", None),
            ],
            steps: vec![
                step("Describe", "List slides and features in a TOML manifest."),
                step("Launch", "Run the binary with the manifest path."),
                step("Share", "Show it on any screen."),
            ],
            downloads: vec![
                download("Linux", "Tarball and Flatpak"),
                download("Windows", "Portable executable"),
                download("macOS", "Universal binary"),
            ],
        }
    }
}
