// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[slideshow]` - Autoplay toggle and interval
//! - `[effects]` - Parallax, reveal and stagger tuning
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, `--config-dir`, `ICED_SHOWCASE_CONFIG_DIR`,
//! then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_showcase::config::{self, Config};
//!
//! // Missing or invalid files degrade to defaults with a warning
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let interval = config.slide_interval();
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{ParallaxFactor, SlideInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Hero slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Delay between automatic advances, in milliseconds.
    #[serde(
        default = "default_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,

    /// Whether slides advance on their own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: default_autoplay(),
        }
    }
}

/// Scroll-driven page effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectsConfig {
    /// Fraction of the scroll distance applied to the hero background.
    #[serde(
        default = "default_parallax_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub parallax_factor: Option<f32>,

    /// Extra transition delay per grid item, in milliseconds.
    #[serde(
        default = "default_stagger_step_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub stagger_step_ms: Option<u64>,

    /// Visible ratio at which cards are revealed.
    #[serde(
        default = "default_reveal_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_threshold: Option<f32>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_factor: default_parallax_factor(),
            stagger_step_ms: default_stagger_step_ms(),
            reveal_threshold: default_reveal_threshold(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub effects: EffectsConfig,
}

impl Config {
    /// Autoplay interval, clamped to the supported range.
    #[must_use]
    pub fn slide_interval(&self) -> SlideInterval {
        self.slideshow
            .interval_ms
            .map_or_else(SlideInterval::default, SlideInterval::from_millis)
    }

    /// Whether the slideshow should start its timer on attach.
    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.slideshow.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    /// Parallax factor, clamped to `[0, 1]`.
    #[must_use]
    pub fn parallax_factor(&self) -> ParallaxFactor {
        ParallaxFactor::new(
            self.effects
                .parallax_factor
                .unwrap_or(DEFAULT_PARALLAX_FACTOR),
        )
    }

    #[must_use]
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(
            self.effects
                .stagger_step_ms
                .unwrap_or(DEFAULT_STAGGER_STEP_MS),
        )
    }

    /// Reveal threshold, clamped to `[0, 1]`.
    #[must_use]
    pub fn reveal_threshold(&self) -> f32 {
        self.effects
            .reveal_threshold
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
            .clamp(0.0, 1.0)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_INTERVAL_MS)
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_parallax_factor() -> Option<f32> {
    Some(DEFAULT_PARALLAX_FACTOR)
}

fn default_stagger_step_ms() -> Option<u64> {
    Some(DEFAULT_STAGGER_STEP_MS)
}

fn default_reveal_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn written_settings_load_back_unchanged() {
        let config = Config {
            slideshow: SlideshowConfig {
                interval_ms: Some(4500),
                autoplay: Some(false),
            },
            effects: EffectsConfig {
                parallax_factor: Some(0.5),
                stagger_step_ms: Some(80),
                reveal_threshold: Some(0.25),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::write(&config_path, content).expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_degrades_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[slideshow]\ninterval_ms = \"fast\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[slideshow]\nautoplay = false\n").expect("parse");
        assert_eq!(config.slideshow.interval_ms, Some(DEFAULT_SLIDE_INTERVAL_MS));
        assert!(!config.autoplay());
        assert_eq!(config.effects, EffectsConfig::default());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.slide_interval().as_millis(), 6000);
        assert!(config.autoplay());
        assert_abs_diff_eq!(config.parallax_factor().value(), 0.3);
        assert_eq!(config.stagger_step(), Duration::from_millis(100));
        assert_abs_diff_eq!(config.reveal_threshold(), 0.1);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            slideshow: SlideshowConfig {
                interval_ms: Some(10),
                autoplay: None,
            },
            effects: EffectsConfig {
                parallax_factor: Some(4.0),
                stagger_step_ms: None,
                reveal_threshold: Some(-1.0),
            },
        };
        assert_eq!(config.slide_interval().as_millis(), MIN_SLIDE_INTERVAL_MS);
        assert!(config.autoplay());
        assert_abs_diff_eq!(config.parallax_factor().value(), MAX_PARALLAX_FACTOR);
        assert_eq!(config.stagger_step(), Duration::from_millis(DEFAULT_STAGGER_STEP_MS));
        assert_abs_diff_eq!(config.reveal_threshold(), 0.0);
    }
}
