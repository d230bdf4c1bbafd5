// SPDX-License-Identifier: MPL-2.0
//! Media files referenced by the page.
//!
//! Locators are resolved against the manifest directory once at startup.
//! Image handles are created up front so the view never touches the
//! filesystem. A locator without a readable file renders as a placeholder.

use crate::application::port::PresentationTree;
use crate::domain::media::detect_media_type;
use crate::domain::media::MediaType;
use crate::infrastructure::Scene;
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Elements whose `src` points at a media file.
const MEDIA_SELECTOR: &str = "img, video";

#[derive(Debug, Clone, Default)]
pub struct Assets {
    root: PathBuf,
    images: HashMap<String, Handle>,
    videos: HashMap<String, PathBuf>,
}

impl Assets {
    /// Resolves every media locator found in `scene` against `root`.
    pub fn scan(root: &Path, scene: &Scene) -> Self {
        let mut assets = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };

        for node in scene.query_all(MEDIA_SELECTOR) {
            let Some(src) = scene.src(node) else {
                continue;
            };
            if assets.images.contains_key(src) || assets.videos.contains_key(src) {
                continue;
            }
            let path = assets.root.join(src);
            if !path.is_file() {
                tracing::warn!(src, path = %path.display(), "media file not found");
                continue;
            }
            match detect_media_type(src) {
                MediaType::Video => {
                    assets.videos.insert(src.to_string(), path);
                }
                MediaType::Image => {
                    assets
                        .images
                        .insert(src.to_string(), Handle::from_path(path));
                }
            }
        }

        tracing::debug!(
            root = %assets.root.display(),
            images = assets.images.len(),
            videos = assets.videos.len(),
            "media assets scanned"
        );
        assets
    }

    /// Image handle for `src`, if the file exists.
    #[must_use]
    pub fn image(&self, src: &str) -> Option<&Handle> {
        self.images.get(src)
    }

    /// Resolved path of the video clip `src`, if the file exists.
    #[must_use]
    pub fn video(&self, src: &str) -> Option<&Path> {
        self.videos.get(src).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::build_from_manifest;
    use crate::manifest::PageManifest;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn existing_files_are_resolved() {
        let dir = tempdir().expect("temp dir");
        let manifest = PageManifest::demo();
        let slide = manifest.slides[0].src.clone();
        let video = manifest
            .slides
            .iter()
            .find(|s| s.src.ends_with(".mp4"))
            .map(|s| s.src.clone())
            .expect("demo has a clip");
        for src in [&slide, &video] {
            let path = dir.path().join(src);
            fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
            fs::write(&path, b"data").expect("write");
        }

        let assets = Assets::scan(dir.path(), &build_from_manifest(&manifest));

        assert!(assets.image(&slide).is_some());
        assert!(assets.video(&video).is_some());
        assert!(assets.image(&video).is_none());
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempdir().expect("temp dir");
        let manifest = PageManifest::demo();

        let assets = Assets::scan(dir.path(), &build_from_manifest(&manifest));

        assert!(assets.image(&manifest.slides[0].src).is_none());
        assert_eq!(assets.root(), dir.path());
    }
}
