// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module loads wallpaper images from disk and converts them to a
//! format suitable for display in egui, while keeping the decoded image
//! around for pixel-exact cropping.

use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

/// A decoded image plus the RGBA bytes used for the display texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major, for `egui::ColorImage`.
    pub pixels: Vec<u8>,
    /// The decoded image, handed to the engine for cropping.
    pub image: DynamicImage,
}

/// Load an image file and prepare it for display and cropping.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open image '{}'", path.display()))?;

    let width = image.width();
    let height = image.height();
    anyhow::ensure!(
        width > 0 && height > 0,
        "Image '{}' has zero dimensions",
        path.display()
    );

    let pixels = image.to_rgba8().into_raw();

    Ok(LoadedImage {
        width,
        height,
        pixels,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_reads_dimensions_and_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        DynamicImage::new_rgb8(12, 8).save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (12, 8));
        assert_eq!(loaded.pixels.len(), 12 * 8 * 4);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_image(Path::new("/nonexistent/wallpaper.png")).is_err());
    }
}
