// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Crop export helpers.
//!
//! This module writes cropped regions to disk as PNG and resolves file
//! name collisions with a numeric suffix.

use crate::util::geometry::CropRect;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Pick `<stem>.<ext>` inside `dir`, or `<stem>_<n>.<ext>` with the
/// smallest unused n >= 2 when the plain name is already taken.
pub fn unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let plain = dir.join(format!("{}.{}", stem, ext));
    if !plain.exists() {
        return plain;
    }

    let mut counter = 2u32;
    loop {
        let candidate = dir.join(format!("{}_{}.{}", stem, counter, ext));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Crop `image` to `rect` and save it as PNG at `path`.
///
/// The rectangle must already be clamped to the image bounds.
pub fn write_crop(
    image: &DynamicImage,
    rect: CropRect,
    path: &Path,
) -> Result<(), image::ImageError> {
    let cropped = image.crop_imm(rect.x, rect.y, rect.width, rect.height);
    cropped.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_path_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = unique_path(dir.path(), "wallpaper_screen_16-9", "png");
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "wallpaper_screen_16-9.png"
        );
    }

    #[test]
    fn test_unique_path_counts_from_two() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wallpaper_screen_16-9.png"), b"x").unwrap();

        let second = unique_path(dir.path(), "wallpaper_screen_16-9", "png");
        assert_eq!(
            second.file_name().unwrap().to_str().unwrap(),
            "wallpaper_screen_16-9_2.png"
        );

        // Fills the smallest free slot even with gaps taken.
        std::fs::write(dir.path().join("wallpaper_screen_16-9_2.png"), b"x").unwrap();
        std::fs::write(dir.path().join("wallpaper_screen_16-9_4.png"), b"x").unwrap();
        let third = unique_path(dir.path(), "wallpaper_screen_16-9", "png");
        assert_eq!(
            third.file_name().unwrap().to_str().unwrap(),
            "wallpaper_screen_16-9_3.png"
        );
    }

    #[test]
    fn test_write_crop_produces_expected_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crop.png");
        let source = DynamicImage::new_rgb8(64, 36);
        let rect = CropRect {
            x: 10,
            y: 6,
            width: 32,
            height: 18,
        };

        write_crop(&source, rect, &path).unwrap();

        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (32, 18));
    }
}
