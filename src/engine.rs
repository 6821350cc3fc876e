// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen layout engine.
//!
//! This module owns the global settings, the ordered list of screen
//! configurations and the source image, and turns each screen into a
//! pixel-exact crop rectangle. It also performs the crop-and-export
//! operation with collision-safe file naming.

use crate::io::export;
use crate::io::layout::LayoutData;
use crate::models::global::{GlobalConfig, ScalePercent};
use crate::models::screen::{
    AspectRatio, ScreenConfig, ScreenId, ScreenParams, ScreenUpdate,
};
use crate::util::geometry::{clamp_to_bounds, round_half_up, CropRect};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reported by the layout engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no screen with id {0}")]
    NotFound(ScreenId),

    #[error("screen {id} ({ratio}) lies outside the source image")]
    InvalidGeometry { id: ScreenId, ratio: AspectRatio },

    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode '{path}': {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// The crop rectangle computed for one screen, or why there is none.
#[derive(Debug)]
pub struct ComputedCrop {
    pub id: ScreenId,
    pub rect: Result<CropRect, EngineError>,
}

/// Per-screen result of an export run.
#[derive(Debug)]
pub struct ExportOutcome {
    pub id: ScreenId,
    pub ratio: AspectRatio,
    pub result: Result<PathBuf, EngineError>,
}

/// Result of `export_all`: one outcome per screen, in insertion order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub outcomes: Vec<ExportOutcome>,
}

impl ExportReport {
    /// Paths written during this run, in export order.
    pub fn written(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_deref().ok())
            .collect()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Owns the session state and computes crop rectangles from it.
///
/// Every computation is a pure function of the current configuration and
/// source image; only `export_all` has side effects.
pub struct ScreenLayoutEngine {
    global: GlobalConfig,
    screens: Vec<ScreenConfig>,
    source: Option<DynamicImage>,
    next_id: u32,
}

impl Default for ScreenLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenLayoutEngine {
    pub fn new() -> Self {
        Self {
            global: GlobalConfig::default(),
            screens: Vec::new(),
            source: None,
            next_id: 0,
        }
    }

    /// Replace the source image. Previously computed rectangles no longer
    /// apply; callers are expected to recompute.
    pub fn set_source_image(&mut self, image: DynamicImage) -> Result<(), EngineError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(EngineError::InvalidInput(
                "source image has zero dimensions".to_string(),
            ));
        }
        self.source = Some(image);
        Ok(())
    }

    pub fn source_dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(|img| (img.width(), img.height()))
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn screens(&self) -> &[ScreenConfig] {
        &self.screens
    }

    pub fn set_reference_resolution(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidInput(format!(
                "reference resolution must be positive, got {}x{}",
                width, height
            )));
        }
        self.global.reference_width = width;
        self.global.reference_height = height;
        Ok(())
    }

    pub fn set_global_scale(&mut self, scale: ScalePercent) {
        self.global.scale = scale;
    }

    /// Append a screen; insertion order drives display and export order.
    pub fn add_screen(&mut self, params: ScreenParams) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        self.screens.push(ScreenConfig::new(id, params));
        log::info!("Added screen {} ({})", id, params.ratio);
        id
    }

    /// Remove a screen. Remaining screens keep their identities.
    pub fn remove_screen(&mut self, id: ScreenId) -> Result<(), EngineError> {
        let index = self.index_of(id)?;
        self.screens.remove(index);
        log::info!("Removed screen {}", id);
        Ok(())
    }

    /// Apply a partial update to an existing screen.
    pub fn update_screen(&mut self, id: ScreenId, update: ScreenUpdate) -> Result<(), EngineError> {
        let index = self.index_of(id)?;
        let screen = &mut self.screens[index];
        if let Some(ratio) = update.ratio {
            if ratio.w == 0 || ratio.h == 0 {
                return Err(EngineError::InvalidInput(format!(
                    "aspect ratio components must be positive, got {}:{}",
                    ratio.w, ratio.h
                )));
            }
            screen.ratio = ratio;
        }
        if let Some(scale) = update.local_scale {
            screen.local_scale = scale;
        }
        if let Some((x, y)) = update.position {
            screen.x = x;
            screen.y = y;
        }
        Ok(())
    }

    fn index_of(&self, id: ScreenId) -> Result<usize, EngineError> {
        self.screens
            .iter()
            .position(|s| s.id == id)
            .ok_or(EngineError::NotFound(id))
    }

    fn screen(&self, id: ScreenId) -> Result<&ScreenConfig, EngineError> {
        self.index_of(id).map(|i| &self.screens[i])
    }

    /// Compute the crop rectangle for one screen in source pixel space.
    ///
    /// The long side of the aspect ratio is anchored to the longer
    /// reference dimension times the combined scale (global x local);
    /// the short side follows from the ratio. The rectangle is then
    /// mapped from reference space into source pixel space, rounded
    /// half-up, and clamped to the image bounds.
    pub fn compute_crop_rect(&self, id: ScreenId) -> Result<CropRect, EngineError> {
        let (src_w, src_h) = self.source_dimensions().ok_or_else(|| {
            EngineError::InvalidInput("no source image loaded".to_string())
        })?;
        let screen = self.screen(id)?;

        let combined = self.global.scale.factor() * screen.local_scale.factor();
        let ref_w = f64::from(self.global.reference_width);
        let ref_h = f64::from(self.global.reference_height);
        let long_side = ref_w.max(ref_h) * combined;

        let ratio_w = f64::from(screen.ratio.w);
        let ratio_h = f64::from(screen.ratio.h);
        let (rect_w, rect_h) = if screen.ratio.w >= screen.ratio.h {
            (long_side, long_side * ratio_h / ratio_w)
        } else {
            (long_side * ratio_w / ratio_h, long_side)
        };

        // Map from reference space to source pixel space.
        let scale_x = f64::from(src_w) / ref_w;
        let scale_y = f64::from(src_h) / ref_h;
        let x = round_half_up(f64::from(screen.x) * scale_x);
        let y = round_half_up(f64::from(screen.y) * scale_y);
        let width = round_half_up(rect_w * scale_x);
        let height = round_half_up(rect_h * scale_y);

        let rect = clamp_to_bounds(x, y, width, height, src_w, src_h).ok_or(
            EngineError::InvalidGeometry {
                id,
                ratio: screen.ratio,
            },
        )?;

        log::debug!(
            "Screen {} ({}): {}x{} at ({}, {}) (combined scale {:.2})",
            id,
            screen.ratio,
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            combined
        );
        Ok(rect)
    }

    /// Recompute every screen's rectangle, in insertion order.
    pub fn recompute(&self) -> Vec<ComputedCrop> {
        self.screens
            .iter()
            .map(|s| ComputedCrop {
                id: s.id,
                rect: self.compute_crop_rect(s.id),
            })
            .collect()
    }

    /// Crop and save every screen into `out_dir`.
    ///
    /// One screen's failure does not abort the rest; the report carries
    /// a result per screen. Fails outright only when no source image is
    /// loaded or `out_dir` is not a usable directory.
    pub fn export_all(&self, out_dir: &Path) -> Result<ExportReport, EngineError> {
        let source = self.source.as_ref().ok_or_else(|| {
            EngineError::InvalidInput("no source image loaded".to_string())
        })?;

        let meta = std::fs::metadata(out_dir).map_err(|e| EngineError::Io {
            path: out_dir.to_path_buf(),
            source: e,
        })?;
        if !meta.is_dir() {
            return Err(EngineError::Io {
                path: out_dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "output path is not a directory",
                ),
            });
        }

        let mut report = ExportReport::default();
        for screen in &self.screens {
            let result = self.export_one(source, screen, out_dir);
            match &result {
                Ok(path) => log::info!("Screen {} exported: {}", screen.id, path.display()),
                Err(e) => log::error!("Screen {} export failed: {}", screen.id, e),
            }
            report.outcomes.push(ExportOutcome {
                id: screen.id,
                ratio: screen.ratio,
                result,
            });
        }
        Ok(report)
    }

    fn export_one(
        &self,
        source: &DynamicImage,
        screen: &ScreenConfig,
        out_dir: &Path,
    ) -> Result<PathBuf, EngineError> {
        let rect = self.compute_crop_rect(screen.id)?;
        let stem = format!("wallpaper_screen_{}", screen.ratio.file_label());
        let path = export::unique_path(out_dir, &stem, "png");
        export::write_crop(source, rect, &path).map_err(|e| match e {
            image::ImageError::IoError(source) => EngineError::Io {
                path: path.clone(),
                source,
            },
            other => EngineError::Encode {
                path: path.clone(),
                source: other,
            },
        })?;
        Ok(path)
    }

    /// Capture the current layout for serialization.
    pub fn snapshot(&self) -> LayoutData {
        LayoutData {
            global: self.global,
            screens: self
                .screens
                .iter()
                .map(|s| ScreenParams {
                    ratio: s.ratio,
                    local_scale: s.local_scale,
                    x: s.x,
                    y: s.y,
                })
                .collect(),
        }
    }

    /// Replace the session layout with a loaded one. Screens get fresh
    /// identities; the source image is untouched.
    pub fn apply_layout(&mut self, layout: LayoutData) -> Result<(), EngineError> {
        if layout.global.reference_width == 0 || layout.global.reference_height == 0 {
            return Err(EngineError::InvalidInput(
                "layout has a non-positive reference resolution".to_string(),
            ));
        }
        if let Some(bad) = layout
            .screens
            .iter()
            .find(|p| p.ratio.w == 0 || p.ratio.h == 0)
        {
            return Err(EngineError::InvalidInput(format!(
                "layout has a malformed aspect ratio {}:{}",
                bad.ratio.w, bad.ratio.h
            )));
        }

        self.global = layout.global;
        self.screens.clear();
        for params in layout.screens {
            self.add_screen(params);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_image(
        src_w: u32,
        src_h: u32,
        ref_w: u32,
        ref_h: u32,
    ) -> ScreenLayoutEngine {
        let mut engine = ScreenLayoutEngine::new();
        engine
            .set_source_image(DynamicImage::new_rgb8(src_w, src_h))
            .unwrap();
        engine.set_reference_resolution(ref_w, ref_h).unwrap();
        engine
    }

    fn params(ratio: AspectRatio, x: i32, y: i32) -> ScreenParams {
        ScreenParams {
            ratio,
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn test_16_9_height_900_gives_width_1600() {
        let mut engine = engine_with_image(1600, 900, 1600, 900);
        let id = engine.add_screen(ScreenParams::default());

        let rect = engine.compute_crop_rect(id).unwrap();
        assert_eq!(rect.width, 1600);
        assert_eq!(rect.height, 900);
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn test_rect_contained_in_source() {
        let mut engine = engine_with_image(3840, 2160, 2560, 1440);
        let ids = [
            engine.add_screen(params(AspectRatio::new(16, 9).unwrap(), 0, 0)),
            engine.add_screen(params(AspectRatio::new(9, 16).unwrap(), 1200, -300)),
            engine.add_screen(params(AspectRatio::new(21, 9).unwrap(), 2000, 1000)),
        ];
        engine.set_global_scale(ScalePercent::new(80));

        for id in ids {
            let rect = engine.compute_crop_rect(id).unwrap();
            assert!(rect.right() <= 3840, "screen {} overflows width", id);
            assert!(rect.bottom() <= 2160, "screen {} overflows height", id);
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut engine = engine_with_image(3840, 2160, 2560, 1440);
        let id = engine.add_screen(params(AspectRatio::new(16, 10).unwrap(), 137, 89));
        engine.set_global_scale(ScalePercent::new(63));

        let first = engine.compute_crop_rect(id).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.compute_crop_rect(id).unwrap(), first);
        }
    }

    #[test]
    fn test_combined_scale_is_multiplicative() {
        // Global x0.5 with local x2.0 must match both sliders neutral.
        let mut engine = engine_with_image(2560, 1440, 2560, 1440);
        let neutral = engine.add_screen(ScreenParams::default());
        let compensated = engine.add_screen(ScreenParams {
            local_scale: ScalePercent::new(100),
            ..Default::default()
        });

        let baseline = engine.compute_crop_rect(neutral).unwrap();

        engine.set_global_scale(ScalePercent::new(0));
        assert_eq!(engine.compute_crop_rect(compensated).unwrap(), baseline);
    }

    #[test]
    fn test_overhang_is_clamped_not_rejected() {
        let mut engine = engine_with_image(2560, 1440, 2560, 1440);
        let id = engine.add_screen(params(AspectRatio::default(), 1280, 720));

        let rect = engine.compute_crop_rect(id).unwrap();
        assert_eq!((rect.x, rect.y), (1280, 720));
        assert_eq!((rect.width, rect.height), (1280, 720));
    }

    #[test]
    fn test_fully_outside_is_invalid_geometry() {
        let mut engine = engine_with_image(2560, 1440, 2560, 1440);
        let id = engine.add_screen(params(AspectRatio::default(), 5000, 0));

        assert!(matches!(
            engine.compute_crop_rect(id),
            Err(EngineError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_reference_to_source_mapping() {
        // Source is exactly half the reference in each dimension, so
        // every coordinate halves.
        let mut engine = engine_with_image(1280, 720, 2560, 1440);
        let id = engine.add_screen(params(AspectRatio::default(), 100, 50));

        let rect = engine.compute_crop_rect(id).unwrap();
        assert_eq!((rect.x, rect.y), (50, 25));
        assert_eq!(rect.width, 1230); // 1280 wide crop clamped at x=50
    }

    #[test]
    fn test_compute_without_source_is_invalid_input() {
        let mut engine = ScreenLayoutEngine::new();
        let id = engine.add_screen(ScreenParams::default());
        assert!(matches!(
            engine.compute_crop_rect(id),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_removed_screen_is_not_found() {
        let mut engine = engine_with_image(2560, 1440, 2560, 1440);
        let id = engine.add_screen(ScreenParams::default());
        let kept = engine.add_screen(ScreenParams::default());

        engine.remove_screen(id).unwrap();
        assert!(matches!(
            engine.update_screen(id, ScreenUpdate::default()),
            Err(EngineError::NotFound(_))
        ));
        // The other screen keeps its identity.
        assert_eq!(engine.screens()[0].id, kept);
    }

    #[test]
    fn test_update_rejects_zero_ratio() {
        let mut engine = engine_with_image(2560, 1440, 2560, 1440);
        let id = engine.add_screen(ScreenParams::default());
        let update = ScreenUpdate {
            ratio: Some(AspectRatio { w: 0, h: 9 }),
            ..Default::default()
        };
        assert!(matches!(
            engine.update_screen(id, update),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_reference_resolution_rejected() {
        let mut engine = ScreenLayoutEngine::new();
        assert!(engine.set_reference_resolution(0, 1440).is_err());
        assert!(engine.set_reference_resolution(2560, 0).is_err());
    }

    #[test]
    fn test_export_naming_and_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_with_image(160, 90, 160, 90);
        engine.add_screen(ScreenParams::default());
        engine.add_screen(ScreenParams::default());

        let report = engine.export_all(dir.path()).unwrap();
        assert_eq!(report.succeeded(), 2);
        let names: Vec<_> = report
            .written()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["wallpaper_screen_16-9.png", "wallpaper_screen_16-9_2.png"]
        );

        // A second run in the now non-empty directory keeps counting up.
        let report = engine.export_all(dir.path()).unwrap();
        let names: Vec<_> = report
            .written()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["wallpaper_screen_16-9_3.png", "wallpaper_screen_16-9_4.png"]
        );
    }

    #[test]
    fn test_export_continues_after_screen_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_with_image(160, 90, 160, 90);
        engine.add_screen(params(AspectRatio::default(), 9999, 9999));
        engine.add_screen(ScreenParams::default());

        let report = engine.export_all(dir.path()).unwrap();
        assert_eq!(report.failed(), 1);
        assert_eq!(report.succeeded(), 1);
        assert!(matches!(
            report.outcomes[0].result,
            Err(EngineError::InvalidGeometry { .. })
        ));
        assert!(report.outcomes[1].result.is_ok());
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let mut engine = engine_with_image(160, 90, 160, 90);
        engine.add_screen(ScreenParams::default());
        let result = engine.export_all(Path::new("/nonexistent/wallsplit-out"));
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }

    #[test]
    fn test_layout_snapshot_roundtrip() {
        let mut engine = engine_with_image(2560, 1440, 1920, 1080);
        engine.set_global_scale(ScalePercent::new(70));
        engine.add_screen(params(AspectRatio::new(21, 9).unwrap(), 40, 60));

        let layout = engine.snapshot();
        let mut restored = ScreenLayoutEngine::new();
        restored.apply_layout(layout).unwrap();

        assert_eq!(restored.global(), engine.global());
        assert_eq!(restored.screens().len(), 1);
        assert_eq!(restored.screens()[0].ratio, AspectRatio::new(21, 9).unwrap());
        assert_eq!((restored.screens()[0].x, restored.screens()[0].y), (40, 60));
    }
}
