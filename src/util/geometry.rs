// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the crop rectangle type and the rounding and
//! clamping rules that keep rectangle computation deterministic.

/// An axis-aligned rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Round to the nearest integer, with halves rounding toward +infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Intersect a signed rectangle with the image bounds, preserving the
/// top-left corner where possible. Returns `None` when the intersection
/// is empty.
pub fn clamp_to_bounds(
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    image_width: u32,
    image_height: u32,
) -> Option<CropRect> {
    let left = x.max(0);
    let top = y.max(0);
    let right = (x + width).min(i64::from(image_width));
    let bottom = (y + height).min(i64::from(image_height));

    if right <= left || bottom <= top {
        return None;
    }

    Some(CropRect {
        x: left as u32,
        y: top as u32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.6), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_clamp_inside_is_unchanged() {
        let rect = clamp_to_bounds(10, 20, 100, 50, 1920, 1080).unwrap();
        assert_eq!(
            rect,
            CropRect {
                x: 10,
                y: 20,
                width: 100,
                height: 50
            }
        );
    }

    #[test]
    fn test_clamp_trims_overhang() {
        // Extends past the right and bottom edges
        let rect = clamp_to_bounds(1900, 1000, 100, 200, 1920, 1080).unwrap();
        assert_eq!(rect.x, 1900);
        assert_eq!(rect.y, 1000);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 80);
    }

    #[test]
    fn test_clamp_negative_origin_keeps_visible_part() {
        let rect = clamp_to_bounds(-50, -20, 100, 100, 1920, 1080).unwrap();
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 80);
    }

    #[test]
    fn test_clamp_outside_is_empty() {
        assert!(clamp_to_bounds(2000, 0, 100, 100, 1920, 1080).is_none());
        assert!(clamp_to_bounds(-200, 0, 100, 100, 1920, 1080).is_none());
        assert!(clamp_to_bounds(0, 1080, 100, 100, 1920, 1080).is_none());
    }
}
