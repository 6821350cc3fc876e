// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global session settings.
//!
//! This module defines the reference resolution and the scale slider
//! that all screen rectangles are expressed against.

use serde::{Deserialize, Serialize};

/// A scale slider position in the range 0..=100.
///
/// The slider maps to a size multiplier piecewise linearly:
/// 0 = x0.5, 50 = x1.0, 100 = x2.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScalePercent(u8);

impl ScalePercent {
    /// Neutral slider position (factor exactly 1.0).
    pub const NEUTRAL: ScalePercent = ScalePercent(50);

    /// Create a slider value, clamping to the 0..=100 range.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    /// Raw slider position.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// The size multiplier for this slider position.
    ///
    /// The lower half interpolates 0.5..1.0, the upper half 1.0..2.0,
    /// so the neutral position 50 is exactly 1.0.
    pub fn factor(self) -> f64 {
        let p = f64::from(self.0);
        if self.0 <= 50 {
            0.5 + (p / 50.0) * 0.5
        } else {
            1.0 + (p - 50.0) / 50.0
        }
    }
}

impl Default for ScalePercent {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Global settings: reference resolution and global scale.
///
/// The reference resolution is the conceptual canvas that screen
/// positions and scales are expressed in; it is independent of the
/// actual source image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub reference_width: u32,
    pub reference_height: u32,
    pub scale: ScalePercent,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            reference_width: 2560,
            reference_height: 1440,
            scale: ScalePercent::NEUTRAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_endpoints() {
        assert_eq!(ScalePercent::new(0).factor(), 0.5);
        assert_eq!(ScalePercent::new(50).factor(), 1.0);
        assert_eq!(ScalePercent::new(100).factor(), 2.0);
    }

    #[test]
    fn test_scale_factor_midpoints() {
        assert!((ScalePercent::new(25).factor() - 0.75).abs() < 1e-12);
        assert!((ScalePercent::new(75).factor() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_scale_percent_clamps() {
        assert_eq!(ScalePercent::new(200).percent(), 100);
    }

    #[test]
    fn test_neutral_is_default() {
        assert_eq!(ScalePercent::default(), ScalePercent::NEUTRAL);
        assert_eq!(ScalePercent::default().factor(), 1.0);
    }
}
