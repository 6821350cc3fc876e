// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen configuration data structures.
//!
//! This module defines the per-screen settings (aspect ratio, local
//! scale, position) that the layout engine turns into crop rectangles.

use crate::models::global::ScalePercent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A width:height ratio of two strictly positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub w: u32,
    pub h: u32,
}

impl AspectRatio {
    /// Create a ratio; both components must be positive.
    pub fn new(w: u32, h: u32) -> Option<Self> {
        if w == 0 || h == 0 {
            None
        } else {
            Some(Self { w, h })
        }
    }

    /// The label used in exported file names, e.g. "16-9".
    pub fn file_label(&self) -> String {
        format!("{}-{}", self.w, self.h)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self { w: 16, h: 9 }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

/// Opaque identifier for a screen configuration.
///
/// Assigned by the engine in increasing order and never reused within a
/// session, so removing a screen does not renumber the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(pub u32);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration of one screen within the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub id: ScreenId,
    pub ratio: AspectRatio,
    /// Per-screen scale, combined multiplicatively with the global scale.
    pub local_scale: ScalePercent,
    /// Top-left corner of the crop rectangle in reference-resolution space.
    pub x: i32,
    pub y: i32,
}

impl ScreenConfig {
    pub fn new(id: ScreenId, params: ScreenParams) -> Self {
        Self {
            id,
            ratio: params.ratio,
            local_scale: params.local_scale,
            x: params.x,
            y: params.y,
        }
    }
}

/// Initial settings for a screen added to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenParams {
    pub ratio: AspectRatio,
    pub local_scale: ScalePercent,
    pub x: i32,
    pub y: i32,
}

impl Default for ScreenParams {
    fn default() -> Self {
        Self {
            ratio: AspectRatio::default(),
            local_scale: ScalePercent::NEUTRAL,
            x: 0,
            y: 0,
        }
    }
}

/// Partial update applied to an existing screen; `None` fields are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenUpdate {
    pub ratio: Option<AspectRatio>,
    pub local_scale: Option<ScalePercent>,
    pub position: Option<(i32, i32)>,
}
