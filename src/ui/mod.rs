// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the WALLSPLIT application.

pub mod canvas;
pub mod global_panel;
pub mod screens;

/// Overlay colors assigned to screens by display index.
const SCREEN_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(0xCC, 0x97, 0x09),
    egui::Color32::from_rgb(0xC7, 0x44, 0x05),
    egui::Color32::from_rgb(0xCC, 0x00, 0x58),
    egui::Color32::from_rgb(0x69, 0x2E, 0xCC),
    egui::Color32::from_rgb(0x2F, 0x6E, 0xCC),
    egui::Color32::from_rgb(0x08, 0x0E, 0x24),
];

/// Color for the screen at the given display index.
pub fn screen_color(index: usize) -> egui::Color32 {
    SCREEN_COLORS[index % SCREEN_COLORS.len()]
}
