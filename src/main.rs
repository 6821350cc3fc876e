// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! WALLSPLIT - Multi-Monitor Wallpaper Splitter
//!
//! A cross-platform desktop application for cropping a single wallpaper
//! into per-monitor images with custom aspect ratios, scales and positions.

mod app;
mod engine;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::WallsplitApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("WALLSPLIT - Multi-Monitor Wallpaper Splitter"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "WALLSPLIT",
        options,
        Box::new(|_cc| Ok(Box::new(WallsplitApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
