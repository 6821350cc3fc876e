// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, owning the layout engine and coordinating the
//! UI panels with it.

use crate::engine::{ComputedCrop, ExportReport, ScreenLayoutEngine};
use crate::io::media::LoadedImage;
use crate::models::screen::ScreenParams;
use crate::ui::{canvas, global_panel, screens};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Main application state.
pub struct WallsplitApp {
    /// The layout engine owning global settings, screens and the image
    engine: ScreenLayoutEngine,

    /// Latest computed crop rectangles, refreshed after every mutation
    crops: Vec<ComputedCrop>,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// File name of the loaded image
    image_name: Option<String>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<(String, LoadedImage), String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Result of the last export, shown in a window until dismissed
    export_report: Option<(PathBuf, ExportReport)>,
}

impl Default for WallsplitApp {
    fn default() -> Self {
        Self::new()
    }
}

impl WallsplitApp {
    /// Create a new WALLSPLIT application instance.
    pub fn new() -> Self {
        Self {
            engine: ScreenLayoutEngine::new(),
            crops: Vec::new(),
            image_texture: None,
            image_size: None,
            image_name: None,
            image_loader: None,
            loading_message: None,
            export_report: None,
        }
    }

    /// Recompute all crop rectangles from the committed state.
    fn refresh_crops(&mut self) {
        self.crops = self.engine.recompute();
    }

    /// Load an image file and create a texture for display (asynchronously).
    fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = (|| -> Result<(String, LoadedImage), String> {
                let loaded = crate::io::media::load_image(&path)
                    .map_err(|e| format!("Failed to load image: {}", e))?;

                log::info!(
                    "Loaded image: {} ({}x{})",
                    path.display(),
                    loaded.width,
                    loaded.height
                );

                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());

                Ok((name, loaded))
            })();

            let _ = sender.send(result);
        });
    }

    /// Save the current layout to a file, format chosen by extension.
    fn save_layout(&self, path: PathBuf) {
        let layout = self.engine.snapshot();
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => crate::io::layout::export_yaml(&layout, &path),
            Some("json") => crate::io::layout::export_json(&layout, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(_) => log::info!("Saved layout to {}", path.display()),
            Err(e) => log::error!("Failed to save layout: {}", e),
        }
    }

    /// Load a layout file and replace the current screen list.
    fn load_layout(&mut self, path: PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let loaded = match extension {
            Some("yaml") | Some("yml") => crate::io::layout::import_yaml(&path),
            Some("json") => crate::io::layout::import_json(&path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match loaded {
            Ok(layout) => match self.engine.apply_layout(layout) {
                Ok(()) => {
                    log::info!("Loaded layout from {}", path.display());
                    self.refresh_crops();
                }
                Err(e) => log::error!("Rejected layout: {}", e),
            },
            Err(e) => log::error!("Failed to load layout: {}", e),
        }
    }

    /// Crop and export every screen into the chosen directory.
    fn extract_all(&mut self, out_dir: PathBuf) {
        match self.engine.export_all(&out_dir) {
            Ok(report) => {
                log::info!(
                    "Extraction finished: {} succeeded, {} failed",
                    report.succeeded(),
                    report.failed()
                );
                self.export_report = Some((out_dir, report));
            }
            Err(e) => log::error!("Extraction failed: {}", e),
        }
    }

    /// Show the export result window until the user dismisses it.
    fn show_export_result(&mut self, ctx: &egui::Context) {
        let Some((out_dir, report)) = &self.export_report else {
            return;
        };

        let mut open = true;
        let mut dismissed = false;
        egui::Window::new("Extraction Result")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                if report.succeeded() > 0 {
                    ui.label(format!(
                        "{} screen(s) extracted to {}",
                        report.succeeded(),
                        out_dir.display()
                    ));
                } else {
                    ui.label("No extraction succeeded");
                }
                ui.add_space(6.0);

                for (index, outcome) in report.outcomes.iter().enumerate() {
                    match &outcome.result {
                        Ok(path) => {
                            ui.label(format!(
                                "Screen {} ({}): {}",
                                index + 1,
                                outcome.ratio,
                                path.file_name()
                                    .map(|n| n.to_string_lossy())
                                    .unwrap_or_default()
                            ));
                        }
                        Err(e) => {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Screen {} ({}): {}",
                                    index + 1,
                                    outcome.ratio,
                                    e
                                ))
                                .color(egui::Color32::LIGHT_RED),
                            );
                        }
                    }
                }

                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if !open || dismissed {
            self.export_report = None;
        }
    }
}

impl eframe::App for WallsplitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image loading
        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;
                self.loading_message = None;

                match result {
                    Ok((name, loaded)) => {
                        // Create egui texture from the loaded image data
                        let size = [loaded.width as usize, loaded.height as usize];
                        let color_image =
                            egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                        let texture = ctx.load_texture(
                            "wallpaper",
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );

                        match self.engine.set_source_image(loaded.image) {
                            Ok(()) => {
                                self.image_texture = Some(texture);
                                self.image_size = Some((loaded.width, loaded.height));
                                self.image_name = Some(name);
                                self.refresh_crops();
                                log::info!("Image loaded successfully");
                            }
                            Err(e) => log::error!("Rejected image: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to load image: {}", e);
                    }
                }
            }
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        // Open native file picker
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "tiff"])
                            .pick_file()
                        {
                            self.load_image_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Save Layout", |ui| {
                        if ui.button("Save as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("layout.yaml")
                                .save_file()
                            {
                                self.save_layout(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Save as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("layout.json")
                                .save_file()
                            {
                                self.save_layout(path);
                            }
                            ui.close_menu();
                        }
                    });
                    if ui.button("Load Layout...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Layouts", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_layout(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Toolbar: image info and the extract button
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match (&self.image_name, self.image_size) {
                    (Some(name), Some((w, h))) => {
                        ui.label(format!("{} — {} × {} pixels", name, w, h));
                    }
                    _ => {
                        ui.label(egui::RichText::new("No image loaded").weak());
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_extract =
                        self.engine.has_source() && !self.engine.screens().is_empty();
                    if ui
                        .add_enabled(can_extract, egui::Button::new("EXTRACT ALL"))
                        .clicked()
                    {
                        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                            self.extract_all(dir);
                        } else {
                            log::info!("Extraction cancelled by user");
                        }
                    }
                });
            });
        });

        // Settings panel (left side)
        egui::SidePanel::left("settings")
            .default_width(320.0)
            .show(ctx, |ui| {
                let global_action = global_panel::show(ui, self.engine.global());
                match global_action {
                    global_panel::GlobalAction::SetReference(w, h) => {
                        if let Err(e) = self.engine.set_reference_resolution(w, h) {
                            log::error!("Invalid reference resolution: {}", e);
                        } else {
                            self.refresh_crops();
                        }
                    }
                    global_panel::GlobalAction::SetScale(scale) => {
                        self.engine.set_global_scale(scale);
                        self.refresh_crops();
                    }
                    global_panel::GlobalAction::None => {}
                }

                ui.separator();

                let screens_action = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        screens::show(ui, self.engine.screens(), &self.crops)
                    })
                    .inner;

                match screens_action {
                    screens::ScreensAction::Add => {
                        self.engine.add_screen(ScreenParams::default());
                        self.refresh_crops();
                    }
                    screens::ScreensAction::Remove(id) => {
                        if let Err(e) = self.engine.remove_screen(id) {
                            log::error!("Failed to remove screen: {}", e);
                        }
                        self.refresh_crops();
                    }
                    screens::ScreensAction::Update(id, update) => {
                        if let Err(e) = self.engine.update_screen(id, update) {
                            log::error!("Failed to update screen: {}", e);
                        }
                        self.refresh_crops();
                    }
                    screens::ScreensAction::None => {}
                }
            });

        // Preview canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            // Show loading overlay if loading
            if let Some(ref message) = self.loading_message {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            } else {
                canvas::show(
                    ui,
                    &self.image_texture,
                    self.image_size,
                    self.engine.screens(),
                    &self.crops,
                );
            }
        });

        // Export result window
        self.show_export_result(ctx);
    }
}
