// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview canvas.
//!
//! This module draws the loaded wallpaper scaled to fit the panel and
//! overlays each screen's crop rectangle in its assigned color, so the
//! user sees exactly what an export would produce.

use crate::engine::ComputedCrop;
use crate::models::screen::ScreenConfig;
use crate::ui::screen_color;

/// Display the preview canvas.
pub fn show(
    ui: &mut egui::Ui,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    screens: &[ScreenConfig],
    crops: &[ComputedCrop],
) {
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        if let (Some(texture), Some((img_width, img_height))) = (image_texture, image_size) {
            // Calculate scaling to fit the image in the available space
            let available = ui.available_size();
            let img_aspect = img_width as f32 / img_height as f32;
            let available_aspect = available.x / available.y;

            let (display_width, display_height) = if img_aspect > available_aspect {
                // Image is wider - fit to width
                let width = available.x;
                let height = width / img_aspect;
                (width, height)
            } else {
                // Image is taller - fit to height
                let height = available.y;
                let width = height * img_aspect;
                (width, height)
            };

            // Center the image
            let x_offset = (available.x - display_width) / 2.0;
            let y_offset = (available.y - display_height) / 2.0;

            let image_rect = egui::Rect::from_min_size(
                ui.min_rect().min + egui::vec2(x_offset, y_offset),
                egui::vec2(display_width, display_height),
            );

            // Draw the image
            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            // Draw crop rectangles on top of the image
            let painter = ui.painter();
            let display_scale = display_width / img_width as f32;

            for (index, screen) in screens.iter().enumerate() {
                let Some(crop) = crops.iter().find(|c| c.id == screen.id) else {
                    continue;
                };
                let Ok(rect) = &crop.rect else {
                    continue;
                };

                let color = screen_color(index);
                let screen_rect = egui::Rect::from_min_size(
                    image_rect.min
                        + egui::vec2(
                            rect.x as f32 * display_scale,
                            rect.y as f32 * display_scale,
                        ),
                    egui::vec2(
                        rect.width as f32 * display_scale,
                        rect.height as f32 * display_scale,
                    ),
                );

                painter.rect_stroke(screen_rect, 0.0, egui::Stroke::new(3.0, color));
                painter.text(
                    screen_rect.min + egui::vec2(5.0, 5.0),
                    egui::Align2::LEFT_TOP,
                    format!(
                        "Screen {}\n{}\n{}x{}\n({}, {})",
                        index + 1,
                        screen.ratio,
                        rect.width,
                        rect.height,
                        screen.x,
                        screen.y
                    ),
                    egui::FontId::proportional(12.0),
                    color,
                );
            }
        } else {
            // Show welcome message when no image is loaded
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("WALLSPLIT")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.label(
                        egui::RichText::new("Multi-Monitor Wallpaper Splitter")
                            .size(14.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Open a wallpaper to start laying out screens")
                            .color(egui::Color32::from_gray(180)),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("File → Open Image...")
                            .weak()
                            .color(egui::Color32::from_gray(130)),
                    );
                });
            });
        }
    });

    // Status line at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        match image_size {
            Some((w, h)) => ui.label(format!("Image: {} × {} pixels", w, h)),
            None => ui.label("No image loaded"),
        };
        ui.separator();
        ui.label(format!("{} screen(s)", screens.len()));
    });
}
