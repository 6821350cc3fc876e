// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen list editor panel.
//!
//! This module provides the per-screen controls (aspect ratio, position,
//! local scale) plus add/remove buttons. Edits are reported back to the
//! application as actions and applied through the layout engine.

use crate::engine::ComputedCrop;
use crate::models::global::ScalePercent;
use crate::models::screen::{AspectRatio, ScreenConfig, ScreenId, ScreenUpdate};
use crate::ui::screen_color;

/// Result of screen list interaction.
pub enum ScreensAction {
    None,
    Add,
    Remove(ScreenId),
    Update(ScreenId, ScreenUpdate),
}

/// Display the screen list and its controls.
pub fn show(
    ui: &mut egui::Ui,
    screens: &[ScreenConfig],
    crops: &[ComputedCrop],
) -> ScreensAction {
    let mut action = ScreensAction::None;

    ui.horizontal(|ui| {
        ui.heading("Screens");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ Add").clicked() {
                action = ScreensAction::Add;
            }
        });
    });
    ui.add_space(4.0);

    if screens.is_empty() {
        ui.label(egui::RichText::new("No screens configured").weak());
        return action;
    }

    for (index, screen) in screens.iter().enumerate() {
        let color = screen_color(index);
        let crop = crops.iter().find(|c| c.id == screen.id);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Screen {}", index + 1))
                        .color(color)
                        .strong(),
                );
                match crop.map(|c| &c.rect) {
                    Some(Ok(rect)) => {
                        ui.label(format!(
                            "{} • {}x{}",
                            screen.ratio, rect.width, rect.height
                        ));
                    }
                    Some(Err(_)) => {
                        ui.label(
                            egui::RichText::new(format!("{} • out of bounds", screen.ratio))
                                .color(egui::Color32::LIGHT_RED),
                        );
                    }
                    None => {
                        ui.label(screen.ratio.to_string());
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        action = ScreensAction::Remove(screen.id);
                    }
                });
            });

            let mut update = ScreenUpdate::default();

            ui.horizontal(|ui| {
                ui.label("Ratio:");
                let mut ratio_w = screen.ratio.w;
                let mut ratio_h = screen.ratio.h;
                let w_changed = ui
                    .add(egui::DragValue::new(&mut ratio_w).range(1..=1000))
                    .changed();
                ui.label(":");
                let h_changed = ui
                    .add(egui::DragValue::new(&mut ratio_h).range(1..=1000))
                    .changed();
                if w_changed || h_changed {
                    // DragValue ranges keep both components positive.
                    if let Some(ratio) = AspectRatio::new(ratio_w, ratio_h) {
                        update.ratio = Some(ratio);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Position:");
                let mut x = screen.x;
                let mut y = screen.y;
                let x_changed = ui
                    .add(egui::DragValue::new(&mut x).prefix("X: ").speed(5))
                    .changed();
                let y_changed = ui
                    .add(egui::DragValue::new(&mut y).prefix("Y: ").speed(5))
                    .changed();
                if x_changed || y_changed {
                    update.position = Some((x, y));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Scale:");
                let mut percent = screen.local_scale.percent();
                if ui
                    .add(egui::Slider::new(&mut percent, 0..=100).suffix("%"))
                    .changed()
                {
                    update.local_scale = Some(ScalePercent::new(percent));
                }
            });

            if update != ScreenUpdate::default() {
                action = ScreensAction::Update(screen.id, update);
            }
        });
        ui.add_space(6.0);
    }

    action
}
