// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global settings panel.
//!
//! This module provides the controls for the reference resolution and
//! the global scale slider.

use crate::models::global::{GlobalConfig, ScalePercent};

/// Result of global panel interaction.
pub enum GlobalAction {
    None,
    SetReference(u32, u32),
    SetScale(ScalePercent),
}

/// Display the global settings controls.
pub fn show(ui: &mut egui::Ui, global: &GlobalConfig) -> GlobalAction {
    let mut action = GlobalAction::None;

    ui.heading("Global Settings");
    ui.add_space(4.0);

    ui.label(egui::RichText::new("Reference Resolution").weak());
    ui.horizontal(|ui| {
        let mut width = global.reference_width;
        let mut height = global.reference_height;

        let width_changed = ui
            .add(egui::DragValue::new(&mut width).range(1..=16384).speed(10))
            .changed();
        ui.label("×");
        let height_changed = ui
            .add(egui::DragValue::new(&mut height).range(1..=16384).speed(10))
            .changed();

        if width_changed || height_changed {
            action = GlobalAction::SetReference(width, height);
        }
    });

    ui.add_space(8.0);

    let mut percent = global.scale.percent();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Scale").weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{}% (×{:.2})",
                    percent,
                    global.scale.factor()
                ))
                .strong(),
            );
        });
    });
    if ui
        .add(egui::Slider::new(&mut percent, 0..=100).show_value(false))
        .changed()
    {
        action = GlobalAction::SetScale(ScalePercent::new(percent));
    }
    ui.label(
        egui::RichText::new("0% = ×0.5  •  50% = ×1.0  •  100% = ×2.0")
            .small()
            .weak(),
    );

    action
}
