// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout file serialization and deserialization.
//!
//! This module saves and restores a session layout (global settings plus
//! screen list) in YAML and JSON formats.

use crate::models::global::GlobalConfig;
use crate::models::screen::ScreenParams;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A serializable session layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutData {
    pub global: GlobalConfig,
    pub screens: Vec<ScreenParams>,
}

/// Export a layout to YAML format.
pub fn export_yaml(data: &LayoutData, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a layout to JSON format.
pub fn export_json(data: &LayoutData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a layout from YAML format.
pub fn import_yaml(path: &Path) -> Result<LayoutData> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import a layout from JSON format.
pub fn import_json(path: &Path) -> Result<LayoutData> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}
