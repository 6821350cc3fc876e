// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for screen configurations and global settings.

pub mod global;
pub mod screen;
