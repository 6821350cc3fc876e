// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for images and layout files.

pub mod export;
pub mod layout;
pub mod media;
