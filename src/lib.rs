// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton — session-log reader and terminal navigator for Folker-style
//! experiment XML files.
//!
//! The library half (`model`, `format`, `query`, `render`) extracts topic
//! records from session documents; `tui` is the interactive navigator the
//! binary runs against them.

pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod tui;
