// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over session documents.
//!
//! Queries provide derived views (topic enumeration, timepoint resolution)
//! that power the TUI and the CLI dump mode.

pub(crate) mod path;
pub mod topics;


pub use topics::{
    for_each_topic, resolve_timepoint, topics, Section, Topics, LAST_MINUTE_PHASES,
};
