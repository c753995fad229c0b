// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session document is an immutable owned element tree plus the record
//! types topic enumeration produces from it.

pub mod dom;
pub mod session;
pub mod topic;

pub use dom::Element;
pub use session::SessionDoc;
pub use topic::{StartTime, TimepointError, TopicRecord, NO_START_TIME};
