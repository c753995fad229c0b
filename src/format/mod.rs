// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire formats.
//!
//! Session documents arrive as XML; parsing builds the owned element tree
//! the model exposes.

pub mod xml;

pub use xml::XmlParseError;
