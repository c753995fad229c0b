// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// One element of a parsed session document.
///
/// Only element nodes are materialized; text, comments, and processing
/// instructions are dropped at parse time. Attribute order and child order
/// follow the document, so "first child" is deterministic regardless of how
/// the source file was whitespace-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: SmolStr,
    attributes: Vec<(SmolStr, String)>,
    children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute value by name. Absent attributes are `None`,
    /// never an error.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }

    pub(crate) fn push_attribute(&mut self, name: SmolStr, value: String) {
        self.attributes.push((name, value));
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}
