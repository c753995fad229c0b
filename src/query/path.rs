// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed navigation steps over the element tree.
//!
//! Steps compare names and attribute values as plain strings; no query
//! expression is ever assembled from document data, so quote characters in
//! references or phase ids cannot change what a lookup selects.

use crate::model::Element;

/// One root-relative navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step<'a> {
    /// All child elements with the given tag name.
    Child(&'a str),
    /// Child elements with the given tag name whose attribute `attr`
    /// equals `value`.
    ChildWhere {
        name: &'a str,
        attr: &'a str,
        value: &'a str,
    },
}

/// Collects the elements reached by walking `steps` down from `root`, in
/// document order. Missing intermediate sections simply yield nothing.
pub(crate) fn select<'doc>(root: &'doc Element, steps: &[Step<'_>]) -> Vec<&'doc Element> {
    let mut current = vec![root];

    for step in steps {
        let mut next = Vec::new();
        for element in current {
            for child in element.children() {
                if step_matches(step, child) {
                    next.push(child);
                }
            }
        }
        current = next;
    }

    current
}

fn step_matches(step: &Step<'_>, element: &Element) -> bool {
    match *step {
        Step::Child(name) => element.name() == name,
        Step::ChildWhere { name, attr, value } => {
            element.name() == name && element.attribute(attr) == Some(value)
        }
    }
}
