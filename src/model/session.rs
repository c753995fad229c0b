// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use crate::format::xml::{parse_document, XmlParseError};

use super::dom::Element;

/// A loaded session document: the top-level container queries run against.
///
/// The document is parsed eagerly and the resulting tree is immutable; no
/// `&mut` accessor is exposed and dropping the `SessionDoc` releases it.
/// Loading performs no schema validation, so a well-formed file with an
/// unexpected structure opens fine and simply yields empty query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDoc {
    root: Element,
}

impl SessionDoc {
    /// Reads and parses a session file. Fails on I/O errors and on XML that
    /// is not well-formed; nothing else is rejected at load time.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, XmlParseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| XmlParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses a session document from an in-memory string.
    pub fn parse(text: &str) -> Result<Self, XmlParseError> {
        Ok(Self {
            root: parse_document(text)?,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionDoc, XmlParseError};

    #[test]
    fn parse_accepts_well_formed_but_unexpected_structure() {
        let doc = SessionDoc::parse("<inventory><item/></inventory>").expect("parse");
        assert_eq!(doc.root().name(), "inventory");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(SessionDoc::parse("<session><greeting></session>").is_err());
        assert!(SessionDoc::parse("").is_err());
    }

    #[test]
    fn open_surfaces_io_failure_for_missing_files() {
        let result = SessionDoc::open("/nonexistent/triton-no-such-session.xml");
        assert!(matches!(result, Err(XmlParseError::Io { .. })));
    }
}
