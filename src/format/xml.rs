// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Event-stream XML parsing into the owned element tree.

use std::fmt;
use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use smol_str::SmolStr;

use crate::model::Element;

#[derive(Debug)]
pub enum XmlParseError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Xml {
        position: usize,
        source: quick_xml::Error,
    },
    Attr {
        position: usize,
        source: AttrError,
    },
    UnexpectedClose {
        position: usize,
        name: String,
    },
    UnclosedElement {
        name: String,
    },
    MultipleRoots {
        position: usize,
    },
    NoRootElement,
}

impl fmt::Display for XmlParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Xml { position, source } => {
                write!(f, "xml error at byte {position}: {source}")
            }
            Self::Attr { position, source } => {
                write!(f, "attribute error at byte {position}: {source}")
            }
            Self::UnexpectedClose { position, name } => {
                write!(f, "closing tag </{name}> at byte {position} has no opener")
            }
            Self::UnclosedElement { name } => {
                write!(f, "document ended with <{name}> still open")
            }
            Self::MultipleRoots { position } => {
                write!(f, "second root element at byte {position}")
            }
            Self::NoRootElement => f.write_str("document contains no root element"),
        }
    }
}

impl std::error::Error for XmlParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Xml { source, .. } => Some(source),
            Self::Attr { source, .. } => Some(source),
            Self::UnexpectedClose { .. }
            | Self::UnclosedElement { .. }
            | Self::MultipleRoots { .. }
            | Self::NoRootElement => None,
        }
    }
}

/// Parses a whole document eagerly and returns its root element.
///
/// Text nodes, CDATA, comments, and processing instructions are dropped;
/// only the element structure and attributes survive into the tree.
pub(crate) fn parse_document(text: &str) -> Result<Element, XmlParseError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref tag)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlParseError::MultipleRoots { position });
                }
                stack.push(element_from_tag(tag, position)?);
            }
            Ok(Event::Empty(ref tag)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlParseError::MultipleRoots { position });
                }
                let element = element_from_tag(tag, position)?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::End(ref tag)) => {
                let Some(element) = stack.pop() else {
                    return Err(XmlParseError::UnexpectedClose {
                        position,
                        name: String::from_utf8_lossy(tag.name().as_ref()).into_owned(),
                    });
                };
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => return Err(XmlParseError::Xml { position, source }),
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(XmlParseError::UnclosedElement {
            name: open.name().to_owned(),
        });
    }

    root.ok_or(XmlParseError::NoRootElement)
}

fn element_from_tag(tag: &BytesStart<'_>, position: usize) -> Result<Element, XmlParseError> {
    let mut element = Element::new(SmolStr::new(String::from_utf8_lossy(tag.name().as_ref())));

    for attr in tag.attributes() {
        let attr = attr.map_err(|source| XmlParseError::Attr { position, source })?;
        let name = SmolStr::new(String::from_utf8_lossy(attr.key.as_ref()));
        let value = attr
            .unescape_value()
            .map_err(|source| XmlParseError::Xml { position, source })?
            .into_owned();
        element.push_attribute(name, value);
    }

    Ok(element)
}
