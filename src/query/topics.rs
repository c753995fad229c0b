// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Topic enumeration and timepoint resolution.

use std::ops::RangeInclusive;

use smol_str::SmolStr;

use crate::model::{Element, SessionDoc, StartTime, TimepointError, TopicRecord};

use super::path::{select, Step};

const ROOT_NAME: &str = "session";

/// Phase numbering used by the last-minute section of the format.
pub const LAST_MINUTE_PHASES: RangeInclusive<u32> = 1..=6;

/// Selects one of the four fixed topic-bearing sections of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Greeting,
    InitialNarrative,
    LastMinutePhase(u32),
    Farewell,
}

/// Enumerates the topics of `section` in document order.
///
/// Absent sections, absent phases, and sections without topics all yield an
/// empty enumeration; none of these is an error.
pub fn topics<'doc>(doc: &'doc SessionDoc, section: Section) -> Topics<'doc> {
    Topics {
        doc,
        nodes: topic_nodes(doc, section).into_iter(),
    }
}

/// Invokes `callback` once per topic of `section`, synchronously and in
/// document order.
///
/// This mirrors the callback contract of the format's original consumers:
/// the whole section is enumerated with no early stop, and `start_time_ms`
/// is `-1` when no time is known.
pub fn for_each_topic<F>(doc: &SessionDoc, section: Section, mut callback: F)
where
    F: FnMut(Option<&str>, i64),
{
    for record in topics(doc, section) {
        callback(record.topic_id(), record.start_time_ms());
    }
}

/// Lazy, finite, document-ordered enumeration of one section's topics.
#[derive(Debug)]
pub struct Topics<'doc> {
    doc: &'doc SessionDoc,
    nodes: std::vec::IntoIter<&'doc Element>,
}

impl<'doc> Iterator for Topics<'doc> {
    type Item = TopicRecord;

    fn next(&mut self) -> Option<TopicRecord> {
        let node = self.nodes.next()?;
        Some(record_for(self.doc, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for Topics<'_> {}

fn topic_nodes<'doc>(doc: &'doc SessionDoc, section: Section) -> Vec<&'doc Element> {
    let root = doc.root();
    if root.name() != ROOT_NAME {
        return Vec::new();
    }

    match section {
        Section::Greeting => select(root, &[Step::Child("greeting"), Step::Child("topic")]),
        Section::InitialNarrative => select(
            root,
            &[
                Step::Child("experiment"),
                Step::Child("initial-narrative"),
                Step::Child("topic"),
            ],
        ),
        Section::LastMinutePhase(phase) => {
            let mut digits = itoa::Buffer::new();
            let phase = digits.format(phase);
            select(
                root,
                &[
                    Step::Child("experiment"),
                    Step::Child("last-minute"),
                    Step::ChildWhere {
                        name: "phase",
                        attr: "id",
                        value: phase,
                    },
                    Step::Child("topic"),
                ],
            )
        }
        Section::Farewell => select(root, &[Step::Child("farewell"), Step::Child("topic")]),
    }
}

fn record_for(doc: &SessionDoc, topic: &Element) -> TopicRecord {
    let topic_id = topic.attribute("id").map(SmolStr::new);

    // Only the first child element may anchor a topic in time. This is a
    // structural rule of the format, not a search; later children are never
    // consulted even when the first carries no reference.
    let start = match topic.first_child() {
        None => StartTime::Unanchored,
        Some(contribution) => match contribution.attribute("start-reference") {
            None => StartTime::Unresolved(TimepointError::MissingStartReference),
            Some(reference) => match resolve_timepoint(doc, reference) {
                Ok(ms) => StartTime::Anchored(ms),
                Err(err) => StartTime::Unresolved(err),
            },
        },
    };

    TopicRecord::new(topic_id, start)
}

/// Resolves a `start-reference` to milliseconds since session start.
///
/// The timeline entry's `absolute-time` attribute holds fractional seconds;
/// the result is scaled by 1000 and truncated toward zero. Every call
/// re-walks the timeline and nothing is cached; sessions are small enough
/// that the linear scan is the documented performance ceiling.
pub fn resolve_timepoint(doc: &SessionDoc, reference: &str) -> Result<i64, TimepointError> {
    let root = doc.root();
    if root.name() != ROOT_NAME {
        return Err(TimepointError::UnknownReference {
            reference: SmolStr::new(reference),
        });
    }

    let found = select(
        root,
        &[
            Step::Child("timeline"),
            Step::ChildWhere {
                name: "timepoint",
                attr: "timepoint-id",
                value: reference,
            },
        ],
    );
    let Some(timepoint) = found.first() else {
        return Err(TimepointError::UnknownReference {
            reference: SmolStr::new(reference),
        });
    };

    let Some(raw) = timepoint.attribute("absolute-time") else {
        return Err(TimepointError::MissingAbsoluteTime {
            reference: SmolStr::new(reference),
        });
    };

    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TimepointError::InvalidAbsoluteTime {
            reference: SmolStr::new(reference),
            value: raw.to_owned(),
        })?;
    if !seconds.is_finite() {
        return Err(TimepointError::InvalidAbsoluteTime {
            reference: SmolStr::new(reference),
            value: raw.to_owned(),
        });
    }

    Ok((seconds * 1000.0).trunc() as i64)
}
