// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// Wire sentinel for "no time available", distinct from `0` (session start).
pub const NO_START_TIME: i64 = -1;

/// One topic as produced by section enumeration: the topic's `id` attribute
/// (if any) and its resolved start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRecord {
    topic_id: Option<SmolStr>,
    start: StartTime,
}

impl TopicRecord {
    pub(crate) fn new(topic_id: Option<SmolStr>, start: StartTime) -> Self {
        Self { topic_id, start }
    }

    pub fn topic_id(&self) -> Option<&str> {
        self.topic_id.as_deref()
    }

    pub fn start(&self) -> &StartTime {
        &self.start
    }

    /// The start time in the session wire contract: milliseconds since
    /// session start, or [`NO_START_TIME`] when no time is known.
    pub fn start_time_ms(&self) -> i64 {
        self.start.as_millis()
    }
}

/// Where a topic sits on the session timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartTime {
    /// Resolved through the timeline; milliseconds since session start.
    Anchored(i64),
    /// The topic has no contribution child that could anchor it.
    Unanchored,
    /// The topic's contribution names a reference the timeline cannot
    /// resolve. Carried per record so one bad reference does not discard
    /// the rest of a well-formed session.
    Unresolved(TimepointError),
}

impl StartTime {
    /// Collapses to the wire contract: anchored times pass through, both
    /// "no contribution" and "unresolvable reference" map to the sentinel.
    pub fn as_millis(&self) -> i64 {
        match self {
            Self::Anchored(ms) => *ms,
            Self::Unanchored | Self::Unresolved(_) => NO_START_TIME,
        }
    }

    pub fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored(_))
    }
}

/// Why a `start-reference` could not be turned into a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimepointError {
    /// The topic's first child carries no `start-reference` attribute.
    MissingStartReference,
    /// No timeline entry has a matching `timepoint-id`.
    UnknownReference { reference: SmolStr },
    /// The matching timepoint has no `absolute-time` attribute.
    MissingAbsoluteTime { reference: SmolStr },
    /// The `absolute-time` attribute is not a finite number of seconds.
    InvalidAbsoluteTime { reference: SmolStr, value: String },
}

impl fmt::Display for TimepointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartReference => {
                f.write_str("contribution carries no start-reference attribute")
            }
            Self::UnknownReference { reference } => {
                write!(f, "no timepoint with timepoint-id {reference:?}")
            }
            Self::MissingAbsoluteTime { reference } => {
                write!(f, "timepoint {reference:?} has no absolute-time attribute")
            }
            Self::InvalidAbsoluteTime { reference, value } => write!(
                f,
                "timepoint {reference:?} has non-numeric absolute-time {value:?}"
            ),
        }
    }
}

impl std::error::Error for TimepointError {}
