// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end checks over a complete session document, including the
//! file-based `open` path.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use triton::format::XmlParseError;
use triton::model::{SessionDoc, StartTime, NO_START_TIME};
use triton::query::{for_each_topic, topics, Section};

const SESSION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<session>
  <timeline>
    <timepoint timepoint-id="T0" absolute-time="0.0"/>
    <timepoint timepoint-id="T1" absolute-time="5.25"/>
    <timepoint timepoint-id="T2" absolute-time="61.5"/>
  </timeline>
  <greeting>
    <topic id="intro">
      <contribution start-reference="T0" speaker="A"/>
    </topic>
    <topic id="smalltalk"/>
  </greeting>
  <experiment>
    <initial-narrative>
      <topic id="narrative">
        <contribution start-reference="T1"/>
      </topic>
    </initial-narrative>
    <last-minute>
      <phase id="1">
        <topic id="countdown">
          <contribution start-reference="T2"/>
        </topic>
      </phase>
    </last-minute>
  </experiment>
  <farewell>
    <topic id="bye">
      <contribution start-reference="T9"/>
    </topic>
  </farewell>
</session>
"#;

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn with_contents(prefix: &str, contents: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("triton-{prefix}-{}-{nanos}.xml", std::process::id()));
        fs::write(&path, contents).expect("write temp session file");
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn open_then_enumerate_every_section() {
    let file = TempFile::with_contents("full", SESSION);
    let doc = SessionDoc::open(&file.path).expect("open");

    let greeting: Vec<(Option<String>, i64)> = topics(&doc, Section::Greeting)
        .map(|r| (r.topic_id().map(str::to_owned), r.start_time_ms()))
        .collect();
    assert_eq!(
        greeting,
        [
            (Some("intro".to_owned()), 0),
            (Some("smalltalk".to_owned()), NO_START_TIME),
        ]
    );

    let narrative: Vec<i64> = topics(&doc, Section::InitialNarrative)
        .map(|r| r.start_time_ms())
        .collect();
    assert_eq!(narrative, [5250]);

    let countdown: Vec<i64> = topics(&doc, Section::LastMinutePhase(1))
        .map(|r| r.start_time_ms())
        .collect();
    assert_eq!(countdown, [61_500]);

    // The farewell reference is dangling: the record survives, carries the
    // failure, and maps to the sentinel on the wire.
    let farewell: Vec<_> = topics(&doc, Section::Farewell).collect();
    assert_eq!(farewell.len(), 1);
    assert!(matches!(
        farewell[0].start(),
        StartTime::Unresolved(_)
    ));
    assert_eq!(farewell[0].start_time_ms(), NO_START_TIME);
}

#[test]
fn callback_contract_over_an_opened_file() {
    let file = TempFile::with_contents("callback", SESSION);
    let doc = SessionDoc::open(&file.path).expect("open");

    let mut calls = Vec::new();
    for_each_topic(&doc, Section::Greeting, |topic_id, start_time_ms| {
        calls.push((topic_id.map(str::to_owned), start_time_ms));
    });

    assert_eq!(
        calls,
        [
            (Some("intro".to_owned()), 0),
            (Some("smalltalk".to_owned()), -1),
        ]
    );
}

#[test]
fn open_rejects_missing_and_malformed_files() {
    let missing = SessionDoc::open("/nonexistent/triton-missing-session.xml");
    assert!(matches!(missing, Err(XmlParseError::Io { .. })));

    let file = TempFile::with_contents("malformed", "<session><greeting></session>");
    assert!(SessionDoc::open(&file.path).is_err());
}
