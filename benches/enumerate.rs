// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use triton::model::SessionDoc;
use triton::query::{topics, Section};

fn synthetic_session(topic_count: usize) -> String {
    let mut xml = String::from("<session><timeline>");
    for i in 0..topic_count {
        let _ = write!(
            xml,
            r#"<timepoint timepoint-id="T{i}" absolute-time="{}.5"/>"#,
            i * 3
        );
    }
    xml.push_str("</timeline><greeting>");
    for i in 0..topic_count {
        let _ = write!(
            xml,
            r#"<topic id="topic-{i}"><contribution start-reference="T{i}"/></topic>"#
        );
    }
    xml.push_str("</greeting></session>");
    xml
}

// Benchmark identity (keep stable):
// - Group names in this file: `format.parse_session`, `query.enumerate`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (e.g. `topics_16`, `topics_256`).
fn benches_enumerate(c: &mut Criterion) {
    let mut parse_group = c.benchmark_group("format.parse_session");
    for count in [16usize, 256] {
        let xml = synthetic_session(count);
        parse_group.throughput(Throughput::Bytes(xml.len() as u64));
        parse_group.bench_function(format!("topics_{count}"), |b| {
            b.iter(|| SessionDoc::parse(black_box(&xml)).expect("parse"))
        });
    }
    parse_group.finish();

    let mut enumerate_group = c.benchmark_group("query.enumerate");
    for count in [16usize, 256] {
        let xml = synthetic_session(count);
        let doc = SessionDoc::parse(&xml).expect("parse");
        enumerate_group.throughput(Throughput::Elements(count as u64));
        enumerate_group.bench_function(format!("topics_{count}"), move |b| {
            b.iter(|| {
                let records: Vec<_> = topics(black_box(&doc), Section::Greeting).collect();
                black_box(records)
            })
        });
    }
    enumerate_group.finish();
}

criterion_group!(benches, benches_enumerate);
criterion_main!(benches);
