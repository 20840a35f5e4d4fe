use std::sync::Arc;

use chrono::{FixedOffset, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use resonance_rs::{
    ContentCandidate, ContentRequest, Element, ElementalProfile, InMemoryStore, SelectionCriteria,
    SnapshotRequest, TimingEngine, UserElementInput,
};

fn snapshot_bench(c: &mut Criterion) {
    let engine = TimingEngine::with_defaults(Arc::new(InMemoryStore::new()));
    let sunrise = Utc.with_ymd_and_hms(2024, 3, 17, 6, 0, 0).unwrap();
    let sunset = Utc.with_ymd_and_hms(2024, 3, 17, 18, 0, 0).unwrap();
    let next_sunrise = Utc.with_ymd_and_hms(2024, 3, 18, 6, 0, 0).unwrap();
    let offset = FixedOffset::east_opt(3600).unwrap();
    let request = SnapshotRequest {
        now: sunrise + chrono::TimeDelta::minutes(135),
        sunrise,
        sunset,
        next_sunrise,
        utc_offset: offset,
        user: UserElementInput {
            profile: Some(ElementalProfile::new(Element::Air)),
            fallback: None,
        },
        content: Some(ContentRequest {
            category: "reflection".into(),
            candidates: (0..32)
                .map(|i| ContentCandidate::new(format!("c{i}"), ["reflection"]))
                .collect(),
            criteria: SelectionCriteria::with_tags(["reflection"]),
        }),
    };

    c.bench_function("snapshot_synthetic", |b| {
        b.iter(|| engine.snapshot(black_box(&request)))
    });
}

criterion_group!(benches, snapshot_bench);
criterion_main!(benches);
