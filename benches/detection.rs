//! Benchmarks for detection scans.
//!
//! Benchmark targets:
//! - 100 contacts, pairwise: <5ms
//! - 1,000 contacts, pairwise: <250ms
//! - 1,000 contacts, bucketed: <20ms
//!
//! Snapshots are synthesized with roughly 10% duplicate density so the
//! accumulation path is exercised, not just the predicate rejections.

// Criterion macros generate items without docs - this is expected for benchmarks
// Benchmarks use expect/unwrap for simplicity - panics are acceptable in benchmarks
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use contact_dedup::services::detection::{
    DetectionConfig, DetectionService, EngineKind, StrategyKind,
};
use contact_dedup::ContactRecord;

/// Builds a snapshot where every tenth contact repeats an earlier name and
/// every twentieth repeats an earlier phone number.
fn synth_snapshot(n: usize) -> Vec<ContactRecord> {
    (0..n)
        .map(|i| {
            let name = if i % 10 == 9 {
                format!("Duplicate Name {}", i / 100)
            } else {
                format!("Contact {i}")
            };
            let phone = if i % 20 == 19 {
                format!("555-{:04}", i / 200)
            } else {
                format!("555-1{i:06}")
            };
            ContactRecord::new(format!("{i:06}"), name, [phone])
        })
        .collect()
}

fn bench_pairwise_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_scan");
    for size in [100, 1_000] {
        let contacts = synth_snapshot(size);
        let service = DetectionService::new(
            DetectionConfig::default().with_snapshot_limit(None),
        );
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| service.detect(std::hint::black_box(contacts)));
        });
    }
    group.finish();
}

fn bench_bucketed_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucketed_scan");
    for size in [100, 1_000, 10_000] {
        let contacts = synth_snapshot(size);
        let service = DetectionService::new(
            DetectionConfig::default()
                .with_snapshot_limit(None)
                .with_engine(EngineKind::Bucketed),
        );
        group.bench_with_input(BenchmarkId::from_parameter(size), &contacts, |b, contacts| {
            b.iter(|| service.detect(std::hint::black_box(contacts)));
        });
    }
    group.finish();
}

fn bench_partitioned_scan(c: &mut Criterion) {
    let contacts = synth_snapshot(1_000);
    let mut group = c.benchmark_group("partitioned_scan");
    for workers in [1usize, 2, 4] {
        let service = DetectionService::new(
            DetectionConfig::default()
                .with_snapshot_limit(None)
                .with_workers(NonZeroUsize::new(workers).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &contacts,
            |b, contacts| {
                b.iter(|| service.detect(std::hint::black_box(contacts)));
            },
        );
    }
    group.finish();
}

fn bench_normalized_strategy(c: &mut Criterion) {
    let contacts = synth_snapshot(1_000);
    let service = DetectionService::new(
        DetectionConfig::default()
            .with_snapshot_limit(None)
            .with_strategy(StrategyKind::Normalized)
            .with_engine(EngineKind::Bucketed),
    );
    c.bench_function("normalized_bucketed_1000", |b| {
        b.iter(|| service.detect(std::hint::black_box(&contacts)));
    });
}

criterion_group!(
    benches,
    bench_pairwise_scan,
    bench_bucketed_scan,
    bench_partitioned_scan,
    bench_normalized_strategy
);
criterion_main!(benches);
