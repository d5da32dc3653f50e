//! Storage helper benchmarks.
//!
//! Benchmarks:
//! - Core get/set on the memory backend
//! - Key enumeration and prefix filtering
//! - JSON and TTL round trips
//!
//! Run with:
//! ```bash
//! cargo bench --bench storage_ops
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kvstash::{MemoryBackend, Storage};
use std::hint::black_box;
use std::time::Duration;

fn seeded(count: usize) -> Storage {
    Storage::custom(
        (0..count)
            .map(|i| (format!("user:{i}"), format!("value-{i}")))
            .collect::<MemoryBackend>(),
    )
}

fn core_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("core");
    group.measurement_time(Duration::from_secs(5));

    let storage = seeded(1_000);

    group.bench_function("get", |b| {
        b.iter(|| storage.get(black_box("user:500")).unwrap())
    });

    group.bench_function("set", |b| {
        b.iter(|| storage.set(black_box("user:500"), black_box("updated")).unwrap())
    });

    group.bench_function("json_round_trip", |b| {
        b.iter(|| {
            storage.set_json("json", black_box(&vec![1, 2, 3])).unwrap();
            storage.get_json::<Vec<u32>>("json").unwrap()
        })
    });

    group.bench_function("ttl_round_trip", |b| {
        b.iter(|| {
            storage.set_with_ttl("ttl", black_box("v"), 60_000).unwrap();
            storage.get_with_ttl("ttl").unwrap()
        })
    });

    group.finish();
}

fn bulk_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    group.measurement_time(Duration::from_secs(5));

    for count in [10, 100, 1_000] {
        let storage = seeded(count);
        group.bench_with_input(BenchmarkId::new("filter_keys", count), &storage, |b, s| {
            b.iter(|| s.filter_keys(|k| k.ends_with('7')).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, core_benchmarks, bulk_benchmarks);
criterion_main!(benches);
