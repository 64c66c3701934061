//! Performance benchmarks for tirea-data record helpers.
//!
//! Run with: cargo bench --package tirea-data

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use std::hint::black_box;
use tirea_data::{obj, Path};

// ============================================================================
// Helper functions to generate test data
// ============================================================================

/// Generate a flat record with N fields
fn generate_flat_doc(num_fields: usize) -> Value {
    let mut record = obj::Record::new();
    for i in 0..num_fields {
        record.insert(format!("field_{}", i), json!(i));
    }
    Value::Object(record)
}

/// Generate a nested record `level_0.level_1...` of the given depth
fn generate_nested_doc(depth: usize) -> (Value, Path) {
    let mut current = json!({"value": 42});
    for i in (0..depth).rev() {
        current = obj::key_value(format!("level_{}", i), current);
    }
    let path = (0..depth)
        .map(|i| format!("level_{}", i))
        .chain(std::iter::once("value".to_string()))
        .collect();
    (current, path)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_patch_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("patch_flat_doc");
    for size in [10, 100, 1000] {
        let doc = generate_flat_doc(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| obj::patch(black_box(doc), "field_0", json!(-1)))
        });
    }
    group.finish();
}

fn bench_patch_and_sub_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_doc");
    for depth in [5, 20, 50] {
        let (doc, path) = generate_nested_doc(depth);
        group.bench_with_input(BenchmarkId::new("patch", depth), &doc, |b, doc| {
            b.iter(|| obj::patch(black_box(doc), &path, json!(0)))
        });
        group.bench_with_input(BenchmarkId::new("sub", depth), &doc, |b, doc| {
            b.iter(|| obj::sub(black_box(doc), &path).cloned())
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    for size in [10, 100, 1000] {
        let doc = generate_flat_doc(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            let record = doc.as_object().cloned().unwrap_or_default();
            b.iter(|| obj::traverse(black_box(&record), |_, v, _, _| v.clone()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_patch_flat, bench_patch_and_sub_nested, bench_traverse);
criterion_main!(benches);
