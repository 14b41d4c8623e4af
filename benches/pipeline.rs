//! Pipeline benchmarks (classification, counting, accuracy)
//!
//! Run with: cargo bench --bench pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sense_eval::aggregate::count_buckets;
use sense_eval::experiment::classify;
use sense_eval::pipeline::evaluate_column;
use sense_eval::record::Record;
use sense_eval::storage::RecordTable;

const SMALL_SIZE: usize = 1_000; // 1K triples
const MEDIUM_SIZE: usize = 100_000; // 100K triples

const COLUMN: &str = "Bas1";
const CONTEXTS: [&str; 4] = ["diff|diff|diff", "same|same|same", "diff|same|diff", "same|diff|same"];
const OVERLAPS: [&str; 4] = [
    "true|true|true",
    "false|false|false",
    "true|false|false",
    "false|true|false",
];
const POS: [&str; 2] = ["same|same|same", "diff|diff|diff"];

/// Deterministic table cycling through the pattern vocabulary
fn make_table(size: usize) -> RecordTable {
    let records = (0..size)
        .map(|i| {
            Record::builder("bat")
                .context(CONTEXTS[i % CONTEXTS.len()])
                .overlap(OVERLAPS[(i / 4) % OVERLAPS.len()])
                .pos(POS[(i / 16) % POS.len()])
                .sentence1("The <b>bats</b> flew out.")
                .outcome(COLUMN, if i % 3 == 0 { "wrong" } else { "correct" })
                .build()
        })
        .collect();
    RecordTable::new(records, vec![COLUMN.to_string()])
}

/// Benchmark bucket classification alone
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let table = make_table(size);
        group.bench_with_input(BenchmarkId::new("classify", size), &table, |b, table| {
            b.iter(|| classify(black_box(table)));
        });
    }

    group.finish();
}

/// Benchmark counting over already-classified buckets
fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_buckets");

    let table = make_table(MEDIUM_SIZE);
    let buckets = classify(&table);
    group.bench_function(BenchmarkId::new("count_buckets", MEDIUM_SIZE), |b| {
        b.iter(|| count_buckets(black_box(&buckets), COLUMN));
    });

    group.finish();
}

/// Benchmark the full per-column pipeline
fn bench_evaluate_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_column");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let table = make_table(size);
        group.bench_with_input(BenchmarkId::new("evaluate_column", size), &table, |b, table| {
            b.iter(|| evaluate_column(black_box(table), COLUMN));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_count, bench_evaluate_column);
criterion_main!(benches);
