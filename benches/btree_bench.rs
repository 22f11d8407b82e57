//! Index build and lookup benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabledb::{BTree, RowId, Table};

fn build_table(rows: usize) -> Table {
    let header = vec!["id".to_string(), "bucket".to_string()];
    let rows = (0..rows)
        .map(|i| vec![format!("k{:08}", (i * 7919) % rows), (i % 64).to_string()])
        .collect();
    Table::new("bench", header, rows)
}

fn build_index(table: &Table, column: usize, order: usize) -> BTree<String, RowId> {
    let mut index = BTree::new(order);
    for (value, row_id) in table.column_values(column) {
        index.insert(value.to_string(), row_id);
    }
    index
}

fn bench_build(c: &mut Criterion) {
    let table = build_table(100_000);
    let mut group = c.benchmark_group("build_index");
    for order in [2, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| build_index(black_box(&table), 0, order))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let table = build_table(100_000);
    let index = build_index(&table, 0, 16);
    let probe = "k00050000";

    let mut group = c.benchmark_group("lookup");
    group.bench_function("index", |b| b.iter(|| index.search(black_box(probe)).len()));
    group.bench_function("scan", |b| b.iter(|| table.scan(0, black_box(probe)).len()));
    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
