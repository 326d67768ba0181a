use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsontree_core::{parse, stringify, Value};
use std::hint::black_box;

/// Build an array of `n` small records.
fn records_json(n: usize) -> String {
    let records = (0..n).map(|i| {
        Value::object_from([
            ("id", Value::int(i as i64)),
            ("name", Value::string(format!("user-{i}"))),
            ("score", Value::number(i as f64 * 1.25 + 0.5)),
            ("active", Value::bool(i % 2 == 0)),
            ("tags", Value::array_from([Value::string("a"), Value::Null])),
        ])
    });
    stringify(&Value::array_from(records))
}

/// Build `depth` levels of nested single-element arrays.
fn nested_json(depth: usize) -> String {
    "[".repeat(depth) + "0" + &"]".repeat(depth)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [10, 100, 1000] {
        let json = records_json(n);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("records", n), &json, |b, json| {
            b.iter(|| parse(black_box(json)).unwrap())
        });
    }
    let nested = nested_json(500);
    group.bench_function("nested_500", |b| {
        b.iter(|| parse(black_box(&nested)).unwrap())
    });
    group.finish();
}

fn bench_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");
    for n in [10, 100, 1000] {
        let value = parse(&records_json(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("records", n), &value, |b, value| {
            b.iter(|| stringify(black_box(value)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_stringify);
criterion_main!(benches);
