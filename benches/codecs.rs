use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qslist::{IntegerCodec, ListCodec, StringCodec};

fn string_items(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("item-{i}")).collect()
}

fn escaped_items(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("item, number {i}")).collect()
}

fn benchmark_serialize_strings(c: &mut Criterion) {
    let codec = ListCodec::new(StringCodec);
    let mut group = c.benchmark_group("serialize_strings");
    for size in [10, 100, 1000] {
        let items = string_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| codec.serialize(black_box(items)).unwrap());
        });
    }
    group.finish();
}

fn benchmark_serialize_with_escaping(c: &mut Criterion) {
    let codec = ListCodec::new(StringCodec);
    let items = escaped_items(100);
    c.bench_function("serialize_escaped_100", |b| {
        b.iter(|| codec.serialize(black_box(&items)).unwrap());
    });
}

fn benchmark_parse_strings(c: &mut Criterion) {
    let codec = ListCodec::new(StringCodec);
    let mut group = c.benchmark_group("parse_strings");
    for size in [10, 100, 1000] {
        let encoded = codec.serialize(&string_items(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| codec.parse(black_box(encoded)));
        });
    }
    group.finish();
}

fn benchmark_parse_integers(c: &mut Criterion) {
    let codec = ListCodec::new(IntegerCodec::new());
    let encoded = codec
        .serialize(&(0..100).map(|i| i * 37).collect::<Vec<i64>>())
        .unwrap();
    c.bench_function("parse_integers_100", |b| {
        b.iter(|| codec.parse(black_box(&encoded)));
    });
}

fn benchmark_equality(c: &mut Criterion) {
    let codec = ListCodec::new(StringCodec);
    let a = string_items(100);
    let mut b_items = string_items(100);
    b_items.reverse();
    c.bench_function("equal_reversed_100", |b| {
        b.iter(|| codec.equal(black_box(&a), black_box(&b_items)));
    });
}

criterion_group!(
    benches,
    benchmark_serialize_strings,
    benchmark_serialize_with_escaping,
    benchmark_parse_strings,
    benchmark_parse_integers,
    benchmark_equality
);
criterion_main!(benches);
