use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dimcsv::{parse, stringify, FlattenOptions};

fn sample_csv(rows: usize) -> String {
    let mut out = String::from("id,name,tags,skills\n");
    for i in 0..rows {
        out.push_str(&format!(
            "{i},person{i},\"alpha|beta|gamma\",\"reading|cycling\"\n"
        ));
    }
    out.pop();
    out
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [10, 100, 1000] {
        let csv = sample_csv(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &csv, |b, csv| {
            b.iter(|| parse(black_box(csv)).unwrap());
        });
    }
    group.finish();
}

fn benchmark_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");
    for size in [10, 100, 1000] {
        let doc = parse(&sample_csv(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| stringify(black_box(doc)));
        });
    }
    group.finish();
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for size in [10, 100, 1000] {
        let doc = parse(&sample_csv(size)).unwrap();
        let options = FlattenOptions::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| doc.flatten(black_box(&options)));
        });
    }
    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let csv = sample_csv(100);
    c.bench_function("round_trip_100", |b| {
        b.iter(|| {
            let doc = parse(black_box(&csv)).unwrap();
            stringify(&doc)
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_stringify,
    benchmark_flatten,
    benchmark_round_trip
);
criterion_main!(benches);
