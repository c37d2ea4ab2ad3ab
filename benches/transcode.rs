use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use yamlite::{from_yaml, json_to_yaml, to_yaml, yaml_to_json, Value};

fn sample_json(rows: usize) -> String {
    let items: Vec<String> = (0..rows)
        .map(|i| {
            format!(
                r#"{{"id":{},"name":"item{}","price":{}.99,"active":{}}}"#,
                i,
                i,
                10 + i,
                i % 2 == 0
            )
        })
        .collect();
    format!(r#"{{"count":{},"items":[{}]}}"#, rows, items.join(","))
}

fn benchmark_json_to_yaml(c: &mut Criterion) {
    let json = sample_json(50);
    c.bench_function("json_to_yaml_50_rows", |b| {
        b.iter(|| json_to_yaml(black_box(&json)))
    });
}

fn benchmark_yaml_to_json(c: &mut Criterion) {
    let yaml = json_to_yaml(&sample_json(50)).unwrap();
    c.bench_function("yaml_to_json_50_rows", |b| {
        b.iter(|| yaml_to_json(black_box(&yaml)))
    });
}

fn benchmark_serializer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for size in [10, 100, 1000].iter() {
        let doc: Value = serde_json::from_str(&sample_json(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_yaml(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_parser_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [10, 100, 1000].iter() {
        let yaml = json_to_yaml(&sample_json(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &yaml, |b, yaml| {
            b.iter(|| from_yaml(black_box(yaml)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_json_to_yaml,
    benchmark_yaml_to_json,
    benchmark_serializer_sizes,
    benchmark_parser_sizes
);
criterion_main!(benches);
