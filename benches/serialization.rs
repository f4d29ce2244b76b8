use anyxml::{
    to_string, to_string_pretty, to_string_with_options, to_value, Escaping, Structured, Value,
    XmlOptions,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Debug, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Debug, Clone)]
struct Catalog {
    product: Vec<Product>,
}

#[derive(Serialize, Debug, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn nested() -> NestedData {
    NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    }
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let user = to_value(&alice()).unwrap();

    c.bench_function("encode_simple_mapping", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_encode_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_sequence");

    for size in [10, 50, 100, 500].iter() {
        let value = to_value(&products(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("compact", size), &value, |b, value| {
            b.iter(|| to_string(black_box(value)))
        });
        group.bench_with_input(BenchmarkId::new("pretty", size), &value, |b, value| {
            b.iter(|| to_string_pretty(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_encode_nested(c: &mut Criterion) {
    let value = to_value(&nested()).unwrap();

    c.bench_function("encode_nested_mapping", |b| {
        b.iter(|| to_string(black_box(&value)))
    });
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = Value::from("This is a medium length string with some content");
    let markup = Value::from("<p class=\"x\">Tom & Jerry's \"show\"</p>\tend\n");
    let strict = XmlOptions::new().with_escaping(Escaping::strict());

    group.bench_function("plain_standard", |b| b.iter(|| to_string(black_box(&plain))));
    group.bench_function("markup_standard", |b| {
        b.iter(|| to_string(black_box(&markup)))
    });
    group.bench_function("markup_strict", |b| {
        b.iter(|| to_string_with_options(black_box(&markup), &strict))
    });

    group.finish();
}

fn benchmark_dynamic_vs_native(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_vs_native");

    let catalog = Catalog {
        product: products(100),
    };
    let dynamic = to_value(&catalog).unwrap();
    let native = Value::Structured(Structured::new(catalog.clone()));

    group.bench_function("dynamic", |b| b.iter(|| to_string(black_box(&dynamic))));
    group.bench_function("native", |b| b.iter(|| to_string(black_box(&native))));
    group.bench_function("to_value_then_encode", |b| {
        b.iter(|| to_string(&to_value(black_box(&catalog)).unwrap()))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = alice();
    let value = to_value(&user).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("xml_encode", |b| b.iter(|| to_string(black_box(&value))));

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_encode_sequence,
    benchmark_encode_nested,
    benchmark_escaping,
    benchmark_dynamic_vs_native,
    benchmark_comparison_with_json
);
criterion_main!(benches);
