use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use gazetteer::engine::types::PlaceRecord;
use gazetteer::render::{escape, render_results};

fn bench_escape(c: &mut Criterion) {
    let text = r#"San José <"&> district "#.repeat(16);
    c.bench_function("escape_city", |b| b.iter(|| escape(black_box(&text))));
}

fn bench_render_results(c: &mut Criterion) {
    let records: Vec<PlaceRecord> = (0..15)
        .map(|i| PlaceRecord {
            city: format!("City {i}, Region"),
        })
        .collect();
    c.bench_function("render_results_15", |b| {
        b.iter(|| render_results(black_box(&records)))
    });
}

criterion_group!(benches, bench_escape, bench_render_results);
criterion_main!(benches);
