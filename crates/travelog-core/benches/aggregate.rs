use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use travelog_core::prelude::*;

fn sample_records(n: usize) -> Vec<VisitedCityRecord> {
    let cities = ["Paris", "Lyon", "Tokyo", "Osaka", "Rome", "Milan", "Lima", "Quito"];
    let countries = ["FR", "France", "JP", "Japan", "IT", "Italy", "Peru", "Ecuador"];
    (0..n)
        .map(|i| {
            let record = if i % 3 == 0 {
                VisitedCityRecord::post(cities[i % cities.len()], countries[i % countries.len()])
            } else {
                VisitedCityRecord::note(cities[i % cities.len()], countries[i % countries.len()])
            };
            if i % 2 == 0 {
                record.with_rating((i % 5) as f64).visited()
            } else {
                record
            }
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let aggregator = CityAggregator::new();
    for n in [100, 10_000] {
        let records = sample_records(n);
        c.bench_function(&format!("aggregate_{n}"), |b| {
            b.iter(|| aggregator.aggregate(black_box(&records)))
        });
    }
}

fn bench_country_lookup(c: &mut Criterion) {
    c.bench_function("normalize_country_name", |b| {
        b.iter(|| normalize_country_code(black_box("United States of America")))
    });
}

criterion_group!(benches, bench_aggregate, bench_country_lookup);
criterion_main!(benches);
