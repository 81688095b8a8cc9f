//! Benchmarks for rating operations.
//!
//! Run with: cargo bench --bench pricing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

use shiprate::pricing::{Calculator, Leg};
use shiprate::route::parse_route;
use shiprate::tariff::{Direction, Tariff};

fn calculator() -> Calculator {
    Calculator::new(Arc::new(Tariff::builtin()))
}

fn bench_price_leg(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing/leg");
    let calc = calculator();

    // Tabulated tier lookup
    group.bench_function("tier", |b| {
        b.iter(|| black_box(calc.price_leg(5.0, "France", Direction::Export, None)))
    });

    // Anchored overage above the table
    group.bench_function("overage", |b| {
        b.iter(|| black_box(calc.price_leg(200.0, "Turquie", Direction::Export, None)))
    });

    // With a premium surcharge lookup
    group.bench_function("premium", |b| {
        b.iter(|| {
            black_box(calc.price_leg(5.0, "France", Direction::Export, Some("Premium 9:00")))
        })
    });

    group.finish();
}

fn bench_zone_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing/zone");
    let calc = calculator();

    // First entry in the map
    group.bench_function("head", |b| {
        b.iter(|| black_box(calc.zone_for("Algérie", Direction::Export)))
    });

    // English alias near the end of the map
    group.bench_function("alias_tail", |b| {
        b.iter(|| black_box(calc.zone_for("Istanbul", Direction::Export)))
    });

    // Full scan ending in the fallback zone
    group.bench_function("fallback", |b| {
        b.iter(|| black_box(calc.zone_for("Atlantis", Direction::Export)))
    });

    group.finish();
}

fn bench_route_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("route/parse");

    group.bench_function("arrow_chain", |b| {
        b.iter(|| black_box(parse_route("UK -> Maroc -> Turkey")))
    });

    group.bench_function("pair_list", |b| {
        b.iter(|| black_box(parse_route("UK:Maroc, Maroc:Turkey")))
    });

    group.finish();
}

fn bench_price_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing/route");
    let calc = calculator();

    for leg_count in [1, 2, 4, 8].iter() {
        group.throughput(Throughput::Elements(*leg_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(leg_count),
            leg_count,
            |b, &leg_count| {
                let mut legs: Vec<Leg> = (0..leg_count - 1)
                    .map(|i| {
                        if i % 2 == 0 {
                            Leg::new("France", "Maroc", Direction::Import)
                        } else {
                            Leg::new("Maroc", "France", Direction::Export)
                        }
                    })
                    .collect();
                legs.push(Leg::new("Maroc", "Turquie", Direction::Export));

                b.iter(|| black_box(calc.price_route(&legs, 12.5, None, None)))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_price_leg,
    bench_zone_resolution,
    bench_route_parse,
    bench_price_route,
);

criterion_main!(benches);
