//! Benchmarks for prefix-table operations.
//!
//! Run with: cargo bench --bench router

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ratecheck::datagen;
use ratecheck::router::PrefixTable;
use ratecheck::tariff::{Operator, PhoneNumber};

fn operators(count: usize, prefixes: usize) -> Vec<Operator> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|i| datagen::random_operator(&mut rng, &format!("OP{i}"), prefixes).unwrap())
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/build");

    for prefixes in [10usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(prefixes),
            &prefixes,
            |b, &prefixes| {
                let ops = operators(10, prefixes);
                b.iter(|| black_box(PrefixTable::build(ops.clone())))
            },
        );
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("table/resolve");

    let table = PrefixTable::build(operators(10, 1000));
    let mut rng = StdRng::seed_from_u64(7);

    // Numbers long enough to exercise the full candidate scan
    let hit = {
        let prefix = table
            .resolve(&datagen::random_number(&mut rng, 12).unwrap())
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| "1".to_string());
        PhoneNumber::new(format!("{prefix}5551234")).unwrap()
    };

    group.bench_function("hit", |b| b.iter(|| black_box(table.resolve(&hit))));

    // All-zero number can never match: generated prefixes have no leading zero
    let miss = PhoneNumber::new("000000000000").unwrap();
    group.bench_function("miss", |b| b.iter(|| black_box(table.resolve(&miss))));

    group.finish();
}

criterion_group!(benches, bench_build, bench_resolve);
criterion_main!(benches);
