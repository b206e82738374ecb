//! Benchmarks for continuum construction and lookup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pharos_routing::{Continuum, Group};

fn bench_group(members: usize) -> Group {
    (0..members)
        .map(|i| (format!("node-{i:03}"), 1.0 + (i % 4) as f64))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &members in &[2usize, 8, 32, 128] {
        let input = bench_group(members);
        group.bench_with_input(BenchmarkId::from_parameter(members), &input, |b, input| {
            b.iter(|| Continuum::new(input).unwrap());
        });
    }
    group.finish();
}

fn bench_keyed_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for &members in &[2usize, 8, 32, 128] {
        let continuum = Continuum::new(&bench_group(members)).unwrap();
        let keys: Vec<String> = (0..1_000).map(|i| format!("session-{i}")).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(members),
            &continuum,
            |b, continuum| {
                let mut next = 0;
                b.iter(|| {
                    next = (next + 1) % keys.len();
                    continuum.get(&keys[next])
                });
            },
        );
    }
    group.finish();
}

fn bench_keyless_pick(c: &mut Criterion) {
    let continuum = Continuum::new(&bench_group(32)).unwrap().seed(0);
    c.bench_function("pick/32", |b| b.iter(|| continuum.pick()));
}

criterion_group!(benches, bench_build, bench_keyed_lookup, bench_keyless_pick);
criterion_main!(benches);
