//! Benchmarks for lattice generation.
//!
//! Run with: cargo bench -p latticekit-toolpath

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use latticekit_core::{LatticeId, LatticeParameters, OutputMode};
use latticekit_toolpath::LatticeGenerator;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generate");

    for id in LatticeId::ALL {
        let params = LatticeParameters {
            lattice_id: id,
            units_x: 15,
            units_y: 5,
            layers: 5,
            ..LatticeParameters::default()
        };
        let Ok(generator) = LatticeGenerator::new(params) else {
            continue;
        };
        let points = generator
            .generate(OutputMode::Export)
            .map(|t| t.steps.point_count())
            .unwrap_or(0);
        group.throughput(Throughput::Elements(points as u64));

        group.bench_with_input(BenchmarkId::new("export", id), &generator, |b, g| {
            b.iter(|| g.generate(black_box(OutputMode::Export)))
        });
        group.bench_with_input(BenchmarkId::new("visualize", id), &generator, |b, g| {
            b.iter(|| g.generate(black_box(OutputMode::Visualize)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
