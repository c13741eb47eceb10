//! Nesting throughput benchmarks.

use beamnest_core::{NestConfig, Panel};
use beamnest_guillotine::GuillotineNester;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn panel_batch(count: usize) -> Vec<Panel> {
    (0..count)
        .map(|i| {
            let w = 120.0 + 37.0 * ((i * 7) % 13) as f64;
            let h = 90.0 + 23.0 * ((i * 11) % 17) as f64;
            Panel::new(i as u32, w, h)
        })
        .collect()
}

fn bench_nest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nest");
    let config = NestConfig::new(2440.0, 1220.0).with_kerf(5.0);
    let nester = GuillotineNester::new(config).unwrap();

    for &count in &[10usize, 100, 500] {
        let panels = panel_batch(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &panels, |b, panels| {
            b.iter(|| black_box(nester.nest(panels).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nest);
criterion_main!(benches);
