//! Criterion benchmarks for the SAT test.
//! Focus sizes: vertices per polygon n in {3, 8, 16, 32, 64}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p sat2d

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use sat2d::geom2::rand::{draw_pair_radial, RadialCfg, ReplayToken, VertexCount};
use sat2d::geom2::{check_collision, max_separation, ConvexPolygon, SatCfg};

fn pair(n: usize, spread: f64, seed: u64) -> (ConvexPolygon, ConvexPolygon) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    (0..)
        .find_map(|index| draw_pair_radial(cfg, ReplayToken { seed, index }, spread))
        .expect("sampler eventually yields a pair")
}

fn bench_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat");
    for &n in &[3usize, 8, 16, 32, 64] {
        // Overlapping pair: every axis is tested.
        let (a, b) = pair(n, 0.0, 43);
        group.bench_with_input(BenchmarkId::new("overlapping", n), &n, |bch, _| {
            bch.iter(|| check_collision(&a, &b))
        });

        // Far apart: exits on an early axis.
        let far = b.translated(Vector2::new(10.0, 0.0));
        group.bench_with_input(BenchmarkId::new("separated", n), &n, |bch, _| {
            bch.iter(|| check_collision(&a, &far))
        });

        let cfg = SatCfg::default();
        group.bench_with_input(BenchmarkId::new("max_separation", n), &n, |bch, _| {
            bch.iter(|| max_separation(&a, &b, &cfg))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sat);
criterion_main!(benches);
