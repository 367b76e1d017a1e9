//! Criterion benchmarks for the selection engine.
//!
//! Measures full recommendation runs over growing rows, including the
//! alternating occupancy pattern that drives the two-user lookahead's
//! O(k²) worst case.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use urinal_protocol::layout::Layout;
use urinal_protocol::select::recommend;

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for &n in &[8u32, 32, 128] {
        let ends = Layout::new(n, vec![1, n], false).unwrap();
        group.bench_with_input(BenchmarkId::new("ends_occupied", n), &ends, |b, layout| {
            b.iter(|| recommend(black_box(layout)))
        });

        let empty = Layout::new(n, vec![], false).unwrap();
        group.bench_with_input(BenchmarkId::new("empty_row", n), &empty, |b, layout| {
            b.iter(|| recommend(black_box(layout)))
        });

        let alternating: Vec<u32> = (1..=n).step_by(2).collect();
        let dense = Layout::new(n, alternating, false).unwrap();
        group.bench_with_input(BenchmarkId::new("alternating", n), &dense, |b, layout| {
            b.iter(|| recommend(black_box(layout)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
