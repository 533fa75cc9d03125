use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifegrid::{Grid, advance, advance_parallel};

fn make_grid(size: i32) -> Grid {
    Grid::from_fn(size, size, |pos| (pos.x + pos.y) % 3 == 0)
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [64, 128, 256] {
        let grid = make_grid(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &grid, |b, grid| {
            b.iter(|| advance(grid));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &grid, |b, grid| {
            b.iter(|| advance_parallel(grid));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
