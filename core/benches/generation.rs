use criterion::{Criterion, criterion_group, criterion_main};
use minefield_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        let config = difficulty.configuration(0xC0FFEE);
        group.bench_function(format!("legacy/{difficulty:?}"), |b| {
            b.iter(|| generate(black_box(config)))
        });
        group.bench_function(format!("fast/{difficulty:?}"), |b| {
            b.iter(|| FastGenerator::new().generate(black_box(config)))
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    // sparse board so one reveal opens most of it
    let config = Configuration::new(64, 64, 40, 7).unwrap();
    let grid = generate(config);
    let start = grid
        .cells()
        .indexed_iter()
        .find(|(_, cell)| !cell.is_mine() && cell.adjacent_mines() == 0)
        .map(|((row, column), _)| (row as Coord, column as Coord))
        .unwrap_or((0, 0));

    c.bench_function("reveal/cascade", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| grid.reveal(black_box(start)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
