use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minegrid_core::*;

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_cascade");

    group.bench_function("empty_256", |b| {
        b.iter_batched(
            || Board::new(256).unwrap(),
            |mut board| reveal_cascade(&mut board, (128, 128)).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("standard_density_64", |b| {
        b.iter_batched(
            || {
                let config = GameConfig::new(64).unwrap();
                let mut board = Board::new(config.size).unwrap();
                RandomMineGenerator::new(7)
                    .populate(&mut board, config.mines)
                    .unwrap();
                board
            },
            |mut board| {
                for pos in board.positions() {
                    if !board[pos].is_mine() && !board[pos].is_revealed() {
                        reveal_cascade(&mut board, pos).unwrap();
                    }
                }
                board
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_cascade);
criterion_main!(benches);
