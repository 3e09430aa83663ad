use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minegrid_core::*;

const SIZES: [(Coord, Coord); 3] = [(9, 9), (30, 16), (200, 200)];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (width, height) in SIZES {
        let config = BoardConfig::new_unchecked(width, height, 0.15);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &config,
            |b, &config| b.iter(|| BernoulliGenerator::new(7).generate(black_box(config))),
        );
    }
    group.finish();
}

fn bench_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");
    for (width, height) in SIZES {
        // sparse enough that the first click usually cascades over most of the board
        let config = BoardConfig::new_unchecked(width, height, 0.05);
        let Ok(board) = BernoulliGenerator::new(7).generate(config) else {
            continue;
        };
        let Some(start) = board
            .iter()
            .find(|cell| !cell.is_mine && board.adjacent_mine_count(cell.x(), cell.y()) == 0)
        else {
            continue;
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &board,
            |b, board| b.iter(|| reveal(board, black_box(start.location))),
        );
    }
    group.finish();
}

fn bench_is_won(c: &mut Criterion) {
    let config = BoardConfig::new_unchecked(200, 200, 0.0);
    let Ok(board) = BernoulliGenerator::new(7).generate(config) else {
        return;
    };
    let mut overlay = DisplayOverlay::for_board(&board);
    overlay.merge(&reveal(&board, (0, 0)));

    c.bench_function("is_won/200x200", |b| {
        b.iter(|| is_won(black_box(&board), black_box(&overlay)))
    });
}

criterion_group!(benches, bench_generate, bench_reveal, bench_is_won);
criterion_main!(benches);
