use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{try_rotate, Board, GameSnapshot, GameState, Piece};
use blockfall::types::PieceKind;

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.start();
            }
            state.advance(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, PieceKind::I.color());
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.start();
            }
            state.hard_drop()
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T).shifted(0, 5);

    c.bench_function("try_rotate", |b| {
        b.iter(|| try_rotate(black_box(&board), black_box(&piece)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.hard_drop();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_hard_drop,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
