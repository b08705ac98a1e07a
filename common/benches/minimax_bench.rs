use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{BoardState, CellMark, Coordinate, Move, SearchEngine};

fn bench_single_move_empty_board(engine: &SearchEngine) {
    let board = BoardState::new_empty(3);
    black_box(engine.choose_ai_move(&board).ok());
}

fn bench_single_move_mid_game(engine: &SearchEngine) {
    let moves = [
        (1, 1, CellMark::First),
        (0, 0, CellMark::Second),
        (2, 2, CellMark::First),
    ];
    let board = moves.iter().fold(BoardState::new_empty(3), |board, &(row, column, mark)| {
        board.apply_move(Move::new(mark, Coordinate::new(row, column)))
    });
    black_box(engine.choose_ai_move(&board).ok());
}

fn bench_full_game() {
    let engines = [
        SearchEngine::for_mark(CellMark::First).ok(),
        SearchEngine::for_mark(CellMark::Second).ok(),
    ];
    let mut board = BoardState::new_empty(3);
    for engine in engines.iter().flatten().cycle() {
        match engine.choose_ai_move(&board) {
            Ok(result) => board = result.state,
            Err(_) => break,
        }
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    let Ok(first) = SearchEngine::for_mark(CellMark::First) else {
        return;
    };
    let Ok(second) = SearchEngine::for_mark(CellMark::Second) else {
        return;
    };

    group.bench_function("single_move_empty", |b| {
        b.iter(|| bench_single_move_empty_board(&first))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_single_move_mid_game(&second))
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
