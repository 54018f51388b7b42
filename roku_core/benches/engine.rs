//! `roku_core::engine` の性能計測（合法手生成、着手適用、1局の進行）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use roku_core::engine::events::Recorder;
use roku_core::engine::rules;
use roku_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// `rules::apply_move` を計測する。
fn bench_apply_move(criterion: &mut Criterion) {
    criterion.bench_function("engine/apply_move_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |mut board| {
                let result = rules::apply_move(&mut board, 3, 4, engine::Color::Black);
                black_box((result, board))
            },
            BatchSize::SmallInput,
        );
    });
}

/// `rules::get_valid_moves` を計測する。
fn bench_legal_moves(criterion: &mut Criterion) {
    let board = engine::Board::initial();
    criterion.bench_function("engine/legal_moves_initial", |bench| {
        bench.iter(|| black_box(rules::get_valid_moves(black_box(&board), engine::Color::Black)));
    });
}

/// `Game::run` で1局を終局まで進める時間を計測する。
fn bench_full_game(criterion: &mut Criterion) {
    criterion.bench_function("engine/positional_self_play", |bench| {
        bench.iter_batched(
            engine::Game::initial,
            |mut game| {
                let mut sink = Recorder::default();
                black_box(game.run(&mut ai::positional::Agent::new(), &mut sink))
            },
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_move(&mut criterion);
    bench_legal_moves(&mut criterion);
    bench_full_game(&mut criterion);

    criterion.final_summary();
}
