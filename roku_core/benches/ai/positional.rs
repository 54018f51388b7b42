//! `roku_core::ai::positional` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use roku_core::ai::types::Ai;
use roku_core::engine::events::Recorder;
use roku_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手番数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn game_after_turns(turns: u16) -> engine::Game {
    let mut agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::initial();
    let mut sink = Recorder::default();

    for _turn in u16::MIN..turns {
        let status = match game.turn(&mut agent, &mut sink) {
            Ok(value) => value,
            Err(_err) => break,
        };

        if let engine::GameStatus::GameOver { .. } = status {
            break;
        }
    }

    game
}

/// ベンチ用に代表局面をいくつか用意する。
fn game_samples() -> [engine::Game; 3] {
    let g0 = engine::Game::initial();
    let g1 = game_after_turns(8);
    let g2 = game_after_turns(20);
    [g0, g1, g2]
}

/// `positional::Agent::choose_move` を計測する。
fn bench_choose_move(criterion: &mut Criterion) {
    let samples = game_samples();
    let mut group = criterion.benchmark_group("ai/positional/choose_move");

    for (index, game) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        let board = game.board();
        let side = game.side_to_move();
        group.bench_with_input(bench_id, &board, |bench, input| {
            let mut agent = ai::positional::Agent::new();
            bench.iter(|| black_box(agent.choose_move(input, side)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_choose_move(&mut criterion);
    criterion.final_summary();
}
