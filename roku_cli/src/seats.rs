//! 手番ごとの AI の割り当て。

use roku_core::ai::types::Ai;
use roku_core::{ai, engine};

use crate::config::SeatKind;

/// 1手番分の AI。
#[derive(Debug)]
enum Controller {
    /// 評価表で選ぶ。
    Positional(ai::positional::Agent),
    /// 乱数で選ぶ。
    Random(ai::random::Agent),
}

impl Controller {
    /// 割り当てられた AI に手を選ばせる。
    fn choose_move(
        &mut self,
        board: &engine::Board,
        player: engine::Color,
    ) -> Option<engine::Square> {
        match *self {
            Self::Positional(ref mut agent) => agent.choose_move(board, player),
            Self::Random(ref mut agent) => agent.choose_move(board, player),
        }
    }
}

impl From<SeatKind> for Controller {
    fn from(kind: SeatKind) -> Self {
        match kind {
            SeatKind::Positional => Self::Positional(ai::positional::Agent::new()),
            SeatKind::Random(seed) => Self::Random(ai::random::Agent::new(seed)),
        }
    }
}

/// 黒番・白番の AI の組。手番に応じて振り分ける。
#[derive(Debug)]
pub struct Seats {
    /// 黒番の AI。
    black: Controller,
    /// 白番の AI。
    white: Controller,
}

impl Seats {
    /// 設定から生成する。
    pub fn new(black: SeatKind, white: SeatKind) -> Self {
        Self {
            black: Controller::from(black),
            white: Controller::from(white),
        }
    }
}

impl Ai for Seats {
    fn choose_move(
        &mut self,
        board: &engine::Board,
        player: engine::Color,
    ) -> Option<engine::Square> {
        match player {
            engine::Color::Black => self.black.choose_move(board, player),
            engine::Color::White => self.white.choose_move(board, player),
            _ => None,
        }
    }
}
