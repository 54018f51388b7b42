use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::rules;
use crate::engine::types::{Color, Square};

/// マスごとの静的評価値（隅と辺を高く、隅の隣を低く）。
pub const SCORES: [[i32; Square::BOARD_LEN]; Square::BOARD_LEN] = [
    [100, -20, 10, 10, -20, 100],
    [-20, -50, -2, -2, -50, -20],
    [10, -2, 3, 3, -2, 10],
    [10, -2, 3, 3, -2, 10],
    [-20, -50, -2, -2, -50, -20],
    [100, -20, 10, 10, -20, 100],
];

/// 合法手のうち評価表の値が最大のマスを選ぶAI。
///
/// 先読みも反転数の考慮もしない。同点なら行優先で先に見つかった手を選ぶ。
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// 生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ai for Agent {
    #[inline]
    fn choose_move(&mut self, board: &Board, player: Color) -> Option<Square> {
        let mut best_score = i32::MIN;
        let mut best_square: Option<Square> = None;

        for square in rules::get_valid_moves(board, player) {
            let score = score_of(square);
            if best_square.is_none() || score > best_score {
                best_score = score;
                best_square = Some(square);
            }
        }

        best_square
    }
}

/// マスの評価値を返す。
#[inline]
#[must_use]
pub fn score_of(square: Square) -> i32 {
    SCORES
        .get(square.row())
        .and_then(|row| row.get(square.col()))
        .copied()
        .unwrap_or(i32::MIN)
}
