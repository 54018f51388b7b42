use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 手を選択するAI。
///
/// 返す手は `rules::is_legal` を満たすこと。合法手が無いときは `None` を返す。
pub trait Ai {
    /// `player` の次の手を選択する。
    fn choose_move(&mut self, board: &Board, player: Color) -> Option<Square>;
}
