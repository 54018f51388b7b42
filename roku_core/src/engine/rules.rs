//! 合法手判定と着手適用。盤面と手番を受け取るだけの関数群。


use crate::engine::board::{Board, BoardError};
use crate::engine::types::{Color, DIRECTIONS, Square};

/// 着手を適用する。合法性は再検査しない（呼び出し側の責務）。
///
/// 置いたマスを `player` にし、8方向それぞれで挟んだ相手石の列を反転する。
/// 反転した石の数を返す。
///
/// # Errors
///
/// 座標が盤外なら `BoardError::OutOfBounds` を返す（盤面は変更しない）。
#[inline]
pub fn apply_move(
    board: &mut Board,
    row: usize,
    col: usize,
    player: Color,
) -> Result<usize, BoardError> {
    let Some(square) = Square::new(row, col) else {
        return Err(BoardError::OutOfBounds { row, col });
    };

    let flipped = flips(board, square, player);
    board.put(square, player);
    for &target in &flipped {
        board.put(target, player);
    }

    Ok(flipped.len())
}

/// `square` に `player` が置いたときに反転する石を返す（全方向）。
#[inline]
#[must_use]
pub fn flips(board: &Board, square: Square, player: Color) -> Vec<Square> {
    let mut flipped = Vec::new();
    for direction in DIRECTIONS {
        flipped.extend(bounded_run(board, square, player, direction));
    }
    flipped
}

/// 行優先順で全合法手を返す。
#[inline]
#[must_use]
pub fn get_valid_moves(board: &Board, player: Color) -> Vec<Square> {
    Square::all()
        .filter(|&square| is_legal(board, square, player))
        .collect()
}

/// `player` に合法手が1つでもあるかを返す。
#[inline]
#[must_use]
pub fn has_valid_move(board: &Board, player: Color) -> bool {
    Square::all().any(|square| is_legal(board, square, player))
}

/// `player` が (`row`, `col`) に置けるかを返す。
///
/// # Errors
///
/// 座標が盤外なら `BoardError::OutOfBounds` を返す。
#[inline]
pub fn is_valid_move(
    board: &Board,
    row: usize,
    col: usize,
    player: Color,
) -> Result<bool, BoardError> {
    match Square::new(row, col) {
        Some(square) => Ok(is_legal(board, square, player)),
        None => Err(BoardError::OutOfBounds { row, col }),
    }
}

/// 検査済みのマスに対する合法判定。
#[inline]
#[must_use]
pub fn is_legal(board: &Board, square: Square, player: Color) -> bool {
    if !board.cell(square).is_empty() {
        return false;
    }

    DIRECTIONS
        .into_iter()
        .any(|direction| !bounded_run(board, square, player, direction).is_empty())
}

/// 1方向について、`from` の隣から続く相手石の列を返す。
///
/// 列の直後（盤内）に `player` の石がある場合のみ中身を返し、
/// 盤外や空きマスで途切れた場合は空を返す。
fn bounded_run(
    board: &Board,
    from: Square,
    player: Color,
    direction: (isize, isize),
) -> Vec<Square> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut cursor = from.step(direction);

    while let Some(square) = cursor {
        let cell = board.cell(square);
        if cell.is(opponent) {
            run.push(square);
            cursor = square.step(direction);
        } else if cell.is(player) {
            return run;
        } else {
            break;
        }
    }

    Vec::new()
}
