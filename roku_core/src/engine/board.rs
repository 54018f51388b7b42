use core::error::Error;
use core::fmt;

use crate::engine::types::{Cell, Color, Square};

/// 1行分のマス。
type Row = [Cell; Square::BOARD_LEN];

/// 盤面へのアクセスに失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BoardError {
    /// 座標が盤外（0..6 の範囲外）。
    OutOfBounds {
        /// 指定された行。
        row: usize,
        /// 指定された列。
        col: usize,
    },
}

impl fmt::Display for BoardError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfBounds { row, col } => {
                write!(f, "coordinates ({row}, {col}) are outside the 6x6 board")
            }
        }
    }
}

impl Error for BoardError {}

/// 6x6 の盤面。ルールは持たず、読み書きの手段だけを提供する。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Board {
    /// 行優先のマス目。
    cells: [Row; Square::BOARD_LEN],
}

impl Board {
    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells
            .get(square.row())
            .and_then(|row| row.get(square.col()))
            .copied()
            .unwrap_or_default()
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn counts(&self) -> (u32, u32) {
        let mut black = 0_u32;
        let mut white = 0_u32;
        for cell in self.cells.iter().flatten() {
            match *cell {
                Cell::Occupied(Color::Black) => black = black.wrapping_add(1),
                Cell::Occupied(Color::White) => white = white.wrapping_add(1),
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// 石が1つも無い盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; Square::BOARD_LEN]; Square::BOARD_LEN],
        }
    }

    /// 指定座標のマスを返す。
    ///
    /// # Errors
    ///
    /// `row` か `col` が 0..6 の範囲外なら `BoardError::OutOfBounds` を返す。
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        match Square::new(row, col) {
            Some(square) => Ok(self.cell(square)),
            None => Err(BoardError::OutOfBounds { row, col }),
        }
    }

    /// 初期配置（中央4マス、白が (2,2)(3,3)、黒が (2,3)(3,2)）を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        const E: Cell = Cell::Empty;
        const B: Cell = Cell::Occupied(Color::Black);
        const W: Cell = Cell::Occupied(Color::White);
        Self {
            cells: [
                [E; Square::BOARD_LEN],
                [E; Square::BOARD_LEN],
                [E, E, W, B, E, E],
                [E, E, B, W, E, E],
                [E; Square::BOARD_LEN],
                [E; Square::BOARD_LEN],
            ],
        }
    }

    /// 石が置かれているマスの数を返す。
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> u32 {
        let (black, white) = self.counts();
        black.wrapping_add(white)
    }

    /// 行ごとのマスを返す（表示用）。
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; Square::BOARD_LEN] {
        &self.cells
    }

    /// 指定座標のマスを書き換える。合法性は検査しない。
    ///
    /// # Errors
    ///
    /// `row` か `col` が 0..6 の範囲外なら `BoardError::OutOfBounds` を返す。
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                Ok(())
            }
            None => Err(BoardError::OutOfBounds { row, col }),
        }
    }

    /// 検査済みのマスを書き換える（crate 内部向け）。
    #[inline]
    pub(crate) fn put(&mut self, square: Square, color: Color) {
        if let Some(slot) = self
            .cells
            .get_mut(square.row())
            .and_then(|row| row.get_mut(square.col()))
        {
            *slot = Cell::Occupied(color);
        }
    }

    /// 表示や評価に渡すための複製を返す。
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> Self {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardError};
    use crate::engine::types::{Cell, Color, Square};

    #[test]
    fn initial_board_has_four_center_stones() {
        let board = Board::initial();

        for square in Square::all() {
            let expected = match (square.row(), square.col()) {
                (2, 2) | (3, 3) => Cell::Occupied(Color::White),
                (2, 3) | (3, 2) => Cell::Occupied(Color::Black),
                _ => Cell::Empty,
            };
            assert_eq!(board.cell(square), expected, "square={square:?}");
        }
        assert_eq!(board.counts(), (2, 2));
        assert_eq!(board.occupied(), 4);
    }

    #[test]
    fn get_and_set_reject_out_of_bounds() {
        let mut board = Board::initial();

        assert_eq!(
            board.get(6, 0),
            Err(BoardError::OutOfBounds { row: 6, col: 0 })
        );
        assert_eq!(
            board.get(0, usize::MAX),
            Err(BoardError::OutOfBounds {
                row: 0,
                col: usize::MAX
            })
        );
        assert_eq!(
            board.set(3, 6, Cell::Occupied(Color::Black)),
            Err(BoardError::OutOfBounds { row: 3, col: 6 })
        );
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut board = Board::empty();
        assert_eq!(board.set(5, 0, Cell::Occupied(Color::White)), Ok(()));
        assert_eq!(board.get(5, 0), Ok(Cell::Occupied(Color::White)));
        assert_eq!(board.counts(), (0, 1));
    }

    #[test]
    fn snapshot_is_detached_from_the_board() {
        let mut board = Board::initial();
        let snapshot = board.snapshot();

        assert_eq!(board.set(0, 0, Cell::Occupied(Color::Black)), Ok(()));
        assert_eq!(snapshot.get(0, 0), Ok(Cell::Empty));
        assert_ne!(snapshot, board);
    }
}
