use core::fmt;

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Black => f.write_str("BLACK"),
            Self::White => f.write_str("WHITE"),
        }
    }
}

/// 1マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 空きマス。
    #[default]
    Empty,
    /// 石が置かれている。
    Occupied(Color),
}

impl Cell {
    /// 置かれている石の色を返す（空きなら `None`）。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Occupied(color) => Some(color),
        }
    }

    /// 空きマスかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// `color` の石かどうかを返す。
    #[inline]
    #[must_use]
    pub fn is(self, color: Color) -> bool {
        self == Self::Occupied(color)
    }
}

/// 8方向の単位ベクトル（行差, 列差）。
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 盤面上のマス（`row * 6 + col` の 0..=35 のインデックス）。
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(
    /// `row * 6 + col` に対応する0..=35の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: usize = 6;

    /// マスの総数。
    pub const COUNT: usize = 36;

    /// 盤の一辺の長さ（インデックス計算用）。
    const SIDE: u8 = 6;

    /// 全マスを行優先順で返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::SIDE.wrapping_mul(Self::SIDE)).map(Self)
    }

    /// 行・列から `Square` を生成する（範囲外なら `None`）。
    #[inline]
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        let (row_u8, col_u8) = match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) => (r, c),
            _ => return None,
        };
        if row_u8 >= Self::SIDE || col_u8 >= Self::SIDE {
            return None;
        }

        let mut idx = match row_u8.checked_mul(Self::SIDE) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(col_u8) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=35 のインデックスを返す。
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// 列（0..=5）を返す。
    #[inline]
    #[must_use]
    pub fn col(self) -> usize {
        let col = match self.0.checked_rem(Self::SIDE) {
            Some(value) => value,
            None => u8::MIN,
        };
        usize::from(col)
    }

    /// 行（0..=5）を返す。
    #[inline]
    #[must_use]
    pub fn row(self) -> usize {
        let row = match self.0.checked_div(Self::SIDE) {
            Some(value) => value,
            None => u8::MIN,
        };
        usize::from(row)
    }

    /// `(dr, dc)` 方向に1マス進んだマスを返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub fn step(self, direction: (isize, isize)) -> Option<Self> {
        let (dr, dc) = direction;
        let Some(row) = self.row().checked_add_signed(dr) else {
            return None;
        };
        let Some(col) = self.col().checked_add_signed(dc) else {
            return None;
        };
        Self::new(row, col)
    }
}

impl fmt::Debug for Square {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
