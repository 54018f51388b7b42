use core::error::Error;
use core::fmt;

use tracing::{debug, info};

use crate::ai::types::Ai;
use crate::engine::board::{Board, BoardError};
use crate::engine::events::{Event, Sink};
use crate::engine::rules;
use crate::engine::types::{Color, Square};

/// 終局とみなす連続パス回数。
const TERMINAL_PASSES: u8 = 2;

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方がパス）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
}

impl Status {
    /// 勝者を返す（進行中・引き分けなら `None`）。
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::GameOver { black, white } if black > white => Some(Color::Black),
            Self::GameOver { black, white } if white > black => Some(Color::White),
            Self::GameOver { .. } | Self::InProgress => None,
        }
    }
}

/// 1手番の進行に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// AI が合法手ではないマスを返した。
    IllegalMove {
        /// 手番。
        player: Color,
        /// 返されたマス。
        square: Square,
    },
    /// 合法手があるのに AI が手を返さなかった。
    MissingMove {
        /// 手番。
        player: Color,
    },
    /// 盤外の座標へアクセスした。
    OutOfBounds(BoardError),
}

impl fmt::Display for PlayError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::GameOver => f.write_str("the game is already over"),
            Self::IllegalMove { player, square } => {
                write!(f, "strategy chose an illegal move for {player} at {square}")
            }
            Self::MissingMove { player } => {
                write!(f, "strategy returned no move although {player} has legal moves")
            }
            Self::OutOfBounds(err) => fmt::Display::fmt(&err, f),
        }
    }
}

impl Error for PlayError {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::OutOfBounds(ref err) => Some(err),
            Self::GameOver | Self::IllegalMove { .. } | Self::MissingMove { .. } => None,
        }
    }
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 連続パス回数。
    consecutive_passes: u8,
    /// 手番。
    side_to_move: Color,
}

impl Game {
    /// 現在の盤面のスナップショットを返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board.snapshot()
    }

    /// 連続パス回数を返す。
    #[inline]
    #[must_use]
    pub const fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// 任意の盤面・手番から開始する。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            consecutive_passes: u8::MIN,
            side_to_move,
        }
    }

    /// 初期局面（黒番）からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self::from_board(Board::initial(), Color::Black)
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.consecutive_passes >= TERMINAL_PASSES
    }

    /// 初期盤面を表示してから、終局まで手番を進める。
    ///
    /// # Errors
    ///
    /// `turn` が失敗した場合、そのエラーを返す。
    #[inline]
    pub fn run<A, S>(&mut self, ai: &mut A, sink: &mut S) -> Result<Status, PlayError>
    where
        A: Ai + ?Sized,
        S: Sink + ?Sized,
    {
        sink.render(&self.board.snapshot());

        loop {
            match self.turn(ai, sink) {
                Ok(Status::InProgress) => {}
                Ok(status) => return Ok(status),
                Err(err) => return Err(err),
            }
        }
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            let (black, white) = self.board.counts();
            return Status::GameOver { black, white };
        }

        Status::InProgress
    }

    /// 1手番を進める。
    ///
    /// 合法手が無ければパスし、相手にも合法手が無ければ終局する。
    /// 合法手があれば `ai` に選ばせて着手し、着手後の盤面を表示する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す（盤面は変更しない）：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: `ai` が合法手でないマスを返した場合
    /// - `PlayError::MissingMove`: 合法手があるのに `ai` が `None` を返した場合
    #[inline]
    pub fn turn<A, S>(&mut self, ai: &mut A, sink: &mut S) -> Result<Status, PlayError>
    where
        A: Ai + ?Sized,
        S: Sink + ?Sized,
    {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let player = self.side_to_move;
        let moves = rules::get_valid_moves(&self.board, player);

        if moves.is_empty() {
            debug!(player = %player, "no valid moves, passing");
            sink.notify(&Event::Passed { player });

            self.side_to_move = player.opponent();
            self.consecutive_passes = self.consecutive_passes.saturating_add(1);

            if !rules::has_valid_move(&self.board, self.side_to_move) {
                // 相手も打てないので、相手のパスを待たずに終局とする。
                self.consecutive_passes = TERMINAL_PASSES;
                let (black, white) = self.board.counts();
                info!(black, white, "game over");
                sink.notify(&Event::GameOver { black, white });
            }

            return Ok(self.status());
        }

        let square = match ai.choose_move(&self.board, player) {
            Some(square) if moves.contains(&square) => square,
            Some(square) => return Err(PlayError::IllegalMove { player, square }),
            None => return Err(PlayError::MissingMove { player }),
        };

        let applied = rules::apply_move(&mut self.board, square.row(), square.col(), player);
        let flipped = match applied {
            Ok(count) => count,
            Err(err) => return Err(PlayError::OutOfBounds(err)),
        };

        debug!(player = %player, square = %square, flipped, "placed");
        self.consecutive_passes = u8::MIN;
        sink.notify(&Event::Played {
            flipped,
            player,
            square,
        });
        sink.render(&self.board.snapshot());
        self.side_to_move = player.opponent();

        Ok(self.status())
    }
}
