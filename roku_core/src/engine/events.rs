use core::fmt;

use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// ゲーム進行中に通知されるイベント。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Event {
    /// 終局（双方パス）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 合法手が無くパスした。
    Passed {
        /// パスした手番。
        player: Color,
    },
    /// 着手した。
    Played {
        /// 反転した石の数。
        flipped: usize,
        /// 着手した手番。
        player: Color,
        /// 着手したマス。
        square: Square,
    },
}

impl fmt::Display for Event {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::GameOver { .. } => f.write_str("Game over!"),
            Self::Passed { player } => write!(f, "{player} has no valid moves."),
            Self::Played { player, square, .. } => write!(f, "{player} plays at {square}"),
        }
    }
}

/// 表示・通知の出力先。
pub trait Sink {
    /// イベントを通知する。
    fn notify(&mut self, event: &Event);

    /// 盤面のスナップショットを表示する。
    fn render(&mut self, board: &Board);
}

/// 受け取ったイベントと盤面を記録するだけの出力先（テスト・計測用）。
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Recorder {
    /// 通知されたイベント。
    pub events: Vec<Event>,
    /// 表示要求された盤面。
    pub frames: Vec<Board>,
}

impl Sink for Recorder {
    #[inline]
    fn notify(&mut self, event: &Event) {
        self.events.push(*event);
    }

    #[inline]
    fn render(&mut self, board: &Board) {
        self.frames.push(board.snapshot());
    }
}
