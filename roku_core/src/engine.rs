/// 盤面（6x6 のマス目）。
pub mod board;
/// 表示・通知の出力先とイベント。
pub mod events;
/// ゲーム進行（手番、パス、終局判定）の実装。
pub mod game;
pub mod rules;
pub mod types;

pub type Board = board::Board;
pub type BoardError = board::BoardError;
pub type Cell = types::Cell;
pub type Color = types::Color;
pub type Event = events::Event;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
pub type Square = types::Square;
