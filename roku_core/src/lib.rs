//! 6x6 Reversi (Othello) core logic.
//!
//! このクレートは盤面・ルール・ゲーム進行を管理する `engine` と、手を選択する `ai` を提供します。
//! 盤面の表示は `engine::events::Sink` を実装する側（`roku_cli` など）が担います。

#![forbid(unsafe_code)]

/// 盤面・ルール・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
