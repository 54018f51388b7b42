//! 6x6 リバーシを CPU 同士で終局まで進め、盤面を標準出力へ表示する。

mod config;
mod console;
mod seats;

use std::io;
use std::process::ExitCode;

use roku_core::engine;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};
use crate::console::Console;
use crate::seats::Seats;

/// 設定エラー時の終了コード。
const EXIT_CONFIG: u8 = 2;

/// ログ出力を初期化する（標準エラーへ、`RUST_LOG` 未設定なら `info`）。
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    let _: Result<(), _> = installed;
}

/// 勝敗の表示文字列を返す。
fn result_text(status: engine::GameStatus) -> String {
    match status {
        engine::GameStatus::GameOver { black, white } => {
            let result = match status.winner() {
                Some(engine::Color::Black) => "Black wins",
                Some(engine::Color::White) => "White wins",
                _ => "Draw",
            };
            format!("{result} | B={black} W={white}")
        }
        _ => "Game in progress".to_owned(),
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(value) => value,
        Err(err) => {
            init_tracing(LogFormat::default());
            error!(%err, "invalid configuration");
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    init_tracing(config.log_format);
    info!(black = ?config.black, white = ?config.white, "starting game");

    let mut game = engine::Game::initial();
    let mut seats = Seats::new(config.black, config.white);
    let mut console = Console::new(io::stdout().lock());

    let status = match game.run(&mut seats, &mut console) {
        Ok(value) => value,
        Err(err) => {
            error!(%err, "game aborted");
            return ExitCode::FAILURE;
        }
    };

    let mut out = match console.finish() {
        Ok(value) => value,
        Err(err) => {
            error!(%err, "failed to write to stdout");
            return ExitCode::FAILURE;
        }
    };

    let summary = result_text(status);
    if let Err(err) = io::Write::write_all(&mut out, format!("{summary}\n").as_bytes()) {
        error!(%err, "failed to write to stdout");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
