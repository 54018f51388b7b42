//! 標準出力へ盤面と進行メッセージを書く出力先。

use std::io::{self, Write};

use roku_core::engine;
use roku_core::engine::events::{Event, Sink};

/// マスの表示記号を返す。
const fn symbol(cell: engine::Cell) -> char {
    match cell.color() {
        Some(engine::Color::Black) => 'B',
        Some(engine::Color::White) => 'W',
        _ => '.',
    }
}

/// 盤面を「1行1段、列は空白区切り、最後に空行」の文字列にする。
pub fn render_to_string(board: &engine::Board) -> String {
    let mut text = String::new();
    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|&cell| symbol(cell).to_string()).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text.push('\n');
    text
}

/// `Write` へ書き出す出力先。最初の書き込みエラーを保持する。
#[derive(Debug)]
pub struct Console<W: Write> {
    /// 最初に発生した書き込みエラー。
    error: Option<io::Error>,
    /// 書き込み先。
    out: W,
}

impl<W: Write> Console<W> {
    /// 書き込みを終え、途中で発生したエラーがあれば返す。
    ///
    /// # Errors
    ///
    /// 書き込みかフラッシュに失敗していた場合、その `io::Error` を返す。
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        match self.out.flush() {
            Ok(()) => Ok(self.out),
            Err(err) => Err(err),
        }
    }

    /// 書き込み先を指定して生成する。
    pub const fn new(out: W) -> Self {
        Self { error: None, out }
    }

    /// 文字列を書き込む（エラー発生後は何もしない）。
    fn write_text(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = self.out.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> Sink for Console<W> {
    fn notify(&mut self, event: &Event) {
        let line = format!("{event}\n");
        self.write_text(&line);
    }

    fn render(&mut self, board: &engine::Board) {
        let text = render_to_string(board);
        self.write_text(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::{Console, render_to_string};
    use roku_core::engine;
    use roku_core::engine::events::{Event, Sink as _};

    #[test]
    fn initial_board_layout() {
        let text = render_to_string(&engine::Board::initial());
        assert_eq!(
            text,
            ". . . . . .\n\
             . . . . . .\n\
             . . W B . .\n\
             . . B W . .\n\
             . . . . . .\n\
             . . . . . .\n\
             \n"
        );
    }

    #[test]
    fn console_writes_events_and_boards_in_order() {
        let mut console = Console::new(Vec::new());
        console.notify(&Event::Passed {
            player: engine::Color::Black,
        });
        console.render(&engine::Board::empty());
        console.notify(&Event::GameOver { black: 0, white: 0 });

        let bytes = console.finish();
        assert!(bytes.is_ok());
        let text = String::from_utf8(bytes.unwrap_or_default()).unwrap_or_default();

        let mut expected = String::from("BLACK has no valid moves.\n");
        expected.push_str(&". . . . . .\n".repeat(6));
        expected.push_str("\nGame over!\n");
        assert_eq!(text, expected);
    }
}
