//! 環境変数からの設定読み込み。

use core::error::Error;
use core::fmt;
use core::str::FromStr;

/// 黒番の AI を指定する環境変数。
pub const ENV_BLACK: &str = "ROKU_BLACK";

/// 白番の AI を指定する環境変数。
pub const ENV_WHITE: &str = "ROKU_WHITE";

/// ログの出力形式を指定する環境変数。
pub const ENV_LOG_FORMAT: &str = "ROKU_LOG_FORMAT";

/// 各手番に割り当てる AI の種類。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SeatKind {
    /// 評価表で選ぶ。
    #[default]
    Positional,
    /// 指定 seed の乱数で選ぶ。
    Random(u64),
}

impl FromStr for SeatKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("positional") {
            return Ok(Self::Positional);
        }

        let invalid = || ConfigError::InvalidSeat(trimmed.to_owned());
        match trimmed.split_once(':') {
            Some((kind, seed)) if kind.eq_ignore_ascii_case("random") => match seed.parse() {
                Ok(seed_value) => Ok(Self::Random(seed_value)),
                Err(_err) => Err(invalid()),
            },
            _ if trimmed.eq_ignore_ascii_case("random") => Ok(Self::Random(u64::MIN)),
            _ => Err(invalid()),
        }
    }
}

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// 1行1イベントの JSON。
    Json,
    /// 人間向けの整形出力。
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "" => Ok(Self::Pretty),
            other => Err(ConfigError::InvalidLogFormat(other.to_owned())),
        }
    }
}

/// 設定の読み込みに失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// ログ形式が `json` / `pretty` のどちらでもない。
    InvalidLogFormat(String),
    /// AI 指定が `positional` / `random:<seed>` のどちらでもない。
    InvalidSeat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidLogFormat(ref value) => {
                write!(f, "{ENV_LOG_FORMAT}: expected `json` or `pretty`, got `{value}`")
            }
            Self::InvalidSeat(ref value) => {
                write!(f, "expected `positional` or `random:<seed>`, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// 対局の設定。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// 黒番の AI。
    pub black: SeatKind,
    /// ログの出力形式。
    pub log_format: LogFormat,
    /// 白番の AI。
    pub white: SeatKind,
}

impl Config {
    /// 環境変数から設定を読み込む（未設定の項目は既定値）。
    ///
    /// # Errors
    ///
    /// 値を解釈できない場合、`ConfigError` を返す。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup` で取得した値から設定を組み立てる。
    ///
    /// # Errors
    ///
    /// 値を解釈できない場合、`ConfigError` を返す。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BLACK) {
            config.black = match value.parse() {
                Ok(seat) => seat,
                Err(err) => return Err(err),
            };
        }
        if let Some(value) = lookup(ENV_WHITE) {
            config.white = match value.parse() {
                Ok(seat) => seat,
                Err(err) => return Err(err),
            };
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.log_format = match value.parse() {
                Ok(format) => format,
                Err(err) => return Err(err),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, ENV_BLACK, ENV_LOG_FORMAT, ENV_WHITE, LogFormat, SeatKind};

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_key| None);
        assert_eq!(config, Ok(Config::default()));
        assert_eq!(
            Config::default(),
            Config {
                black: SeatKind::Positional,
                log_format: LogFormat::Pretty,
                white: SeatKind::Positional,
            }
        );
    }

    #[test]
    fn reads_each_variable() {
        let config = Config::from_lookup(|key| match key {
            ENV_BLACK => Some("random:42".to_owned()),
            ENV_WHITE => Some(" Positional ".to_owned()),
            ENV_LOG_FORMAT => Some("JSON".to_owned()),
            _ => None,
        });

        assert_eq!(
            config,
            Ok(Config {
                black: SeatKind::Random(42),
                log_format: LogFormat::Json,
                white: SeatKind::Positional,
            })
        );
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            "alphabeta".parse::<SeatKind>(),
            Err(ConfigError::InvalidSeat("alphabeta".to_owned()))
        );
        assert_eq!(
            "random:-1".parse::<SeatKind>(),
            Err(ConfigError::InvalidSeat("random:-1".to_owned()))
        );
        assert_eq!("random".parse::<SeatKind>(), Ok(SeatKind::Random(0)));
        assert_eq!(
            "xml".parse::<LogFormat>(),
            Err(ConfigError::InvalidLogFormat("xml".to_owned()))
        );
    }
}
