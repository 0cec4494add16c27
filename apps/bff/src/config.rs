//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。

use std::env;

/// `PORT` 未設定時の待ち受けポート
const DEFAULT_PORT: &str = "8080";

/// BFF サーバーの設定
///
/// バインドアドレスは常に全インターフェース（`0.0.0.0`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BffConfig {
    /// ポート番号（未検証の文字列）
    pub port: String,
}

impl BffConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    ///
    /// `PORT` が未設定または空文字列なら `8080` を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, "8080")]
    #[case(Some(""), "8080")]
    #[case(Some("3000"), "3000")]
    fn test_portの読み込み(#[case] port: Option<&str>, #[case] expected: &str) {
        let config = BffConfig::from_lookup(|key| match key {
            "PORT" => port.map(str::to_string),
            _ => None,
        });

        assert_eq!(config.port, expected);
    }
}
