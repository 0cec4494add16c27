//! # Core API 設定
//!
//! 環境変数から Core API サーバーの設定を読み込む。
//!
//! ## 読み込み規則
//!
//! - 未設定または空文字列の変数はデフォルト値になる
//! - 値の検証は行わない（ポート番号も文字列のまま保持する）
//! - `.env` ファイルの読み込みは `main.rs` の責務（ここでは環境変数だけを見る）
//!
//! 純粋な部分は [`AppConfig::from_lookup`] に分離してあり、
//! テストではプロセスの環境変数を書き換えずに検証できる。

use std::{env, fmt};

use workbench_infra::DatabaseConfig;

/// Core API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
   pub server:                ServerConfig,
   pub database:              DatabaseConfig,
   pub github:                GitHubConfig,
   /// 起動時に MySQL への疎通確認を行うか（`DB_CONNECT_ON_STARTUP`）
   pub db_connect_on_startup: bool,
   /// `PORT` による待ち受けポートの上書き
   pub port_override:         Option<String>,
}

/// HTTP サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   pub host: String,
   pub port: String,
}

/// GitHub 連携の設定
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubConfig {
   pub token:       String,
   pub webhook_url: String,
}

impl GitHubConfig {
   /// トークンが設定されているか
   pub fn is_token_configured(&self) -> bool {
      !self.token.is_empty()
   }
}

impl fmt::Debug for GitHubConfig {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let token = if self.is_token_configured() { "***" } else { "" };
      f.debug_struct("GitHubConfig")
         .field("token", &token)
         .field("webhook_url", &self.webhook_url)
         .finish()
   }
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Self {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を組み立てる
   ///
   /// `lookup` が `None` または空文字列を返したキーはデフォルト値を使う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
      let value = |key: &str| lookup(key).filter(|v| !v.is_empty());
      let or_default = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

      Self {
         server:                ServerConfig {
            host: or_default("SERVER_HOST", "localhost"),
            port: or_default("SERVER_PORT", "8080"),
         },
         database:              DatabaseConfig {
            host:     or_default("DB_HOST", "localhost"),
            port:     or_default("DB_PORT", "3306"),
            user:     or_default("DB_USER", "root"),
            password: or_default("DB_PASSWORD", ""),
            name:     or_default("DB_NAME", "workflow"),
            charset:  or_default("DB_CHARSET", "utf8mb4"),
         },
         github:                GitHubConfig {
            token:       or_default("GITHUB_TOKEN", ""),
            webhook_url: or_default("GITHUB_WEBHOOK_URL", ""),
         },
         db_connect_on_startup: value("DB_CONNECT_ON_STARTUP")
            .is_some_and(|v| matches!(v.as_str(), "true" | "1")),
         port_override:         value("PORT"),
      }
   }

   /// 実際に待ち受けるポート
   ///
   /// `PORT` が設定されていればそれを、なければ `SERVER_PORT` を使う。
   pub fn listen_port(&self) -> &str {
      self.port_override.as_deref().unwrap_or(&self.server.port)
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn load(vars: &[(&str, &str)]) -> AppConfig {
      let map: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      AppConfig::from_lookup(|key| map.get(key).cloned())
   }

   fn defaults() -> AppConfig {
      AppConfig {
         server:                ServerConfig {
            host: "localhost".to_string(),
            port: "8080".to_string(),
         },
         database:              DatabaseConfig {
            host:     "localhost".to_string(),
            port:     "3306".to_string(),
            user:     "root".to_string(),
            password: String::new(),
            name:     "workflow".to_string(),
            charset:  "utf8mb4".to_string(),
         },
         github:                GitHubConfig {
            token:       String::new(),
            webhook_url: String::new(),
         },
         db_connect_on_startup: false,
         port_override:         None,
      }
   }

   #[test]
   fn test_環境変数が空ならすべてデフォルト値になる() {
      assert_eq!(load(&[]), defaults());
   }

   #[rstest]
   #[case("SERVER_PORT", "9000", |c: &mut AppConfig| c.server.port = "9000".to_string())]
   #[case("SERVER_HOST", "0.0.0.0", |c: &mut AppConfig| c.server.host = "0.0.0.0".to_string())]
   #[case("DB_HOST", "db", |c: &mut AppConfig| c.database.host = "db".to_string())]
   #[case("DB_PORT", "13306", |c: &mut AppConfig| c.database.port = "13306".to_string())]
   #[case("DB_USER", "app", |c: &mut AppConfig| c.database.user = "app".to_string())]
   #[case("DB_PASSWORD", "pw", |c: &mut AppConfig| c.database.password = "pw".to_string())]
   #[case("DB_NAME", "workbench", |c: &mut AppConfig| c.database.name = "workbench".to_string())]
   #[case("DB_CHARSET", "utf8", |c: &mut AppConfig| c.database.charset = "utf8".to_string())]
   #[case("GITHUB_TOKEN", "ghp_x", |c: &mut AppConfig| c.github.token = "ghp_x".to_string())]
   #[case("GITHUB_WEBHOOK_URL", "https://example.com/hook", |c: &mut AppConfig| {
      c.github.webhook_url = "https://example.com/hook".to_string()
   })]
   fn test_設定した変数だけがデフォルトを上書きする(
      #[case] key: &str,
      #[case] value: &str,
      #[case] apply: fn(&mut AppConfig),
   ) {
      let mut expected = defaults();
      apply(&mut expected);

      assert_eq!(load(&[(key, value)]), expected);
   }

   #[test]
   fn test_空文字列はデフォルト値を維持する() {
      let config = load(&[("SERVER_PORT", ""), ("DB_NAME", "")]);

      assert_eq!(config, defaults());
   }

   #[test]
   fn test_値は検証されない() {
      let config = load(&[("SERVER_PORT", "not-a-port")]);

      assert_eq!(config.server.port, "not-a-port");
   }

   #[rstest]
   #[case(None, "8080")]
   #[case(Some("3000"), "3000")]
   fn test_portはserver_portより優先される(#[case] port: Option<&str>, #[case] expected: &str) {
      let config = match port {
         Some(p) => load(&[("PORT", p)]),
         None => load(&[]),
      };

      assert_eq!(config.listen_port(), expected);
   }

   #[rstest]
   #[case("true", true)]
   #[case("1", true)]
   #[case("false", false)]
   #[case("yes", false)]
   fn test_db_connect_on_startupの解釈(#[case] value: &str, #[case] expected: bool) {
      assert_eq!(
         load(&[("DB_CONNECT_ON_STARTUP", value)]).db_connect_on_startup,
         expected
      );
   }

   #[test]
   fn test_debug出力でgithubトークンが伏せられる() {
      let config = load(&[("GITHUB_TOKEN", "ghp_secret")]);

      let debug = format!("{:?}", config.github);
      assert!(!debug.contains("ghp_secret"));
      assert!(config.github.is_token_configured());
   }
}
