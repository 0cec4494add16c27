//! # MySQL データベース接続管理
//!
//! データベース接続プールの作成と疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 毎回接続を張り直すオーバーヘッドを避け、接続を再利用
//! - **sqlx 採用**: 非同期サポート、tokio ランタイムとの統合
//! - **起動時のみ接続**: ハンドラはまだ永続化を行わないため、
//!   プールは起動時の疎通確認とヘルスチェックでのみ使われる
//!
//! ## プール設定
//!
//! | 項目 | 値 |
//! |------|-----|
//! | 最大接続数 | 25 |
//! | アイドル接続のタイムアウト | 5 分 |
//! | 接続の最大寿命 | 5 分 |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use workbench_infra::{Database, DatabaseConfig};
//!
//! let db = Database::connect(&config).await?;
//! db.ping().await?;
//! let stats = db.stats();
//! ```

use std::{fmt, time::Duration};

use sqlx::{
   Connection,
   MySqlPool,
   mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::error::InfraError;

/// 最大接続数
const MAX_CONNECTIONS: u32 = 25;

/// アイドル接続のタイムアウト・接続の最大寿命
const CONNECTION_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// データベース接続設定
///
/// 環境変数から読み込んだ値をそのまま保持する。ポート番号も文字列のままで、
/// 数値として解釈するのは接続を組み立てるとき（[`DatabaseConfig::connect_options`]）。
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
   pub host:     String,
   pub port:     String,
   pub user:     String,
   pub password: String,
   pub name:     String,
   pub charset:  String,
}

impl DatabaseConfig {
   /// sqlx の接続オプションを組み立てる
   ///
   /// # エラー
   ///
   /// `port` が `u16` として解釈できない場合は [`InfraError::InvalidPort`]。
   pub fn connect_options(&self) -> Result<MySqlConnectOptions, InfraError> {
      let port: u16 = self
         .port
         .parse()
         .map_err(|_| InfraError::InvalidPort(self.port.clone()))?;

      Ok(MySqlConnectOptions::new()
         .host(&self.host)
         .port(port)
         .username(&self.user)
         .password(&self.password)
         .database(&self.name)
         .charset(&self.charset))
   }

   /// ログ出力用の接続先表記（`user@host:port/name`）
   ///
   /// パスワードは含めない。
   pub fn target(&self) -> String {
      format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
   }
}

impl fmt::Debug for DatabaseConfig {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("DatabaseConfig")
         .field("host", &self.host)
         .field("port", &self.port)
         .field("user", &self.user)
         .field("password", &"***")
         .field("name", &self.name)
         .field("charset", &self.charset)
         .finish()
   }
}

/// 接続プールの統計情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
   /// プールが保持している接続数（使用中 + アイドル）
   pub size: u32,
   /// アイドル接続数
   pub idle: usize,
}

/// MySQL 接続プールのラッパー
///
/// `Clone` は内部の `MySqlPool`（`Arc`）を共有するだけなので安価。
#[derive(Debug, Clone)]
pub struct Database {
   pool: MySqlPool,
}

impl Database {
   /// 接続プールを作成し、疎通確認まで行う
   ///
   /// アプリケーション起動時に一度だけ呼び出す。
   ///
   /// # エラー
   ///
   /// - ポート番号が不正
   /// - 接続失敗、認証エラー
   /// - 疎通確認（ping）の失敗
   pub async fn connect(config: &DatabaseConfig) -> Result<Self, InfraError> {
      let options = config.connect_options()?;

      let pool = MySqlPoolOptions::new()
         .max_connections(MAX_CONNECTIONS)
         .idle_timeout(CONNECTION_LIFETIME)
         .max_lifetime(CONNECTION_LIFETIME)
         .connect_with(options)
         .await?;

      let database = Self { pool };
      database.ping().await?;

      tracing::info!("MySQL に接続しました: {}", config.target());

      Ok(database)
   }

   /// 疎通確認を行う
   ///
   /// プールから接続を 1 本借りて `ping` を送る。
   pub async fn ping(&self) -> Result<(), InfraError> {
      let mut conn = self.pool.acquire().await?;
      conn.ping().await?;
      Ok(())
   }

   /// 接続プールの統計情報を取得する
   pub fn stats(&self) -> PoolStats {
      PoolStats {
         size: self.pool.size(),
         idle: self.pool.num_idle(),
      }
   }

   /// 接続プールを閉じる
   ///
   /// 使用中の接続が返却されるのを待ってから完了する。
   pub async fn close(&self) {
      self.pool.close().await;
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn config() -> DatabaseConfig {
      DatabaseConfig {
         host:     "localhost".to_string(),
         port:     "3306".to_string(),
         user:     "root".to_string(),
         password: "secret".to_string(),
         name:     "workflow".to_string(),
         charset:  "utf8mb4".to_string(),
      }
   }

   #[test]
   fn test_targetはパスワードを含まない() {
      assert_eq!(config().target(), "root@localhost:3306/workflow");
   }

   #[test]
   fn test_debug出力でパスワードが伏せられる() {
      let debug = format!("{:?}", config());

      assert!(!debug.contains("secret"));
      assert!(debug.contains("***"));
   }

   #[test]
   fn test_数値のポートなら接続オプションを組み立てられる() {
      assert!(config().connect_options().is_ok());
   }

   #[test]
   fn test_不正なポートはinvalid_portになる() {
      let config = DatabaseConfig {
         port: "not-a-port".to_string(),
         ..config()
      };

      let err = config.connect_options().unwrap_err();
      assert!(matches!(err, InfraError::InvalidPort(ref p) if p == "not-a-port"));
   }

   #[tokio::test]
   async fn test_不正なポートでは接続を試みずに失敗する() {
      let config = DatabaseConfig {
         port: "70000".to_string(),
         ..config()
      };

      let result = Database::connect(&config).await;
      assert!(matches!(result, Err(InfraError::InvalidPort(_))));
   }
}
