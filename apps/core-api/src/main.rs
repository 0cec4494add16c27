//! # Core API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|-----------|------|
//! | `SERVER_HOST` | `localhost` | バインドアドレス |
//! | `SERVER_PORT` | `8080` | ポート番号 |
//! | `PORT` | - | `SERVER_PORT` を上書きする |
//! | `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME` / `DB_CHARSET` | `localhost` / `3306` / `root` / 空 / `workflow` / `utf8mb4` | MySQL 接続設定 |
//! | `DB_CONNECT_ON_STARTUP` | `false` | `true` で起動時に MySQL へ接続する |
//! | `GITHUB_TOKEN` / `GITHUB_WEBHOOK_URL` | 空 | GitHub 連携設定 |
//! | `LOG_FORMAT` | `pretty` | `json` で JSON ログ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p workbench-core-api
//!
//! DB_CONNECT_ON_STARTUP=true DB_PASSWORD=... cargo run -p workbench-core-api --release
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use workbench_core_api::{app_builder::build_app, config::AppConfig, handler::HealthState};
use workbench_infra::Database;
use workbench_shared::{
   observability::{TracingConfig, init_tracing},
   shutdown::shutdown_signal,
};

/// Core API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. データベースの疎通確認（有効時のみ）
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env の読み込み結果はトレーシング初期化後にログ出力する
   let dotenv = dotenvy::dotenv();

   init_tracing(TracingConfig::from_env("core-api"));
   let _tracing_guard = tracing::info_span!("app", service = "core-api").entered();

   match dotenv {
      Ok(path) => tracing::debug!(".env を読み込みました: {}", path.display()),
      Err(e) => tracing::info!(".env を読み込めませんでした。環境変数のみを使用します: {}", e),
   }

   let config = AppConfig::from_env();
   tracing::debug!("設定を読み込みました: {:?}", config);

   let database = if config.db_connect_on_startup {
      let db = Database::connect(&config.database)
         .await
         .with_context(|| {
            format!(
               "データベースに接続できませんでした: {}",
               config.database.target()
            )
         })?;
      Some(db)
   } else {
      tracing::info!("DB_CONNECT_ON_STARTUP が無効のため、データベース接続をスキップします");
      None
   };

   let health_state = Arc::new(HealthState {
      database:                database.clone(),
      github_token_configured: config.github.is_token_configured(),
   });
   let app = build_app(health_state);

   let port: u16 = config
      .listen_port()
      .parse()
      .with_context(|| format!("ポート番号が不正です: {:?}", config.listen_port()))?;
   let host = config.server.host.as_str();

   tracing::info!("Core API サーバーを起動します: {}:{}", host, port);

   let listener = TcpListener::bind((host, port))
      .await
      .with_context(|| format!("{host}:{port} で待ち受けできませんでした"))?;
   tracing::info!("Core API サーバーが起動しました: {}", listener.local_addr()?);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   if let Some(db) = database {
      db.close().await;
      tracing::info!("データベース接続を閉じました");
   }

   tracing::info!("Core API サーバーを停止しました");

   Ok(())
}
