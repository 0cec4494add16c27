//! # BFF (Backend for Frontend) サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|-----------|------|
//! | `PORT` | `8080` | ポート番号（全インターフェースで待ち受ける） |
//! | `LOG_FORMAT` | `pretty` | `json` で JSON ログ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p workbench-bff
//!
//! PORT=3000 LOG_FORMAT=json cargo run -p workbench-bff --release
//! ```

use std::net::Ipv4Addr;

use anyhow::Context;
use axum::{ServiceExt, extract::Request};
use tokio::net::TcpListener;
use workbench_bff::{app_builder::build_app, config::BffConfig};
use workbench_shared::{
    observability::{TracingConfig, init_tracing},
    shutdown::shutdown_signal,
};

/// BFF サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env の読み込み結果はトレーシング初期化後にログ出力する
    let dotenv = dotenvy::dotenv();

    init_tracing(TracingConfig::from_env("bff"));
    let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

    if let Err(e) = dotenv {
        tracing::info!(".env ファイルが見つかりません: {}", e);
    }

    let config = BffConfig::from_env();
    let port: u16 = config
        .port
        .parse()
        .with_context(|| format!("PORT が不正です: {:?}", config.port))?;

    tracing::info!("BFF サーバーを起動します: 0.0.0.0:{}", port);

    let app = build_app();

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("ポート {port} で待ち受けできませんでした"))?;
    tracing::info!("BFF サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("BFF サーバーを停止しました");

    Ok(())
}
