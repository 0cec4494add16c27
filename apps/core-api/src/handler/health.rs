//! # ヘルスチェックハンドラ
//!
//! Core API の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health          # 簡易ヘルスチェック（ルート直下）
//! GET /api/v1/health   # 詳細ヘルスチェック
//! GET /api/v1/ping     # 疎通確認
//! ```
//!
//! ## 詳細ヘルスチェックのレスポンス例
//!
//! ```json
//! {
//!   "status": "OK",
//!   "timestamp": "2024-01-15T10:00:00Z",
//!   "service": "workflow-backend",
//!   "version": "1.0.0",
//!   "system": { "worker_threads": 8, "alive_tasks": 3, "memory_rss_mb": 12 },
//!   "checks": {
//!     "database": { "status": "SKIPPED", "message": "..." },
//!     "github_api": { "status": "OK", "message": "..." }
//!   }
//! }
//! ```
//!
//! 個別チェックが失敗しても全体の `status` は常に `"OK"` を返す。

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use workbench_infra::Database;
use workbench_shared::{Acknowledgement, ApiStatus};

/// 詳細ヘルスチェックで名乗るサービス名
pub const SERVICE_NAME: &str = "workflow-backend";

const SMAPS_ROLLUP_PATH: &str = "/proc/self/smaps_rollup";
const RSS_LINE_PREFIX: &str = "Rss:";

/// 詳細ヘルスチェックが参照する状態
#[derive(Debug, Clone, Default)]
pub struct HealthState {
   /// 起動時に疎通確認済みの接続プール（`DB_CONNECT_ON_STARTUP` 無効時は `None`）
   pub database:                Option<Database>,
   pub github_token_configured: bool,
}

/// 簡易ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct HealthResponse {
   pub status:  ApiStatus,
   pub message: String,
   /// アプリケーションバージョン（Cargo.toml から取得）
   pub version: String,
}

/// 詳細ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct DetailedHealthResponse {
   pub status:    ApiStatus,
   pub timestamp: DateTime<Utc>,
   pub service:   String,
   pub version:   String,
   pub system:    SystemStats,
   pub checks:    HealthChecks,
}

/// ランタイムとプロセスの統計
#[derive(Debug, Serialize)]
pub struct SystemStats {
   /// tokio ランタイムのワーカースレッド数
   pub worker_threads: usize,
   /// 生存中の tokio タスク数
   pub alive_tasks:    usize,
   /// 常駐メモリ（MiB）。取得できない環境では `null`
   pub memory_rss_mb:  Option<u64>,
}

/// 依存先ごとのチェック結果
#[derive(Debug, Serialize)]
pub struct HealthChecks {
   pub database:   CheckResult,
   pub github_api: CheckResult,
}

/// 個別チェックのステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
   Ok,
   Error,
   Skipped,
}

/// 個別チェックの結果
#[derive(Debug, Serialize)]
pub struct CheckResult {
   pub status:  CheckStatus,
   pub message: String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub pool:    Option<PoolSummary>,
}

/// 接続プールの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolSummary {
   pub size: u32,
   pub idle: usize,
}

impl CheckResult {
   fn new(status: CheckStatus, message: impl Into<String>) -> Self {
      Self {
         status,
         message: message.into(),
         pool: None,
      }
   }
}

/// 簡易ヘルスチェック
///
/// データベースや外部サービスへの接続は確認せず、常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  ApiStatus::Ok,
      message: "Workflow Backend Server is running".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}

/// 疎通確認
pub async fn ping() -> Json<Acknowledgement> {
   Json(Acknowledgement::ok("pong"))
}

/// 詳細ヘルスチェック
///
/// ランタイム統計と依存先の状態を返す。データベースは起動時に接続済みの場合のみ
/// ping で確認し、それ以外は `SKIPPED` とする。
pub async fn detailed_health_check(
   State(state): State<Arc<HealthState>>,
) -> Json<DetailedHealthResponse> {
   let database = match &state.database {
      Some(db) => check_database(db).await,
      None => CheckResult::new(
         CheckStatus::Skipped,
         "Database connection disabled on startup",
      ),
   };

   let github_api = if state.github_token_configured {
      CheckResult::new(CheckStatus::Ok, "GitHub token configured")
   } else {
      CheckResult::new(CheckStatus::Skipped, "GitHub token not configured")
   };

   Json(DetailedHealthResponse {
      status:    ApiStatus::Ok,
      timestamp: Utc::now(),
      service:   SERVICE_NAME.to_string(),
      version:   env!("CARGO_PKG_VERSION").to_string(),
      system:    system_stats().await,
      checks:    HealthChecks {
         database,
         github_api,
      },
   })
}

async fn check_database(db: &Database) -> CheckResult {
   let stats = db.stats();
   let pool = Some(PoolSummary {
      size: stats.size,
      idle: stats.idle,
   });

   match db.ping().await {
      Ok(()) => CheckResult {
         pool,
         ..CheckResult::new(CheckStatus::Ok, "Database connection healthy")
      },
      Err(e) => {
         tracing::warn!("データベースの疎通確認に失敗しました: {}", e);
         CheckResult {
            pool,
            ..CheckResult::new(CheckStatus::Error, "Database ping failed")
         }
      }
   }
}

async fn system_stats() -> SystemStats {
   let metrics = tokio::runtime::Handle::current().metrics();

   let memory_rss_mb = tokio::fs::read_to_string(SMAPS_ROLLUP_PATH)
      .await
      .ok()
      .and_then(|contents| parse_rss_kb(&contents))
      .map(|kb| kb / 1024);

   SystemStats {
      worker_threads: metrics.num_workers(),
      alive_tasks: metrics.num_alive_tasks(),
      memory_rss_mb,
   }
}

/// `smaps_rollup` の `Rss:` 行から常駐メモリ（kB）を取り出す
fn parse_rss_kb(contents: &str) -> Option<u64> {
   contents
      .lines()
      .find_map(|line| line.strip_prefix(RSS_LINE_PREFIX))
      .and_then(|rest| rest.split_whitespace().next())
      .and_then(|value| value.parse().ok())
}
