//! # GitHub 連携ハンドラ
//!
//! Webhook の受領と、GitHub 上のリポジトリ一覧（未実装のため常に空）。
//! Webhook の署名検証は行わない。

use axum::{Json, http::HeaderMap};
use serde::Serialize;
use workbench_shared::Acknowledgement;

/// GitHub リポジトリ一覧レスポンス
#[derive(Debug, Serialize)]
pub struct GitHubReposResponse {
   pub message: String,
   pub repos:   Vec<String>,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
   headers
      .get(name)
      .and_then(|v| v.to_str().ok())
      .unwrap_or("-")
}

/// POST /api/v1/github/webhook
///
/// ボディは読まない。イベント種別と配送 ID をログに残して受領応答を返す。
pub async fn github_webhook(headers: HeaderMap) -> Json<Acknowledgement> {
   tracing::info!(
      event = header(&headers, "x-github-event"),
      delivery = header(&headers, "x-github-delivery"),
      "GitHub Webhook を受信しました"
   );

   Json(Acknowledgement::ok("GitHub webhook received"))
}

/// GET /api/v1/github/repos
pub async fn list_github_repos() -> Json<GitHubReposResponse> {
   Json(GitHubReposResponse {
      message: "GitHub repositories".to_string(),
      repos:   Vec::new(),
   })
}
