//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```

use axum::Json;
use serde::Serialize;

/// ヘルスチェックレスポンス
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 稼働状態（`"ok"` 固定）
    pub status:  String,
    pub message: String,
}

/// ヘルスチェックエンドポイント
///
/// 依存先の確認は行わず、常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "ok".to_string(),
        message: "AI Git Workbench Backend is running".to_string(),
    })
}
