//! # AI 処理ハンドラ

use axum::Json;
use workbench_shared::PlaceholderResponse;

/// POST /api/v1/ai/process
pub async fn ai_process() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("AI process"))
}

/// GET /api/v1/ai/tokens/status
pub async fn token_status() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Token status"))
}
