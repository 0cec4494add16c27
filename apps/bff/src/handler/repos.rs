//! # リポジトリハンドラ

use axum::{Json, extract::Path};
use workbench_shared::PlaceholderResponse;

/// GET /api/v1/repos
pub async fn get_repos() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Get repos"))
}

/// POST /api/v1/repos/clone
pub async fn clone_repo() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Clone repo"))
}

/// GET /api/v1/repos/{id}/status
pub async fn repo_status(Path(id): Path<String>) -> Json<PlaceholderResponse> {
    tracing::debug!(repo_id = %id, "リポジトリ状態の取得");
    Json(PlaceholderResponse::endpoint("Repo status"))
}
