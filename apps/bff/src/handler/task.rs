//! # タスクハンドラ
//!
//! タスク実行（`/execute`）を含め、すべてプレースホルダー。

use axum::{Json, extract::Path};
use workbench_shared::PlaceholderResponse;

/// GET /api/v1/tasks
pub async fn get_tasks() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Get tasks"))
}

/// POST /api/v1/tasks
pub async fn create_task() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Create task"))
}

/// PUT /api/v1/tasks/{id}
pub async fn update_task(Path(_id): Path<String>) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Update task"))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(Path(_id): Path<String>) -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Delete task"))
}

/// POST /api/v1/tasks/{id}/execute
pub async fn execute_task(Path(id): Path<String>) -> Json<PlaceholderResponse> {
    tracing::info!(task_id = %id, "タスク実行リクエストを受け付けました（実行基盤は未実装）");
    Json(PlaceholderResponse::endpoint("Execute task"))
}
