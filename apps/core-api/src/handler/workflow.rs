//! # ワークフローハンドラ
//!
//! ワークフローエンジンは未実装。一覧は常に空、作成は受領応答のみ。

use axum::{Json, http::StatusCode};
use serde::Serialize;
use workbench_shared::Acknowledgement;

/// ワークフロー一覧レスポンス
#[derive(Debug, Serialize)]
pub struct WorkflowListResponse {
   pub message:   String,
   pub workflows: Vec<String>,
}

/// GET /api/v1/workflows
pub async fn list_workflows() -> Json<WorkflowListResponse> {
   Json(WorkflowListResponse {
      message:   "Workflows list".to_string(),
      workflows: Vec::new(),
   })
}

/// POST /api/v1/workflows
pub async fn create_workflow() -> (StatusCode, Json<Acknowledgement>) {
   (
      StatusCode::CREATED,
      Json(Acknowledgement::ok("Workflow created")),
   )
}
