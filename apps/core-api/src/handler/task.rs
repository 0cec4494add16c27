//! # タスクハンドラ
//!
//! タスクの CRUD エンドポイント。永続化は行わず、モックデータと受領応答を返す。
//!
//! ## エンドポイント
//!
//! ```text
//! GET    /api/v1/tasks
//! GET    /api/v1/tasks/{id}
//! POST   /api/v1/tasks
//! PUT    /api/v1/tasks/{id}
//! DELETE /api/v1/tasks/{id}
//! ```

use axum::{
   Json,
   extract::Path,
   http::StatusCode,
};
use serde::Serialize;
use workbench_domain::task::{Task, TaskId, mock_tasks};
use workbench_shared::ApiStatus;

use crate::extractor::RequestBody;

/// タスク一覧レスポンス
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
   pub tasks:  Vec<Task>,
   pub total:  usize,
   pub status: ApiStatus,
}

/// タスク単体レスポンス
#[derive(Debug, Serialize)]
pub struct TaskResponse {
   pub task:   Task,
   pub status: ApiStatus,
}

/// 作成・更新・削除の受領応答
#[derive(Debug, Serialize)]
pub struct TaskMutationResponse {
   pub message: String,
   pub task_id: TaskId,
   pub status:  ApiStatus,
}

impl TaskMutationResponse {
   fn new(message: &str, task_id: TaskId) -> Self {
      Self {
         message: message.to_string(),
         task_id,
         status: ApiStatus::Success,
      }
   }
}

/// GET /api/v1/tasks
pub async fn list_tasks() -> Json<TaskListResponse> {
   let tasks = mock_tasks();

   Json(TaskListResponse {
      total: tasks.len(),
      tasks,
      status: ApiStatus::Success,
   })
}

/// GET /api/v1/tasks/{id}
///
/// ID の存在確認はせず、常にサンプルタスクを返す。
pub async fn get_task(Path(id): Path<String>) -> Json<TaskResponse> {
   Json(TaskResponse {
      task:   Task::sample(&TaskId::from_string(id)),
      status: ApiStatus::Success,
   })
}

/// POST /api/v1/tasks
///
/// ボディは構造のみ検証する。新しいタスク ID を発番して 201 を返す。
pub async fn create_task(
   RequestBody(task): RequestBody<Task>,
) -> (StatusCode, Json<TaskMutationResponse>) {
   let task_id = TaskId::new();

   tracing::debug!(task_id = %task_id, title = %task.title, "タスク作成を受け付けました");

   (
      StatusCode::CREATED,
      Json(TaskMutationResponse::new(
         "Task created successfully",
         task_id,
      )),
   )
}

/// PUT /api/v1/tasks/{id}
pub async fn update_task(
   Path(id): Path<String>,
   RequestBody(task): RequestBody<Task>,
) -> Json<TaskMutationResponse> {
   tracing::debug!(task_id = %id, status = %task.status, "タスク更新を受け付けました");

   Json(TaskMutationResponse::new(
      "Task updated successfully",
      TaskId::from_string(id),
   ))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(Path(id): Path<String>) -> Json<TaskMutationResponse> {
   Json(TaskMutationResponse::new(
      "Task deleted successfully",
      TaskId::from_string(id),
   ))
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[tokio::test]
   async fn test_一覧はモックデータ件数をtotalに持つ() {
      let Json(response) = list_tasks().await;

      assert_eq!(response.total, 2);
      assert_eq!(response.tasks.len(), response.total);
      assert_eq!(response.status, ApiStatus::Success);
   }

   #[tokio::test]
   async fn test_削除はパスのidをそのまま返す() {
      let Json(response) = delete_task(Path("task-42".to_string())).await;

      assert_eq!(response.task_id.as_str(), "task-42");
      assert_eq!(response.message, "Task deleted successfully");
   }
}
