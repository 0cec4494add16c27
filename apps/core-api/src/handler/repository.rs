//! # リポジトリハンドラ
//!
//! リポジトリ接続の CRUD エンドポイント。永続化は行わず、モックデータと受領応答を返す。
//!
//! ## エンドポイント
//!
//! ```text
//! GET    /api/v1/repositories
//! GET    /api/v1/repositories/{id}
//! POST   /api/v1/repositories
//! PUT    /api/v1/repositories/{id}
//! DELETE /api/v1/repositories/{id}
//! ```

use axum::{
   Json,
   extract::Path,
   http::StatusCode,
};
use serde::Serialize;
use workbench_domain::repository::{
   CONNECTED_REPOSITORY_ID,
   Repository,
   mock_repositories,
   workflow_repository,
};
use workbench_shared::ApiStatus;

use crate::extractor::RequestBody;

/// リポジトリ一覧レスポンス
#[derive(Debug, Serialize)]
pub struct RepositoryListResponse {
   pub repositories: Vec<Repository>,
   pub total:        usize,
   pub status:       ApiStatus,
}

/// リポジトリ単体レスポンス
#[derive(Debug, Serialize)]
pub struct RepositoryResponse {
   pub repository: Repository,
   /// リクエストされた ID（パスパラメータをそのまま返す）
   pub repo_id:    String,
   pub status:     ApiStatus,
}

/// 受領応答に載せるリポジトリ ID
///
/// 新規接続では払い出した数値 ID、更新・削除ではパスパラメータの文字列を返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RepositoryRef {
   Assigned(i64),
   Path(String),
}

/// 接続・更新・切断の受領応答
#[derive(Debug, Serialize)]
pub struct RepositoryMutationResponse {
   pub message:       String,
   pub repository_id: RepositoryRef,
   pub status:        ApiStatus,
}

impl RepositoryMutationResponse {
   fn new(message: &str, repository_id: RepositoryRef) -> Self {
      Self {
         message: message.to_string(),
         repository_id,
         status: ApiStatus::Success,
      }
   }
}

/// GET /api/v1/repositories
pub async fn list_repositories() -> Json<RepositoryListResponse> {
   let repositories = mock_repositories();

   Json(RepositoryListResponse {
      total: repositories.len(),
      repositories,
      status: ApiStatus::Success,
   })
}

/// GET /api/v1/repositories/{id}
///
/// ID に関わらず `workflow` リポジトリを返す。
pub async fn get_repository(Path(id): Path<String>) -> Json<RepositoryResponse> {
   Json(RepositoryResponse {
      repository: workflow_repository(),
      repo_id:    id,
      status:     ApiStatus::Success,
   })
}

/// POST /api/v1/repositories
pub async fn create_repository(
   RequestBody(repository): RequestBody<Repository>,
) -> (StatusCode, Json<RepositoryMutationResponse>) {
   tracing::debug!(full_name = %repository.full_name, "リポジトリ接続を受け付けました");

   (
      StatusCode::CREATED,
      Json(RepositoryMutationResponse::new(
         "Repository connected successfully",
         RepositoryRef::Assigned(CONNECTED_REPOSITORY_ID),
      )),
   )
}

/// PUT /api/v1/repositories/{id}
pub async fn update_repository(
   Path(id): Path<String>,
   RequestBody(_repository): RequestBody<Repository>,
) -> Json<RepositoryMutationResponse> {
   Json(RepositoryMutationResponse::new(
      "Repository updated successfully",
      RepositoryRef::Path(id),
   ))
}

/// DELETE /api/v1/repositories/{id}
pub async fn delete_repository(Path(id): Path<String>) -> Json<RepositoryMutationResponse> {
   Json(RepositoryMutationResponse::new(
      "Repository disconnected successfully",
      RepositoryRef::Path(id),
   ))
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_repository_refは数値と文字列をそのまま出力する() {
      assert_eq!(
         serde_json::to_value(RepositoryRef::Assigned(123)).unwrap(),
         serde_json::json!(123)
      );
      assert_eq!(
         serde_json::to_value(RepositoryRef::Path("7".to_string())).unwrap(),
         serde_json::json!("7")
      );
   }

   #[tokio::test]
   async fn test_単体取得はidに関わらずworkflowを返す() {
      let Json(response) = get_repository(Path("999".to_string())).await;

      assert_eq!(response.repository.name, "workflow");
      assert_eq!(response.repo_id, "999");
   }
}
