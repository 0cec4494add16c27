//! # Core API アプリケーション構築
//!
//! ルーター構築を担当する。`main.rs` は設定読み込み・DB 接続・サーバー起動に集中する。
//!
//! ## ルート構成
//!
//! ```text
//! /health                    簡易ヘルスチェック
//! /api/v1/health             詳細ヘルスチェック
//! /api/v1/ping
//! /api/v1/tasks[/{id}]
//! /api/v1/repositories[/{id}]
//! /api/v1/github/{webhook,repos}
//! /api/v1/workflows
//! ```

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use tower_http::{
   cors::CorsLayer,
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};
use workbench_shared::observability::{MakeRequestUuidV7, make_request_span};

use crate::handler::{
   HealthState,
   create_repository,
   create_task,
   create_workflow,
   delete_repository,
   delete_task,
   detailed_health_check,
   get_repository,
   get_task,
   github_webhook,
   health_check,
   list_github_repos,
   list_repositories,
   list_tasks,
   list_workflows,
   ping,
   update_repository,
   update_task,
};

/// API のバージョンプレフィックス
pub const API_PREFIX: &str = "/api/v1";

/// ルーターを構築する
///
/// CORS はすべてのオリジンを許可する。Request ID は UUID v7 で発番し、
/// レスポンスヘッダーにも伝播する。
pub fn build_app(health_state: Arc<HealthState>) -> Router {
   let api = Router::new()
      .route("/ping", get(ping))
      // タスク API
      .route("/tasks", get(list_tasks).post(create_task))
      .route(
         "/tasks/{id}",
         get(get_task).put(update_task).delete(delete_task),
      )
      // リポジトリ API
      .route(
         "/repositories",
         get(list_repositories).post(create_repository),
      )
      .route(
         "/repositories/{id}",
         get(get_repository)
            .put(update_repository)
            .delete(delete_repository),
      )
      // GitHub 連携 API
      .route("/github/webhook", post(github_webhook))
      .route("/github/repos", get(list_github_repos))
      // ワークフロー API
      .route("/workflows", get(list_workflows).post(create_workflow))
      .merge(
         Router::new()
            .route("/health", get(detailed_health_check))
            .with_state(health_state),
      );

   Router::new()
      .route("/health", get(health_check))
      .nest(API_PREFIX, api)
      .layer(CorsLayer::permissive())
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
