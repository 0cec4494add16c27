//! # BFF アプリケーション構築
//!
//! ルーター構築を担当する。`main.rs` はサーバー起動に集中する。
//!
//! ## ルートグループ
//!
//! | グループ | 認証ゲート |
//! |----------|-----------|
//! | `/api/v1/auth` | なし |
//! | `/api/v1/repos` | あり |
//! | `/api/v1/tasks` | あり |
//! | `/api/v1/ai` | あり |
//! | `/api/v1/notifications` | あり |
//!
//! 末尾スラッシュはルーティング前に取り除く。`/api/v1/tasks/` と `/api/v1/tasks` は
//! 同じハンドラに届く。

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use tower_http::{
    normalize_path::NormalizePath,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use workbench_shared::observability::{MakeRequestUuidV7, make_request_span};

use crate::{
    handler::{
        ai_process,
        clone_repo,
        create_task,
        delete_task,
        execute_task,
        get_repos,
        get_tasks,
        github_auth,
        github_callback,
        health_check,
        logout,
        repo_status,
        send_notification,
        subscribe_notifications,
        token_status,
        update_task,
    },
    middleware::{cors_layer, preflight_no_content, require_auth},
};

/// ルーターを構築する
///
/// ルーターは `NormalizePath` で包んで返す。`Router::layer` ではルーティング後に
/// 適用されるため、パスの正規化はルーターの外側で行う。
pub fn build_app() -> NormalizePath<Router> {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/repos", repos_routes())
        .nest("/tasks", task_routes())
        .nest("/ai", ai_routes())
        .nest("/notifications", notification_routes());

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(cors_layer())
        .layer(from_fn(preflight_no_content))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    NormalizePath::trim_trailing_slash(router)
}

fn auth_routes() -> Router {
    Router::new()
        .route("/github", get(github_auth))
        .route("/github/callback", get(github_callback))
        .route("/logout", post(logout))
}

fn repos_routes() -> Router {
    Router::new()
        .route("/", get(get_repos))
        .route("/clone", post(clone_repo))
        .route("/{id}/status", get(repo_status))
        .layer(from_fn(require_auth))
}

fn task_routes() -> Router {
    Router::new()
        .route("/", get(get_tasks).post(create_task))
        .route("/{id}", put(update_task).delete(delete_task))
        .route("/{id}/execute", post(execute_task))
        .layer(from_fn(require_auth))
}

fn ai_routes() -> Router {
    Router::new()
        .route("/process", post(ai_process))
        .route("/tokens/status", get(token_status))
        .layer(from_fn(require_auth))
}

fn notification_routes() -> Router {
    Router::new()
        .route("/subscribe", post(subscribe_notifications))
        .route("/send", post(send_notification))
        .layer(from_fn(require_auth))
}
