//! # 認証ハンドラ
//!
//! GitHub OAuth フローの入口とログアウト。OAuth 自体は未実装。

use axum::Json;
use workbench_shared::PlaceholderResponse;

/// GET /api/v1/auth/github
pub async fn github_auth() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("GitHub auth"))
}

/// GET /api/v1/auth/github/callback
pub async fn github_callback() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("GitHub callback"))
}

/// POST /api/v1/auth/logout
pub async fn logout() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Logout"))
}
