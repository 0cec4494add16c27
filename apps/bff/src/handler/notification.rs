//! # 通知ハンドラ

use axum::Json;
use workbench_shared::PlaceholderResponse;

/// POST /api/v1/notifications/subscribe
pub async fn subscribe_notifications() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Subscribe notifications"))
}

/// POST /api/v1/notifications/send
pub async fn send_notification() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse::endpoint("Send notification"))
}
