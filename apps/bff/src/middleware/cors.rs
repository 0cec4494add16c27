//! # CORS 設定
//!
//! すべてのオリジンを許可し、メソッドとヘッダーは明示したものに限る。
//! プリフライトには本文なしの 204 で応答する。

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};

/// BFF 用の CORS レイヤーを作成する
///
/// - オリジン: すべて
/// - メソッド: GET, POST, PUT, DELETE, OPTIONS
/// - ヘッダー: Origin, Content-Type, Authorization
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// プリフライト応答のステータスを 204 No Content にする
///
/// `cors_layer` の外側に置く。`CorsLayer` が返した 200 の OPTIONS 応答だけを書き換え、
/// それ以外の応答には触れない。
pub async fn preflight_no_content(request: Request<Body>, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;

    let mut response = next.run(request).await;
    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }

    response
}
