//! # Core API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! ハンドラが返しうるエラーはリクエストボディのデコード失敗のみ。
//! JSON 構文エラー、型の不一致、`Content-Type` の欠落はいずれも
//! 同じ 400 レスポンスにまとめる。

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use workbench_shared::ErrorResponse;

/// デコード失敗時にクライアントへ返す詳細メッセージ
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// Core API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum CoreApiError {
   /// リクエストボディを解釈できない（400 Bad Request）
   #[error("リクエストボディが不正です: {0}")]
   InvalidRequestBody(#[from] JsonRejection),

   /// 内部サーバーエラー（500 Internal Server Error）
   #[error("内部サーバーエラー")]
   Internal(#[from] anyhow::Error),
}

impl IntoResponse for CoreApiError {
   fn into_response(self) -> Response {
      let (status, error_response) = match self {
         CoreApiError::InvalidRequestBody(rejection) => {
            tracing::debug!("リクエストボディのデコードに失敗しました: {}", rejection.body_text());
            (
               StatusCode::BAD_REQUEST,
               ErrorResponse::bad_request(INVALID_REQUEST_BODY),
            )
         }
         CoreApiError::Internal(err) => {
            // 内部エラーの詳細はログのみ
            tracing::error!("内部エラー: {:?}", err);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(error_response)).into_response()
   }
}
