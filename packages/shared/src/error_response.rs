//! # 問題詳細ボディ
//!
//! Core API がリクエストを処理できなかったときに返す JSON ボディ。
//! 形式は RFC 9457 の Problem Details に従う。
//!
//! 返しうる問題は [`ProblemKind`] の 2 種類だけ:
//!
//! - 壊れたリクエストボディ（400）
//! - 想定外の内部失敗（500）
//!
//! HTTP レスポンスへの変換は `workbench_core_api::error` が行う。

use serde::{Deserialize, Serialize};

/// `type` フィールドに入る URI の接頭辞
const PROBLEM_TYPE_PREFIX: &str = "https://workbench.example.com/errors";

/// 500 応答の `detail`。失敗の中身はログにだけ残す。
const INTERNAL_DETAIL: &str = "内部エラーが発生しました";

/// 問題の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
   BadRequest,
   Internal,
}

impl ProblemKind {
   fn slug(self) -> &'static str {
      match self {
         Self::BadRequest => "bad-request",
         Self::Internal => "internal-error",
      }
   }

   fn title(self) -> &'static str {
      match self {
         Self::BadRequest => "Bad Request",
         Self::Internal => "Internal Server Error",
      }
   }

   /// HTTP ステータスコード
   pub fn status(self) -> u16 {
      match self {
         Self::BadRequest => 400,
         Self::Internal => 500,
      }
   }
}

/// Problem Details ボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub problem_type: String,
   pub title:        String,
   pub status:       u16,
   pub detail:       String,
}

impl ErrorResponse {
   fn of(kind: ProblemKind, detail: impl Into<String>) -> Self {
      Self {
         problem_type: format!("{PROBLEM_TYPE_PREFIX}/{}", kind.slug()),
         title:        kind.title().to_string(),
         status:       kind.status(),
         detail:       detail.into(),
      }
   }

   /// 壊れたリクエストボディ
   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::of(ProblemKind::BadRequest, detail)
   }

   /// 内部失敗。`detail` は常に同じ文言になる。
   pub fn internal_error() -> Self {
      Self::of(ProblemKind::Internal, INTERNAL_DETAIL)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use super::*;

   #[test]
   fn test_ボディ不正の応答はデコード失敗の文言を運ぶ() {
      let body = serde_json::to_value(ErrorResponse::bad_request("Invalid request body")).unwrap();

      assert_eq!(
         body,
         json!({
            "type": "https://workbench.example.com/errors/bad-request",
            "title": "Bad Request",
            "status": 400,
            "detail": "Invalid request body",
         })
      );
   }

   #[test]
   fn test_内部失敗の応答は原因を含まない() {
      let error = ErrorResponse::internal_error();

      assert_eq!(error.status, ProblemKind::Internal.status());
      assert_eq!(error.detail, INTERNAL_DETAIL);
      assert!(error.problem_type.ends_with("/internal-error"));
   }

   #[test]
   fn test_クライアントが受け取ったボディを読み戻せる() {
      let received = r#"{
         "type": "https://workbench.example.com/errors/bad-request",
         "title": "Bad Request",
         "status": 400,
         "detail": "Invalid request body"
      }"#;

      let parsed: ErrorResponse = serde_json::from_str(received).unwrap();

      assert_eq!(parsed, ErrorResponse::bad_request("Invalid request body"));
   }
}
