//! # リクエスト追跡用の Request ID
//!
//! HTTP リクエストごとに付与する識別子。
//! `X-Request-Id` ヘッダとして伝播させ、ログとレスポンスを突き合わせるために使う。
//!
//! ## 設計判断
//!
//! - **Newtype パターン**: `String` をラップすることで型安全性を確保
//! - **UUID v7 採用**: タイムスタンプを含むため時系列でソート可能
//! - **文字列表現**: クライアント提供の任意の値もそのまま保持できるようにする
//!
//! ## 使用例
//!
//! ```rust
//! use workbench_shared::RequestId;
//!
//! // 新規生成（UUID v7 ベース）
//! let id = RequestId::new();
//!
//! // 外部から受け取った値で作成（例: HTTP ヘッダから）
//! let id = RequestId::from_string("client-provided-id");
//! assert_eq!(id.as_str(), "client-provided-id");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// リクエスト追跡用の一意識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
   /// 新しい Request ID を生成する
   ///
   /// UUID v7 を使用するため、生成順にソート可能。
   pub fn new() -> Self {
      Self(Uuid::now_v7().to_string())
   }

   /// 文字列から Request ID を作成する
   pub fn from_string(s: impl Into<String>) -> Self {
      Self(s.into())
   }

   /// 内部の文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl Default for RequestId {
   fn default() -> Self {
      Self::new()
   }
}

impl fmt::Display for RequestId {
   /// `tracing` マクロの `%` フォーマッタで使用される。
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::{assert_eq, assert_ne};

   use super::*;

   #[test]
   fn test_newは毎回異なるidを生成する() {
      let id1 = RequestId::new();
      let id2 = RequestId::new();
      assert_ne!(id1, id2);
   }

   #[test]
   fn test_newはuuid_v7形式である() {
      let id = RequestId::new();
      let uuid = Uuid::parse_str(id.as_str()).unwrap();
      assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
   }

   #[test]
   fn test_from_stringは値を保持する() {
      let id = RequestId::from_string("test-request-id");
      assert_eq!(id.as_str(), "test-request-id");
      assert_eq!(format!("{}", id), "test-request-id");
   }
}
