//! # API レスポンスエンベロープ
//!
//! すべてのエンドポイントが返す JSON には `status` 判別子が含まれる。
//! ここでは、モックデータを伴わない「受領応答」と「プレースホルダー応答」を提供する。
//! データを伴うエンベロープ（`{ "tasks": [...], "total": 2, "status": "success" }` など）は
//! リソースごとに形が異なるため、各ハンドラ側で定義する。

use serde::{Deserialize, Serialize};

/// レスポンスの `status` 判別子
///
/// CRUD 系は `"success"`、疎通確認・Webhook 受領などは `"OK"` を返す。
/// 歴史的経緯で 2 種類の表記が混在しているが、クライアントはどちらも成功として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiStatus {
   #[serde(rename = "success")]
   Success,
   #[serde(rename = "OK")]
   Ok,
}

/// 受領応答
///
/// 副作用を持たないハンドラが「受け付けた」ことだけを伝えるための型。
///
/// ```
/// use workbench_shared::{Acknowledgement, ApiStatus};
///
/// let ack = Acknowledgement::ok("pong");
/// assert_eq!(ack.status, ApiStatus::Ok);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
   pub message: String,
   pub status:  ApiStatus,
}

impl Acknowledgement {
   /// 任意の判別子で受領応答を作成する
   pub fn new(message: impl Into<String>, status: ApiStatus) -> Self {
      Self {
         message: message.into(),
         status,
      }
   }

   /// `status: "OK"` の受領応答
   pub fn ok(message: impl Into<String>) -> Self {
      Self::new(message, ApiStatus::Ok)
   }
}

/// 未実装エンドポイントのプレースホルダー応答
///
/// `{ "message": "..." }` のみを返す。判別子を持たない唯一の形。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderResponse {
   pub message: String,
}

impl PlaceholderResponse {
   /// `"<name> endpoint"` 形式のメッセージを作る
   pub fn endpoint(name: &str) -> Self {
      Self {
         message: format!("{name} endpoint"),
      }
   }
}
