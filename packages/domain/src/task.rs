//! # タスク
//!
//! リポジトリとエピックに紐づく作業項目。
//!
//! ## 設計判断
//!
//! ### ステータスは自由形式の文字列
//!
//! `status` は `"pending"`, `"in_progress"`, `"completed"` などを想定しているが、
//! 列挙型には閉じていない。上流（フロントエンド）がまだ値を確定させていないため、
//! 受け取った文字列をそのまま保持する。
//!
//! ### 全フィールドが省略可能なデコード
//!
//! リクエストボディは構造のみ検証する。欠けたフィールドと `null` のフィールドは
//! ゼロ値になる。数値は符号付きで、負の値もそのまま受け付ける。
//!
//! ### 空文字列の省略
//!
//! `branch`, `started_at`, `completed_at`, `metadata` は空のときシリアライズしない。

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use uuid::Uuid;

/// タスクの一意識別子
///
/// モックデータでは `task-1` のような短い文字列、新規作成時は
/// `task-<UUID v7>` の形式を取る。どちらも不透明な文字列として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
   /// 新しいタスク ID を生成する
   ///
   /// UUID v7 を使用するため、生成順にソート可能。
   pub fn new() -> Self {
      Self(format!("task-{}", Uuid::now_v7()))
   }

   /// 既存の文字列からタスク ID を作成する
   ///
   /// パスパラメータなど、外部から受け取った値を検証せずに包む。
   pub fn from_string(s: impl Into<String>) -> Self {
      Self(s.into())
   }

   /// 内部の文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl Default for TaskId {
   fn default() -> Self {
      Self::new()
   }
}

impl fmt::Display for TaskId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// タスク
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
   #[serde_as(as = "DefaultOnNull")]
   pub id:           String,
   #[serde_as(as = "DefaultOnNull")]
   pub title:        String,
   #[serde_as(as = "DefaultOnNull")]
   pub description:  String,
   #[serde_as(as = "DefaultOnNull")]
   pub status:       String,
   /// 所属リポジトリ名（リポジトリストアとの整合性は検証しない）
   #[serde_as(as = "DefaultOnNull")]
   pub repository:   String,
   /// エピック（タスクのグルーピングラベル）
   #[serde_as(as = "DefaultOnNull")]
   pub epic:         String,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "String::is_empty")]
   pub branch:       String,
   #[serde_as(as = "DefaultOnNull")]
   pub created_at:   String,
   #[serde_as(as = "DefaultOnNull")]
   pub updated_at:   String,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "String::is_empty")]
   pub started_at:   String,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "String::is_empty")]
   pub completed_at: String,
   /// AI 処理で消費したトークン数（符号付き、値の範囲は検証しない）
   #[serde_as(as = "DefaultOnNull")]
   pub tokens_used:  i64,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "BTreeMap::is_empty")]
   pub metadata:     BTreeMap<String, String>,
}

impl Task {
   /// 単一タスク取得用のサンプルを返す
   ///
   /// ID だけはリクエストの値をそのまま使い、残りは固定値で埋める。
   pub fn sample(id: &TaskId) -> Self {
      Self {
         id: id.to_string(),
         title: "Sample Task".to_string(),
         description: "This is a sample task for testing".to_string(),
         status: "pending".to_string(),
         repository: "workflow".to_string(),
         epic: "development".to_string(),
         created_at: "2024-01-15T10:00:00Z".to_string(),
         updated_at: "2024-01-15T10:00:00Z".to_string(),
         tokens_used: 0,
         ..Self::default()
      }
   }
}

/// タスク一覧のモックデータ
pub fn mock_tasks() -> Vec<Task> {
   vec![
      Task {
         id: "task-1".to_string(),
         title: "Implement user authentication".to_string(),
         description: "Add JWT-based authentication to the API".to_string(),
         status: "in_progress".to_string(),
         repository: "workflow".to_string(),
         epic: "authentication".to_string(),
         branch: "feature/auth".to_string(),
         created_at: "2024-01-15T10:00:00Z".to_string(),
         updated_at: "2024-01-15T14:30:00Z".to_string(),
         started_at: "2024-01-15T11:00:00Z".to_string(),
         tokens_used: 1500,
         ..Task::default()
      },
      Task {
         id: "task-2".to_string(),
         title: "Setup database migrations".to_string(),
         description: "Create initial database schema and migration system".to_string(),
         status: "completed".to_string(),
         repository: "workflow".to_string(),
         epic: "infrastructure".to_string(),
         branch: "feature/db-setup".to_string(),
         created_at: "2024-01-14T09:00:00Z".to_string(),
         updated_at: "2024-01-15T16:00:00Z".to_string(),
         started_at: "2024-01-14T10:00:00Z".to_string(),
         completed_at: "2024-01-15T16:00:00Z".to_string(),
         tokens_used: 2300,
         ..Task::default()
      },
   ]
}

#[cfg(test)]
mod tests {
   use pretty_assertions::{assert_eq, assert_ne};
   use rstest::rstest;

   use super::*;

   #[test]
   fn test_task_idの新規生成はプレフィックス付きで一意() {
      let id1 = TaskId::new();
      let id2 = TaskId::new();

      assert!(id1.as_str().starts_with("task-"));
      assert_ne!(id1, id2);
   }

   #[test]
   fn test_モックデータは2件() {
      let tasks = mock_tasks();

      assert_eq!(tasks.len(), 2);
      assert_eq!(tasks[0].id, "task-1");
      assert_eq!(tasks[1].status, "completed");
   }

   #[test]
   fn test_sampleはリクエストのidを使う() {
      let task = Task::sample(&TaskId::from_string("abc"));

      assert_eq!(task.id, "abc");
      assert_eq!(task.status, "pending");
      assert_eq!(task.tokens_used, 0);
   }

   #[rstest]
   #[case("branch")]
   #[case("started_at")]
   #[case("completed_at")]
   #[case("metadata")]
   fn test_空のフィールドはシリアライズされない(#[case] field: &str) {
      let json = serde_json::to_value(Task::sample(&TaskId::from_string("x"))).unwrap();

      assert!(json.get(field).is_none());
   }

   #[test]
   fn test_未完了タスクはcompleted_atを持たない() {
      let json = serde_json::to_value(&mock_tasks()[0]).unwrap();

      assert!(json.get("completed_at").is_none());
      assert_eq!(json["branch"], "feature/auth");
   }

   #[test]
   fn test_空オブジェクトはゼロ値でデコードされる() {
      let task: Task = serde_json::from_str("{}").unwrap();

      assert_eq!(task, Task::default());
   }

   #[rstest]
   #[case(r#"{"branch": null}"#)]
   #[case(r#"{"metadata": null, "tokens_used": null}"#)]
   #[case(r#"{"title": null, "status": null}"#)]
   fn test_nullのフィールドはゼロ値になる(#[case] body: &str) {
      let task: Task = serde_json::from_str(body).unwrap();

      assert_eq!(task, Task::default());
   }

   #[test]
   fn test_負のトークン数を受け付ける() {
      let task: Task = serde_json::from_str(r#"{"tokens_used": -1}"#).unwrap();

      assert_eq!(task.tokens_used, -1);
   }

   #[test]
   fn test_statusは任意の文字列を受け付ける() {
      let task: Task =
         serde_json::from_str(r#"{"title": "x", "status": "waiting-for-review"}"#).unwrap();

      assert_eq!(task.status, "waiting-for-review");
   }
}
