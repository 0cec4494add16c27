//! # リポジトリ
//!
//! ワークベンチに接続された GitHub リポジトリ。
//! 表示用のメタデータ（言語・トピック・スター数など）と、
//! ワークベンチ側の接続状態（`is_connected`, `last_sync`）を併せ持つ。

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// 新規接続時に払い出す（モックの）リポジトリ ID
pub const CONNECTED_REPOSITORY_ID: i64 = 123;

/// リポジトリ
///
/// デコード時、`null` のフィールドはゼロ値として扱う。
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
   #[serde_as(as = "DefaultOnNull")]
   pub id:           i64,
   #[serde_as(as = "DefaultOnNull")]
   pub name:         String,
   /// `owner/name` 形式
   #[serde_as(as = "DefaultOnNull")]
   pub full_name:    String,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "String::is_empty")]
   pub description:  String,
   #[serde_as(as = "DefaultOnNull")]
   pub private:      bool,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "String::is_empty")]
   pub language:     String,
   #[serde_as(as = "DefaultOnNull")]
   pub url:          String,
   #[serde_as(as = "DefaultOnNull")]
   pub html_url:     String,
   #[serde_as(as = "DefaultOnNull")]
   pub clone_url:    String,
   #[serde_as(as = "DefaultOnNull")]
   pub stars:        i64,
   #[serde_as(as = "DefaultOnNull")]
   pub forks:        i64,
   #[serde_as(as = "DefaultOnNull")]
   pub is_connected: bool,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "String::is_empty")]
   pub last_sync:    String,
   #[serde_as(as = "DefaultOnNull")]
   pub created_at:   String,
   #[serde_as(as = "DefaultOnNull")]
   pub updated_at:   String,
   #[serde_as(as = "DefaultOnNull")]
   #[serde(skip_serializing_if = "Vec::is_empty")]
   pub topics:       Vec<String>,
}

impl Repository {
   /// GitHub 上の URL 群をオーナーと名前から埋めた状態で作る
   fn github(owner: &str, name: &str) -> Self {
      let full_name = format!("{owner}/{name}");
      Self {
         name: name.to_string(),
         url: format!("https://api.github.com/repos/{full_name}"),
         html_url: format!("https://github.com/{full_name}"),
         clone_url: format!("https://github.com/{full_name}.git"),
         full_name,
         ..Self::default()
      }
   }
}

/// 接続済みリポジトリ `workflow`
///
/// 単一取得エンドポイントは ID に関わらずこれを返す。
pub fn workflow_repository() -> Repository {
   Repository {
      id: 1,
      description: "AI-powered workflow management system".to_string(),
      private: false,
      language: "TypeScript".to_string(),
      stars: 15,
      forks: 3,
      is_connected: true,
      last_sync: "2024-01-15T14:30:00Z".to_string(),
      created_at: "2024-01-10T10:00:00Z".to_string(),
      updated_at: "2024-01-15T14:30:00Z".to_string(),
      topics: vec![
         "workflow".to_string(),
         "ai".to_string(),
         "automation".to_string(),
      ],
      ..Repository::github("JokerTrickster", "workflow")
   }
}

/// リポジトリ一覧のモックデータ
pub fn mock_repositories() -> Vec<Repository> {
   vec![
      workflow_repository(),
      Repository {
         id: 2,
         description: "Backend API for workflow management".to_string(),
         private: true,
         language: "Go".to_string(),
         stars: 8,
         forks: 1,
         is_connected: false,
         created_at: "2024-01-12T15:00:00Z".to_string(),
         updated_at: "2024-01-14T09:00:00Z".to_string(),
         topics: vec![
            "api".to_string(),
            "golang".to_string(),
            "backend".to_string(),
         ],
         ..Repository::github("JokerTrickster", "backend-api")
      },
   ]
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_モックデータは2件() {
      let repos = mock_repositories();

      assert_eq!(repos.len(), 2);
      assert_eq!(repos[0].full_name, "JokerTrickster/workflow");
      assert_eq!(repos[1].full_name, "JokerTrickster/backend-api");
   }

   #[test]
   fn test_github_urlが組み立てられる() {
      let repo = workflow_repository();

      assert_eq!(repo.url, "https://api.github.com/repos/JokerTrickster/workflow");
      assert_eq!(repo.html_url, "https://github.com/JokerTrickster/workflow");
      assert_eq!(repo.clone_url, "https://github.com/JokerTrickster/workflow.git");
   }

   #[test]
   fn test_未同期のリポジトリはlast_syncを持たない() {
      let json = serde_json::to_value(&mock_repositories()[1]).unwrap();

      assert!(json.get("last_sync").is_none());
      assert_eq!(json["private"], true);
      assert_eq!(json["is_connected"], false);
   }

   #[test]
   fn test_部分的なボディもデコードできる() {
      let repo: Repository = serde_json::from_str(r#"{"name": "new-repo"}"#).unwrap();

      assert_eq!(repo.name, "new-repo");
      assert_eq!(repo.id, 0);
      assert!(repo.topics.is_empty());
   }

   #[test]
   fn test_nullと負の値もデコードできる() {
      let repo: Repository =
         serde_json::from_str(r#"{"topics": null, "language": null, "stars": -1}"#).unwrap();

      assert!(repo.topics.is_empty());
      assert_eq!(repo.language, "");
      assert_eq!(repo.stars, -1);
   }
}
