//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラはすべてステートレス（ヘルスチェックのみ [`HealthState`] を参照する）
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs             # 親モジュール（re-export）
//! └── handler/
//!     ├── github.rs      # GitHub Webhook・リポジトリ一覧
//!     ├── health.rs      # ヘルスチェック・疎通確認
//!     ├── repository.rs  # リポジトリ CRUD（モック）
//!     ├── task.rs        # タスク CRUD（モック）
//!     └── workflow.rs    # ワークフロー（プレースホルダー）
//! ```

pub mod github;
pub mod health;
pub mod repository;
pub mod task;
pub mod workflow;

pub use github::{github_webhook, list_github_repos};
pub use health::{HealthState, detailed_health_check, health_check, ping};
pub use repository::{
   create_repository,
   delete_repository,
   get_repository,
   list_repositories,
   update_repository,
};
pub use task::{create_task, delete_task, get_task, list_tasks, update_task};
pub use workflow::{create_workflow, list_workflows};
