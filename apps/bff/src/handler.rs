//! # HTTP リクエストハンドラ
//!
//! `/health` を除き、すべて `{ "message": "<名前> endpoint" }` を返すプレースホルダー。
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs               # 親モジュール（re-export）
//! └── handler/
//!     ├── ai.rs            # AI 処理
//!     ├── auth.rs          # GitHub OAuth・ログアウト
//!     ├── health.rs        # ヘルスチェック
//!     ├── notification.rs  # 通知
//!     ├── repos.rs         # リポジトリ操作
//!     └── task.rs          # タスク操作
//! ```

pub mod ai;
pub mod auth;
pub mod health;
pub mod notification;
pub mod repos;
pub mod task;

pub use ai::{ai_process, token_status};
pub use auth::{github_auth, github_callback, logout};
pub use health::health_check;
pub use notification::{send_notification, subscribe_notifications};
pub use repos::{clone_repo, get_repos, repo_status};
pub use task::{create_task, delete_task, execute_task, get_tasks, update_task};
