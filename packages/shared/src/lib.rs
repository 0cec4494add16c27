//! # AI Git Workbench 共有ユーティリティ
//!
//! 2 つの HTTP サーフェス（Core API / BFF）で共通に使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, apps）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は入れない（`IntoResponse` 変換は各サービスの責務）

pub mod api_response;
pub mod error_response;
pub mod observability;
pub mod request_id;
pub mod shutdown;

pub use api_response::{Acknowledgement, ApiStatus, PlaceholderResponse};
pub use error_response::{ErrorResponse, ProblemKind};
pub use request_id::RequestId;
