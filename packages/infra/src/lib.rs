//! # AI Git Workbench インフラ層
//!
//! 外部システムとの接続を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: MySQL への接続プール作成と疎通確認
//!
//! 現時点ではハンドラから永続化処理は呼ばれない。起動時の疎通確認と
//! ヘルスチェックでの接続状態の報告にのみ使用する。
//!
//! ## モジュール構成
//!
//! - [`db`] - MySQL データベース接続管理
//! - [`error`] - インフラ層エラー定義

pub mod db;
pub mod error;

pub use db::{Database, DatabaseConfig, PoolStats};
pub use error::InfraError;
