//! # AI Git Workbench ドメインモデル
//!
//! API レスポンスの形を決めるエンティティと、そのモックデータを提供する。
//!
//! ## 位置づけ
//!
//! 現時点では永続化層が存在しないため、エンティティはリクエストごとに
//! リテラルから組み立てられる。ライフサイクルも不変条件も持たない。
//!
//! - [`task`] - タスク（エピック単位でまとめられる作業項目）
//! - [`repository`] - 接続済み Git リポジトリ

pub mod repository;
pub mod task;
