//! # AI Git Workbench BFF
//!
//! フロントエンド向けの HTTP サーバー。認証・リポジトリ・タスク・AI・通知の
//! ルートグループを持つが、ハンドラはまだプレースホルダーのみ。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - 認証ゲート、CORS

pub mod app_builder;
pub mod config;
pub mod handler;
pub mod middleware;
