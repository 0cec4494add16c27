//! # AI Git Workbench Core API
//!
//! ワークベンチのリソース（タスク・リポジトリ・GitHub 連携・ワークフロー）を
//! `/api/v1` 配下で公開する HTTP サーバー。
//!
//! ハンドラはモックデータまたは受領応答を返すのみで、永続化は行わない。
//! MySQL への接続は `DB_CONNECT_ON_STARTUP=true` のときに起動時の疎通確認と
//! ヘルスチェックで使われる。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extractor`] - 空ボディを許容する JSON ボディ抽出
//! - [`handler`] - HTTP リクエストハンドラ

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extractor;
pub mod handler;
