//! # インフラ層エラー定義
//!
//! データベース接続で発生するエラーを表現する。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
   /// 接続パラメータが不正
   ///
   /// 設定値は読み込み時に検証しないため、接続を組み立てる段階で初めて検出される。
   #[error("DB_PORT が不正です: {0:?}")]
   InvalidPort(String),

   /// データベースエラー
   ///
   /// 接続失敗、認証エラー、疎通確認（ping）の失敗など。
   #[error("データベースエラー: {0}")]
   Database(#[from] sqlx::Error),
}
