//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定、HTTP リクエストの追跡を提供する。
//! 2 サーフェス（Core API / BFF）で共通のログ初期化ロジックを集約し、
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

use http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId as HttpRequestId};

use crate::RequestId;

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

impl LogFormat {
   /// 文字列からログ形式をパースする
   ///
   /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
   /// stderr に警告を出力する（この時点ではまだ subscriber が無い）。
   pub fn parse(s: &str) -> Self {
      match s {
         "json" => Self::Json,
         "pretty" => Self::Pretty,
         other => {
            eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
            Self::Pretty
         }
      }
   }

   /// 環境変数 `LOG_FORMAT` から読み取る
   pub fn from_env() -> Self {
      match std::env::var("LOG_FORMAT") {
         Ok(val) => Self::parse(&val),
         Err(_) => Self::default(),
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
   /// サービス名（JSON ログの `span.service` フィールドに出力）
   pub service_name: String,
   /// ログ出力形式
   pub log_format:   LogFormat,
}

impl TracingConfig {
   /// 新しい設定を作成する
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }

   /// 環境変数から設定を読み取る
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::new(service_name, LogFormat::from_env())
   }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は `"info,workbench=debug"` をデフォルトとする。
///
/// サービス名は呼び出し元で `tracing::info_span!("app", service = "...")` を設定することで
/// `span.service` として JSON に含まれる。
pub fn init_tracing(config: TracingConfig) {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| "info,workbench=debug".into());

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_target(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .init();
}

/// UUID v7 で `X-Request-Id` を発番する `MakeRequestId` 実装
///
/// `SetRequestIdLayer::x_request_id(MakeRequestUuidV7)` として使う。
/// クライアントが既にヘッダを付けている場合、レイヤーはこの実装を呼ばない。
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
   fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<HttpRequestId> {
      let id = RequestId::new();
      HeaderValue::from_str(id.as_str())
         .ok()
         .map(HttpRequestId::new)
   }
}

/// `TraceLayer::make_span_with` 用のスパン生成関数
///
/// メソッド・URI・Request ID をスパンのフィールドに載せ、
/// リクエスト処理中のすべてのログに自動で付与されるようにする。
pub fn make_request_span<B>(request: &Request<B>) -> tracing::Span {
   let request_id = request
      .headers()
      .get("x-request-id")
      .and_then(|v| v.to_str().ok())
      .unwrap_or("-");

   tracing::info_span!(
      "request",
      method = %request.method(),
      uri = %request.uri(),
      request_id = %request_id,
   )
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   // ===== LogFormat::parse テスト =====

   #[test]
   fn test_parse_jsonでjsonを返す() {
      assert_eq!(LogFormat::parse("json"), LogFormat::Json);
   }

   #[test]
   fn test_parse_不正な値でprettyにフォールバックする() {
      assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
      assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
      assert_eq!(LogFormat::parse("JSON"), LogFormat::Pretty);
   }

   #[test]
   fn test_newでフィールドが正しく設定される() {
      let config = TracingConfig::new("core-api", LogFormat::Json);

      assert_eq!(config.service_name, "core-api");
      assert_eq!(config.log_format, LogFormat::Json);
   }

   // ===== MakeRequestUuidV7 テスト =====

   #[test]
   fn test_make_request_idがuuid_v7を発番する() {
      let request = Request::builder().uri("/health").body(()).unwrap();
      let id = MakeRequestUuidV7.make_request_id(&request).unwrap();

      let raw = id.header_value().to_str().unwrap();
      let uuid = uuid::Uuid::parse_str(raw).unwrap();
      assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
   }
}
