//! # ミドルウェア
//!
//! BFF 用のミドルウェアを提供する。

mod auth;
mod cors;

pub use auth::require_auth;
pub use cors::{cors_layer, preflight_no_content};
