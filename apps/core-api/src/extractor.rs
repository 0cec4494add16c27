//! # リクエストボディ抽出
//!
//! [`RequestBody`] は `axum::Json` の薄いラッパー。
//!
//! - ボディが空（長さ 0）ならデコードせず `T::default()` を返す
//! - それ以外は `Json<T>` と同じ規則でデコードし、失敗は
//!   [`CoreApiError::InvalidRequestBody`] になる

use axum::{
   Json,
   body::HttpBody,
   extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::CoreApiError;

/// 空ボディを既定値として扱う JSON ボディ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestBody<T>(pub T);

impl<T, S> FromRequest<S> for RequestBody<T>
where
   T: DeserializeOwned + Default,
   S: Send + Sync,
{
   type Rejection = CoreApiError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      if req.body().size_hint().exact() == Some(0) {
         return Ok(Self(T::default()));
      }

      let Json(value) = Json::<T>::from_request(req, state).await?;
      Ok(Self(value))
   }
}

#[cfg(test)]
mod tests {
   use axum::body::Body;
   use pretty_assertions::assert_eq;
   use serde::Deserialize;

   use super::*;

   #[derive(Debug, Default, PartialEq, Deserialize)]
   #[serde(default)]
   struct Payload {
      name: String,
   }

   #[tokio::test]
   async fn test_空ボディは既定値になる() {
      let request = http::Request::builder()
         .method("POST")
         .body(Body::empty())
         .unwrap();

      let RequestBody(payload) = RequestBody::<Payload>::from_request(request, &())
         .await
         .unwrap();

      assert_eq!(payload, Payload::default());
   }

   #[tokio::test]
   async fn test_jsonボディはデコードされる() {
      let request = http::Request::builder()
         .method("POST")
         .header("content-type", "application/json")
         .body(Body::from(r#"{"name": "x"}"#))
         .unwrap();

      let RequestBody(payload) = RequestBody::<Payload>::from_request(request, &())
         .await
         .unwrap();

      assert_eq!(payload.name, "x");
   }

   #[tokio::test]
   async fn test_content_typeの無い非空ボディは拒否される() {
      let request = http::Request::builder()
         .method("POST")
         .body(Body::from(r#"{"name": "x"}"#))
         .unwrap();

      let result = RequestBody::<Payload>::from_request(request, &()).await;

      assert!(matches!(result, Err(CoreApiError::InvalidRequestBody(_))));
   }
}
