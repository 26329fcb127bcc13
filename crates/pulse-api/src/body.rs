//! Lenient JSON body extractor.
//!
//! Unlike [`axum::Json`], a missing body, a non-JSON content type, or a JSON
//! value that is not an object all yield `T::default()`. Only a body that
//! claims to be JSON and fails to parse is rejected, plus any body over the
//! router's [`DefaultBodyLimit`](axum::extract::DefaultBodyLimit).

use axum::{
  extract::{FromRequest, Request},
  http::{StatusCode, header},
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
  T: DeserializeOwned + Default,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, ApiError> {
    let is_json = req
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .is_some_and(is_json_content_type);

    let bytes = Bytes::from_request(req, state)
      .await
      .map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
          ApiError::PayloadTooLarge
        } else {
          ApiError::MalformedBody(e.body_text())
        }
      })?;

    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
      return Ok(Self(T::default()));
    }

    let value: Value = serde_json::from_slice(&bytes)
      .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    match value {
      Value::Object(_) => serde_json::from_value(value)
        .map(Self)
        .map_err(|e| ApiError::MalformedBody(e.to_string())),
      _ => Ok(Self(T::default())),
    }
  }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn is_json_content_type(value: &str) -> bool {
  let essence = value.split(';').next().unwrap_or_default().trim();
  let Some((kind, subtype)) = essence.split_once('/') else {
    return false;
  };
  kind.eq_ignore_ascii_case("application")
    && (subtype.eq_ignore_ascii_case("json")
      || subtype.to_ascii_lowercase().ends_with("+json"))
}
