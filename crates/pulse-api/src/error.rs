//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::Failure;

/// An error returned by an API handler or body extractor.
///
/// Every variant renders as a `{ "ok": false, "error": "<code>" }` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Invalid(#[from] pulse_core::Error),

  #[error("malformed JSON body: {0}")]
  MalformedBody(String),

  #[error("request body too large")]
  PayloadTooLarge,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn code(&self) -> &'static str {
    match self {
      ApiError::Invalid(e) => e.code(),
      ApiError::MalformedBody(_) => "invalid_json",
      ApiError::PayloadTooLarge => "payload_too_large",
      ApiError::Store(_) => "internal_error",
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Invalid(_) | ApiError::MalformedBody(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if let ApiError::Store(e) = &self {
      tracing::error!(error = %e, "store failure");
    }
    (self.status(), Json(Failure::new(self.code()))).into_response()
  }
}
