//! Handler for `POST /subscribe`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/subscribe` | Body: `{"email":"..."}`; 400 `invalid_email` on a bad address |

use std::sync::Arc;

use axum::{Json, extract::State};
use pulse_core::{email::validate_email, signup::SignupRecord, store::JournalStore};
use serde::Deserialize;
use serde_json::Value;

use crate::{body::JsonBody, envelope::Ack, error::ApiError};

/// JSON body accepted by `POST /subscribe`. `email` is left untyped so that a
/// non-string value is reported as `invalid_email` rather than a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct SubscribeBody {
  pub email: Option<Value>,
}

/// `POST /subscribe` — the store is only touched once the address is valid.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<SubscribeBody>,
) -> Result<Json<Ack>, ApiError>
where
  S: JournalStore,
{
  let email = validate_email(body.email.as_ref())?;
  tracing::debug!("signup accepted");

  store
    .append_signup(SignupRecord::now(email))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(Ack::new()))
}
