//! Handlers for `/mood` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/mood` | All entries, oldest first |
//! | `POST` | `/mood` | Body: `{"mood":"...","note":"..."}`, both optional |

use std::sync::Arc;

use axum::{Json, extract::State};
use pulse_core::{
  mood::{MoodRecord, NewMood},
  store::JournalStore,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
  body::JsonBody,
  envelope::{Item, Items},
  error::ApiError,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /mood`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Items<MoodRecord>>, ApiError>
where
  S: JournalStore,
{
  let items = store
    .list_moods()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(Items::new(items)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /mood`.
#[derive(Debug, Default, Deserialize)]
pub struct NewMoodBody {
  pub mood: Option<Value>,
  pub note: Option<Value>,
}

impl From<NewMoodBody> for NewMood {
  fn from(b: NewMoodBody) -> Self {
    NewMood::from_fields(b.mood.as_ref(), b.note.as_ref())
  }
}

/// `POST /mood` — never rejects its input; absent fields take their defaults.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<NewMoodBody>,
) -> Result<Json<Item<MoodRecord>>, ApiError>
where
  S: JournalStore,
{
  let record = store
    .append_mood(NewMood::from(body))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  tracing::debug!(id = record.id, mood = %record.mood, "mood recorded");
  Ok(Json(Item::new(record)))
}
