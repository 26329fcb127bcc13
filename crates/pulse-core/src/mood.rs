//! Mood records — journal check-ins with a label and a free-text note.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label stored when the caller omits `mood` or sends an empty one.
pub const DEFAULT_MOOD: &str = "neutral";

/// Note stored when the caller omits `note`.
pub const DEFAULT_NOTE: &str = "";

/// A stored journal entry.
///
/// `id` is `number of existing records + 1` at insertion time, so it is only
/// unique while records are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecord {
  pub id:          u64,
  pub mood:        String,
  pub note:        String,
  pub recorded_at: DateTime<Utc>,
}

/// Input to [`JournalStore::append_mood`](crate::store::JournalStore::append_mood),
/// with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMood {
  pub mood: String,
  pub note: String,
}

impl NewMood {
  pub fn new(mood: impl Into<String>, note: impl Into<String>) -> Self {
    Self { mood: mood.into(), note: note.into() }
  }

  /// Build from raw body fields. Only non-empty strings are kept; anything
  /// else falls back to the default. Content is not checked or truncated.
  pub fn from_fields(mood: Option<&Value>, note: Option<&Value>) -> Self {
    Self {
      mood: text_or(mood, DEFAULT_MOOD),
      note: text_or(note, DEFAULT_NOTE),
    }
  }
}

impl Default for NewMood {
  fn default() -> Self { Self::new(DEFAULT_MOOD, DEFAULT_NOTE) }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
  match value {
    Some(Value::String(s)) if !s.is_empty() => s.clone(),
    _ => default.to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn missing_fields_take_defaults() {
    assert_eq!(NewMood::from_fields(None, None), NewMood::new("neutral", ""));
  }

  #[test]
  fn falsy_fields_take_defaults() {
    let m = NewMood::from_fields(Some(&json!("")), Some(&json!(null)));
    assert_eq!(m, NewMood::default());
    let m = NewMood::from_fields(Some(&json!(false)), Some(&json!(0)));
    assert_eq!(m, NewMood::default());
  }

  #[test]
  fn text_is_kept_verbatim() {
    let long = "x".repeat(100_000);
    let m = NewMood::from_fields(
      Some(&json!("  <b>anxious</b>  ")),
      Some(&json!(long)),
    );
    assert_eq!(m.mood, "  <b>anxious</b>  ");
    assert_eq!(m.note.len(), 100_000);
  }

  #[test]
  fn record_serialises_with_camel_case_timestamp() {
    let record = MoodRecord {
      id:          1,
      mood:        "calm".into(),
      note:        "demo".into(),
      recorded_at: "2026-01-02T03:04:05Z".parse().unwrap(),
    };
    let v = serde_json::to_value(&record).unwrap();
    assert_eq!(
      v,
      json!({
        "id": 1,
        "mood": "calm",
        "note": "demo",
        "recordedAt": "2026-01-02T03:04:05Z",
      })
    );
  }
}
