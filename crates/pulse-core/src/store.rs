//! The `JournalStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `pulse-store-memory`).
//! The HTTP layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  mood::{MoodRecord, NewMood},
  signup::SignupRecord,
};

/// Abstraction over the two append-only collections behind the API.
///
/// There is intentionally no update or delete operation: signups and journal
/// entries are only ever appended and listed.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait JournalStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Signups ───────────────────────────────────────────────────────────

  /// Append an already-validated signup. Never rejects a record.
  fn append_signup(
    &self,
    record: SignupRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All signups in insertion order.
  fn list_signups(
    &self,
  ) -> impl Future<Output = Result<Vec<SignupRecord>, Self::Error>> + Send + '_;

  // ── Moods ─────────────────────────────────────────────────────────────

  /// Assign the next id, stamp the current time, append, and return the
  /// stored record.
  fn append_mood(
    &self,
    input: NewMood,
  ) -> impl Future<Output = Result<MoodRecord, Self::Error>> + Send + '_;

  /// All mood records in insertion order, oldest first.
  fn list_moods(
    &self,
  ) -> impl Future<Output = Result<Vec<MoodRecord>, Self::Error>> + Send + '_;
}
