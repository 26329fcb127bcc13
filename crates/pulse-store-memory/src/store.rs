//! [`MemoryStore`] — the in-memory implementation of [`JournalStore`].

use std::{
  future::{Future, ready},
  sync::{Arc, Mutex, MutexGuard},
};

use chrono::Utc;
use pulse_core::{
  mood::{MoodRecord, NewMood},
  signup::SignupRecord,
  store::JournalStore,
};

use crate::{Error, Result};

// ─── Seed ────────────────────────────────────────────────────────────────────

const SEED_MOOD: &str = "calm";
const SEED_NOTE: &str = "demo";

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Collections {
  signups: Vec<SignupRecord>,
  moods:   Vec<MoodRecord>,
}

/// A journal store held entirely in process memory.
///
/// Cloning is cheap — all clones share the same collections.
#[derive(Debug, Clone)]
pub struct MemoryStore {
  inner: Arc<Mutex<Collections>>,
}

impl MemoryStore {
  /// A store holding the demo seed entry (`id` 1) and no signups.
  pub fn new() -> Self {
    let seed = MoodRecord {
      id:          1,
      mood:        SEED_MOOD.to_owned(),
      note:        SEED_NOTE.to_owned(),
      recorded_at: Utc::now(),
    };
    Self {
      inner: Arc::new(Mutex::new(Collections {
        signups: Vec::new(),
        moods:   vec![seed],
      })),
    }
  }

  /// A store with both collections empty and no seed entry.
  pub fn empty() -> Self {
    Self { inner: Arc::new(Mutex::new(Collections::default())) }
  }

  fn lock(&self) -> Result<MutexGuard<'_, Collections>> {
    self.inner.lock().map_err(|_| Error::Poisoned)
  }

  fn push_signup(&self, record: SignupRecord) -> Result<()> {
    self.lock()?.signups.push(record);
    Ok(())
  }

  fn push_mood(&self, input: NewMood) -> Result<MoodRecord> {
    // Reading the length and pushing must happen under the same guard, or two
    // concurrent appends could be handed the same id.
    let mut guard = self.lock()?;
    let record = MoodRecord {
      id:          guard.moods.len() as u64 + 1,
      mood:        input.mood,
      note:        input.note,
      recorded_at: Utc::now(),
    };
    guard.moods.push(record.clone());
    tracing::trace!(id = record.id, "mood appended");
    Ok(record)
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl JournalStore for MemoryStore {
  type Error = Error;

  fn append_signup(
    &self,
    record: SignupRecord,
  ) -> impl Future<Output = Result<()>> + Send + '_ {
    ready(self.push_signup(record))
  }

  fn list_signups(
    &self,
  ) -> impl Future<Output = Result<Vec<SignupRecord>>> + Send + '_ {
    ready(self.lock().map(|c| c.signups.clone()))
  }

  fn append_mood(
    &self,
    input: NewMood,
  ) -> impl Future<Output = Result<MoodRecord>> + Send + '_ {
    ready(self.push_mood(input))
  }

  fn list_moods(
    &self,
  ) -> impl Future<Output = Result<Vec<MoodRecord>>> + Send + '_ {
    ready(self.lock().map(|c| c.moods.clone()))
  }
}
