//! Error type for `pulse-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A thread panicked while holding the collections lock.
  #[error("store lock poisoned")]
  Poisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
