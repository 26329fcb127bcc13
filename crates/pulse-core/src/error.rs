//! Error types for `pulse-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid email address")]
  InvalidEmail,
}

impl Error {
  /// Machine-readable code carried in the `error` field of a response
  /// envelope.
  pub fn code(&self) -> &'static str {
    match self {
      Error::InvalidEmail => "invalid_email",
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
