//! Signup records — one per accepted `subscribe` call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::email::EmailAddress;

/// A captured email address. Duplicates are allowed; nothing is ever updated
/// or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
  pub email:       EmailAddress,
  pub recorded_at: DateTime<Utc>,
}

impl SignupRecord {
  /// Stamp `email` with the current server time.
  pub fn now(email: EmailAddress) -> Self {
    Self { email, recorded_at: Utc::now() }
  }
}
