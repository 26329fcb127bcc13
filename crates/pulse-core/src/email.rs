//! Email address validation — the gate in front of every signup write.
//!
//! The check is purely syntactic: `local@domain.tld` with no whitespace and no
//! extra `@` before the final dot-separated part. There is no DNS lookup, and
//! the input is never trimmed or case-folded.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("valid email regex")
});

/// An email address that has passed [`EmailAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
  pub fn parse(input: &str) -> Result<Self> {
    if EMAIL_RE.is_match(input) {
      Ok(Self(input.to_owned()))
    } else {
      Err(Error::InvalidEmail)
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }
}

impl AsRef<str> for EmailAddress {
  fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for EmailAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Validate the raw `email` field of a request body.
///
/// Fails when the field is absent, `null`, not a string, or not shaped like
/// an address.
pub fn validate_email(input: Option<&Value>) -> Result<EmailAddress> {
  match input {
    Some(Value::String(s)) => EmailAddress::parse(s),
    _ => Err(Error::InvalidEmail),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn accepts_plain_addresses() {
    for s in [
      "a@b.com",
      "first.last@example.co.uk",
      "user+tag@sub.domain.io",
      "UPPER@CASE.ORG",
    ] {
      let email = EmailAddress::parse(s).unwrap();
      assert_eq!(email.as_str(), s);
    }
  }

  #[test]
  fn rejects_missing_at() {
    for s in ["", "plainaddress", "example.com", "a.b.c"] {
      assert_eq!(EmailAddress::parse(s), Err(Error::InvalidEmail), "{s:?}");
    }
  }

  #[test]
  fn rejects_missing_dot_after_at() {
    for s in ["a@b", "a.b@c", "user@localhost", "a@b."] {
      assert_eq!(EmailAddress::parse(s), Err(Error::InvalidEmail), "{s:?}");
    }
  }

  #[test]
  fn rejects_whitespace() {
    for s in [" a@b.com", "a@b.com ", "a b@c.com", "a@b .com", "a@b.c om"] {
      assert_eq!(EmailAddress::parse(s), Err(Error::InvalidEmail), "{s:?}");
    }
  }

  #[test]
  fn rejects_empty_local_or_domain() {
    for s in ["@b.com", "a@.com", "a@@b.com"] {
      assert_eq!(EmailAddress::parse(s), Err(Error::InvalidEmail), "{s:?}");
    }
  }

  #[test]
  fn does_not_normalise() {
    let email = EmailAddress::parse("Alice@Example.COM").unwrap();
    assert_eq!(email.to_string(), "Alice@Example.COM");
  }

  #[test]
  fn validate_email_requires_a_string() {
    assert_eq!(validate_email(None), Err(Error::InvalidEmail));
    assert_eq!(validate_email(Some(&json!(null))), Err(Error::InvalidEmail));
    assert_eq!(validate_email(Some(&json!(42))), Err(Error::InvalidEmail));
    assert_eq!(
      validate_email(Some(&json!(["a@b.com"]))),
      Err(Error::InvalidEmail)
    );
    assert_eq!(
      validate_email(Some(&json!("a@b.com"))).unwrap().as_str(),
      "a@b.com"
    );
  }

  #[test]
  fn error_code_is_stable() {
    assert_eq!(Error::InvalidEmail.code(), "invalid_email");
  }
}
