//! Response envelopes. Every body carries a boolean `ok` flag.

use serde::Serialize;

/// `{ "ok": true }`
#[derive(Debug, Serialize)]
pub struct Ack {
  pub ok: bool,
}

impl Ack {
  pub fn new() -> Self { Self { ok: true } }
}

impl Default for Ack {
  fn default() -> Self { Self::new() }
}

/// `{ "ok": true, "items": [...] }`
#[derive(Debug, Serialize)]
pub struct Items<T> {
  pub ok:    bool,
  pub items: Vec<T>,
}

impl<T> Items<T> {
  pub fn new(items: Vec<T>) -> Self { Self { ok: true, items } }
}

/// `{ "ok": true, "item": {...} }`
#[derive(Debug, Serialize)]
pub struct Item<T> {
  pub ok:   bool,
  pub item: T,
}

impl<T> Item<T> {
  pub fn new(item: T) -> Self { Self { ok: true, item } }
}

/// `{ "ok": false, "error": "<code>" }`
#[derive(Debug, Serialize)]
pub struct Failure {
  pub ok:    bool,
  pub error: &'static str,
}

impl Failure {
  pub fn new(error: &'static str) -> Self { Self { ok: false, error } }
}
