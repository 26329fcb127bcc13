//! JSON API for pulse: email signups and mood journal entries.
//!
//! Exposes an axum [`Router`] backed by any [`pulse_core::store::JournalStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", pulse_api::api_router(store.clone()))
//! ```

pub mod body;
pub mod envelope;
pub mod error;
pub mod mood;
pub mod subscribe;

use std::sync::Arc;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use pulse_core::store::JournalStore;

pub use error::ApiError;

/// Largest request body accepted, in bytes. Mood text is otherwise unbounded;
/// anything bigger is answered with 413 `payload_too_large`.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: JournalStore + 'static,
{
  Router::new()
    .route("/subscribe", post(subscribe::create::<S>))
    .route("/mood", get(mood::list::<S>).post(mood::create::<S>))
    .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
