//! HTTP surface for pulse.
//!
//! Mounts the JSON API under `/api`, adds the `/healthz` liveness probe, and
//! wraps everything in request tracing and the configured CORS policy.

use std::{path::Path, sync::Arc};

use axum::{
  Json, Router,
  http::{HeaderValue, Method},
  routing::get,
};
use config::{ConfigError, Environment, File, Source};
use pulse_api::envelope::Ack;
use pulse_core::store::JournalStore;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// Origins allowed to call the API from a browser. Empty means any origin.
  #[serde(default)]
  pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:         DEFAULT_HOST.to_string(),
      port:         DEFAULT_PORT,
      cors_origins: Vec::new(),
    }
  }
}

impl ServerConfig {
  /// Load from built-in defaults, then `path` (if it exists), then `PULSE_*`
  /// variables, then the conventional `PORT` and `CORS_ORIGIN` variables.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::layered(
      File::from(path).required(false),
      std::env::var("PORT").ok(),
      std::env::var("CORS_ORIGIN").ok(),
    )
  }

  fn layered<F>(
    file: F,
    port: Option<String>,
    cors_origin: Option<String>,
  ) -> Result<Self, ConfigError>
  where
    F: Source + Send + Sync + 'static,
  {
    let origins = cors_origin.map(|raw| split_origins(&raw));

    config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("cors_origins", Vec::<String>::new())?
      .add_source(file)
      .add_source(
        Environment::with_prefix("PULSE")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("cors_origins"),
      )
      .set_override_option("port", port)?
      .set_override_option("cors_origins", origins)?
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn split_origins(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_owned)
    .collect()
}

// ─── CORS ─────────────────────────────────────────────────────────────────────

/// Whether `origins` means "every origin": an empty list or a `*` entry.
pub fn allows_any_origin(origins: &[String]) -> bool {
  origins.is_empty() || origins.iter().any(|o| o == "*")
}

/// Any origin when [`allows_any_origin`] holds, otherwise exactly the listed
/// ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let layer = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers(Any);

  if allows_any_origin(origins) {
    return layer.allow_origin(Any);
  }

  let allowed: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match HeaderValue::from_str(o) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring unparseable CORS origin");
        None
      }
    })
    .collect();
  layer.allow_origin(AllowOrigin::list(allowed))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application router for `store`.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: JournalStore + 'static,
{
  Router::new()
    .route("/healthz", get(healthz))
    .nest("/api", pulse_api::api_router(store))
    .layer(
      ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)),
    )
}

/// `GET /healthz` — liveness only; never touches the store.
async fn healthz() -> Json<Ack> { Json(Ack::new()) }

// ─── Integration tests ────────────────────────────────────────────────────────
