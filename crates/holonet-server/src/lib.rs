//! Server assembly for Holonet: configuration, seeding, and the HTTP stack
//! wrapped around [`holonet_api::api_router`].

pub mod seed;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use holonet_core::store::CatalogStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `holonet.toml` and
/// `HOLONET_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  /// Layer the optional file at `path` under the `HOLONET_` environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::from_builder(
      config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("HOLONET")),
    )
  }

  fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
  ) -> Result<Self, config::ConfigError> {
    builder
      .set_default("host", "0.0.0.0")?
      .set_default("port", 3000)?
      .set_default("database_path", "/tmp/holonet.db")?
      .build()?
      .try_deserialize()
  }

  /// `host:port`, ready for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with request tracing and permissive CORS.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: CatalogStore + 'static,
{
  holonet_api::api_router(store)
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}
