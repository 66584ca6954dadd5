//! holonet server binary.
//!
//! Reads `holonet.toml` (or the path specified with `--config`) layered under
//! `HOLONET_*` environment variables, opens the SQLite catalog, optionally
//! applies a seed file, and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use holonet_server::{ServerConfig, expand_tilde, seed::Seed};
use holonet_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Holonet Star Wars catalog server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "holonet.toml")]
  config: PathBuf,

  /// JSON file of users, people and planets to load before serving.
  #[arg(long)]
  seed: Option<PathBuf>,

  /// Apply `--seed` and exit without serving.
  #[arg(long, requires = "seed")]
  seed_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let db_path = expand_tilde(&server_cfg.database_path);
  let store = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("failed to open store at {db_path:?}"))?;

  if let Some(seed_path) = &cli.seed {
    Seed::from_path(seed_path)
      .with_context(|| format!("failed to load seed {seed_path:?}"))?
      .apply(&store)
      .await
      .context("failed to apply seed")?;
  }
  if cli.seed_only {
    return Ok(());
  }

  let app = holonet_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
