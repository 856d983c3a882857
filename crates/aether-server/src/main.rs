//! aether-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the ledger
//! store, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p aether-server -- --config config.toml
//! ```

use std::{path::PathBuf, sync::Arc};

use aether_core::{EntityStore, MemoryBackend, StorageBackend};
use aether_server::{ServerConfig, expand_tilde};
use aether_store_sqlite::SqliteBackend;
use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "AetherLink ledger server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

  match &server_cfg.store_path {
    Some(path) => {
      let store_path = expand_tilde(path);
      if let Some(parent) = store_path.parent()
        && !parent.as_os_str().is_empty()
      {
        tokio::fs::create_dir_all(parent)
          .await
          .with_context(|| format!("failed to create {parent:?}"))?;
      }

      let backend = SqliteBackend::open(&store_path)
        .await
        .with_context(|| format!("failed to open store at {store_path:?}"))?;
      tracing::info!(path = ?store_path, "using sqlite storage");
      serve(&server_cfg, backend).await
    }
    None => {
      tracing::warn!("no store_path configured; ledger data lives in memory only");
      serve(&server_cfg, MemoryBackend::new()).await
    }
  }
}

async fn serve<B>(server_cfg: &ServerConfig, backend: B) -> anyhow::Result<()>
where
  B: StorageBackend + 'static,
{
  let store = EntityStore::open(backend)
    .await
    .context("storage backend failed its availability check")?;

  let app = aether_server::router(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
