//! [`SqliteBackend`]: a durable [`StorageBackend`] over a single SQLite file.

use std::path::Path;

use aether_core::StorageBackend;
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  schema::{SCHEMA, SCHEMA_VERSION},
};

/// A key-value backend stored in one SQLite table.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteBackend {
  conn: tokio_rusqlite::Connection,
}

impl SqliteBackend {
  /// Open (or create) a database at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let backend = Self { conn };
    backend.init_schema().await?;
    Ok(backend)
  }

  /// Open an in-memory database, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let backend = Self { conn };
    backend.init_schema().await?;
    Ok(backend)
  }

  async fn init_schema(&self) -> Result<()> {
    let version: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?))
      .await?;

    if version > SCHEMA_VERSION {
      return Err(Error::UnsupportedSchema(version));
    }

    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;

    tracing::debug!(from = version, to = SCHEMA_VERSION, "sqlite schema ready");
    Ok(())
  }
}

// ─── StorageBackend impl ─────────────────────────────────────────────────────

impl StorageBackend for SqliteBackend {
  type Error = Error;

  async fn probe(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.query_row("SELECT 1 FROM kv LIMIT 1", [], |_| Ok(())).optional()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn get(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();

    let value: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM kv WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(value)
  }

  async fn set(&self, key: &str, value: String) -> Result<()> {
    let key = key.to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO kv (key, value) VALUES (?1, ?2)
           ON CONFLICT (key) DO UPDATE SET value = excluded.value",
          rusqlite::params![key, value],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }
}
