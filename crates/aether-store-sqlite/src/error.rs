//! Error type for `aether-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The schema version on disk is newer than this build understands.
  #[error("unsupported schema version {0}")]
  UnsupportedSchema(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
