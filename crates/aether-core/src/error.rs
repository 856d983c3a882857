//! Error types for `aether-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No usable storage medium: the backend failed its probe, or the store
  /// was built without one.
  #[error("storage unavailable: {0}")]
  StorageUnavailable(String),

  #[error("storage backend error: {0}")]
  Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn backend<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Backend(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
