//! The `StorageBackend` trait and the in-memory backend.
//!
//! A backend is a flat string-to-string map. The entity store keeps each
//! collection under one key as a JSON array and never asks the backend for
//! anything beyond whole-value reads and writes.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a key-value storage medium.
pub trait StorageBackend: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Check that the medium is usable at all. Called once when an
  /// [`EntityStore`](crate::EntityStore) is opened.
  fn probe(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Read the value stored under `key`, or `None` if the key was never set.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Replace the value stored under `key`.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── MemoryBackend ───────────────────────────────────────────────────────────

/// A process-local backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
  entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
  pub fn new() -> Self { Self::default() }

  fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl StorageBackend for MemoryBackend {
  type Error = Infallible;

  async fn probe(&self) -> Result<(), Infallible> { Ok(()) }

  async fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.entries().get(key).cloned())
  }

  async fn set(&self, key: &str, value: String) -> Result<(), Infallible> {
    self.entries().insert(key.to_owned(), value);
    Ok(())
  }
}
