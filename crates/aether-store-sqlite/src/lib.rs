//! SQLite storage backend for the AetherLink ledger.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod backend;
mod schema;

pub mod error;

pub use backend::SqliteBackend;
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
