//! Core types and the entity store for the AetherLink supply-chain ledger.
//!
//! This crate is deliberately free of HTTP and database dependencies. Durable
//! storage is plugged in through [`StorageBackend`]; higher layers talk to the
//! ledger through [`store::LedgerStore`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod backend;
pub mod bid;
pub mod custody;
pub mod entity_store;
pub mod error;
pub mod id;
pub mod product;
pub mod store;
pub mod view;

mod seed;
mod status;

pub use backend::{MemoryBackend, StorageBackend};
pub use entity_store::EntityStore;
pub use error::{Error, Result};
