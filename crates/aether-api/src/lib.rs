//! JSON REST API for the AetherLink ledger.
//!
//! Exposes an axum [`Router`] backed by any [`aether_core::store::LedgerStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", aether_api::api_router(store.clone()))
//! ```

pub mod bids;
pub mod custody;
pub mod error;
pub mod products;

use std::sync::Arc;

use aether_core::store::LedgerStore;
use axum::{Router, routing::get};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LedgerStore + 'static,
{
  Router::new()
    // Products
    .route("/products", get(products::list::<S>).post(products::create::<S>))
    .route("/products/{id}", get(products::get_one::<S>))
    .route("/products/{id}/detail", get(products::detail::<S>))
    // Bids
    .route("/bids", get(bids::list::<S>).post(bids::create::<S>))
    // Custody transfers
    .route(
      "/custody-transfers",
      get(custody::list::<S>).post(custody::create::<S>),
    )
    .with_state(store)
}
