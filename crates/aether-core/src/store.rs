//! The `LedgerStore` trait.
//!
//! The trait is implemented by [`EntityStore`](crate::EntityStore). Higher
//! layers (`aether-api`, `aether-server`) depend on this abstraction rather
//! than on a concrete store.

use std::future::Future;

use crate::{
  bid::{Bid, NewBid},
  custody::{CustodyTransfer, NewCustodyTransfer},
  product::{NewProduct, Product},
  view::ProductDetail,
};

/// The operations the ledger exposes to its callers.
///
/// Reads never fail because of a missing product reference, and creates never
/// reject one: an unknown `product_id` is recorded as-is with a placeholder
/// product name.
pub trait LedgerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Products ──────────────────────────────────────────────────────────

  /// All products in insertion order.
  fn list_products(
    &self,
  ) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send + '_;

  /// The first product whose id is exactly `id`.
  fn get_product<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send + 'a;

  /// Register a product with status `Registered` and a single timeline
  /// entry. Duplicate ids are accepted.
  fn register_product(
    &self,
    input: NewProduct,
  ) -> impl Future<Output = Result<Product, Self::Error>> + Send + '_;

  /// Products whose name or id contains `term`, ignoring case. An empty term
  /// matches everything.
  fn search_products<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send + 'a;

  /// The product with its bids and custody transfers, or `None` if no
  /// product has this id.
  fn product_detail<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ProductDetail>, Self::Error>> + Send + 'a;

  // ── Bids ──────────────────────────────────────────────────────────────

  fn list_bids(
    &self,
  ) -> impl Future<Output = Result<Vec<Bid>, Self::Error>> + Send + '_;

  /// Record a new open bid. The product name is captured from the current
  /// products collection.
  fn create_bid(
    &self,
    input: NewBid,
  ) -> impl Future<Output = Result<Bid, Self::Error>> + Send + '_;

  // ── Custody transfers ─────────────────────────────────────────────────

  fn list_custody_transfers(
    &self,
  ) -> impl Future<Output = Result<Vec<CustodyTransfer>, Self::Error>> + Send + '_;

  /// Record a pending transfer, then move the referenced product (if any)
  /// to `In Transit` and append to its timeline.
  ///
  /// The two writes are independent: if the second fails, the transfer stays
  /// recorded and the product is left as it was.
  fn create_custody_transfer(
    &self,
    input: NewCustodyTransfer,
  ) -> impl Future<Output = Result<CustodyTransfer, Self::Error>> + Send + '_;
}
