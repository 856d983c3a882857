//! Read models assembled from several collections at query time.

use serde::{Deserialize, Serialize};

use crate::{bid::Bid, custody::CustodyTransfer, product::Product};

/// A product together with every bid and custody transfer that references it.
/// Never stored, always derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
  pub product:           Product,
  /// In storage order.
  pub bids:              Vec<Bid>,
  /// In storage order.
  pub custody_transfers: Vec<CustodyTransfer>,
}
