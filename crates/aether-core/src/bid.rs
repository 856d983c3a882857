//! Transportation bids.

use serde::{Deserialize, Serialize};

use crate::status::status_enum;

/// Prefix for store-generated bid ids.
pub const BID_ID_PREFIX: &str = "bid";

status_enum! {
  BidStatus {
    Open     => "Open",
    Accepted => "Accepted",
  }
}

/// A carrier's offer to move a product.
///
/// `product_name` is copied from the product when the bid is created and is
/// never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
  pub id:           String,
  pub product_id:   String,
  pub product_name: String,
  pub carrier:      String,
  /// Numeric string, e.g. `"1200"`.
  pub amount:       String,
  pub origin:       String,
  pub destination:  String,
  pub deadline:     String,
  pub status:       BidStatus,
}

/// Input to [`crate::store::LedgerStore::create_bid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBid {
  pub product_id:  String,
  pub carrier:     String,
  pub amount:      String,
  pub origin:      String,
  pub destination: String,
  pub deadline:    String,
}
