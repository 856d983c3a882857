//! Custody transfers.

use serde::{Deserialize, Serialize};

use crate::status::status_enum;

/// Prefix for store-generated transfer ids.
pub const TRANSFER_ID_PREFIX: &str = "transfer";

status_enum! {
  TransferStatus {
    Pending   => "Pending",
    Completed => "Completed",
  }
}

/// A hand-off of a product from one party to another.
///
/// Like [`crate::bid::Bid`], `product_name` is a snapshot taken at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyTransfer {
  pub id:           String,
  pub product_id:   String,
  pub product_name: String,
  pub from:         String,
  pub to:           String,
  pub date:         String,
  pub status:       TransferStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:        Option<String>,
}

/// Input to [`crate::store::LedgerStore::create_custody_transfer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustodyTransfer {
  pub product_id: String,
  pub from:       String,
  pub to:         String,
  #[serde(default)]
  pub notes:      Option<String>,
}
