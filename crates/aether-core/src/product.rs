//! Products and their event timeline.
//!
//! A product is registered once and afterwards only ever changes through
//! custody transfers, which flip its status and append to its timeline.

use serde::{Deserialize, Serialize};

use crate::status::status_enum;

pub const REGISTERED_EVENT_TITLE: &str = "Product Registered";
pub const REGISTERED_EVENT_DESCRIPTION: &str =
  "Product registered on the blockchain";
pub const TRANSFER_EVENT_TITLE: &str = "Custody Transfer Initiated";

// ─── Status ──────────────────────────────────────────────────────────────────

status_enum! {
  /// Where a product currently is in its journey.
  ProductStatus {
    Registered => "Registered",
    InTransit  => "In Transit",
  }
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// A dated entry in a product's history. Only ever embedded in
/// [`Product::events`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub title:       String,
  pub description: String,
  /// Calendar date, `YYYY-MM-DD`.
  pub timestamp:   String,
}

impl Event {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    timestamp: impl Into<String>,
  ) -> Self {
    Self {
      title:       title.into(),
      description: description.into(),
      timestamp:   timestamp.into(),
    }
  }
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A tracked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  /// Caller-supplied; uniqueness is not enforced.
  pub id:               String,
  pub name:             String,
  pub description:      String,
  pub manufacturer:     String,
  pub manufacture_date: String,
  pub status:           ProductStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_updated:     Option<String>,
  /// Append-only. Insertion order is chronological order.
  #[serde(default)]
  pub events:           Vec<Event>,
}

impl Product {
  /// Build a freshly registered product: status `Registered` and a single
  /// registration event dated `today`.
  pub fn registered(input: NewProduct, today: String) -> Self {
    Self {
      id:               input.id,
      name:             input.name,
      description:      input.description,
      manufacturer:     input.manufacturer,
      manufacture_date: input.manufacture_date,
      status:           ProductStatus::Registered,
      last_updated:     None,
      events:           vec![Event::new(
        REGISTERED_EVENT_TITLE,
        REGISTERED_EVENT_DESCRIPTION,
        today,
      )],
    }
  }

  /// Mark the product as in transit and append the matching timeline entry.
  pub fn record_custody_transfer(&mut self, from: &str, to: &str, today: String) {
    self.status = ProductStatus::InTransit;
    self.events.push(Event::new(
      TRANSFER_EVENT_TITLE,
      format!("Custody transfer from {from} to {to}"),
      today,
    ));
  }

  pub fn last_event(&self) -> Option<&Event> { self.events.last() }
}

// ─── NewProduct ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::LedgerStore::register_product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
  pub id:               String,
  pub name:             String,
  pub description:      String,
  pub manufacturer:     String,
  pub manufacture_date: String,
}
