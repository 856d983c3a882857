//! Sample collections written into an empty store.

use crate::{
  bid::{Bid, BidStatus},
  custody::{CustodyTransfer, TransferStatus},
  product::{
    Event, Product, ProductStatus, REGISTERED_EVENT_DESCRIPTION,
    REGISTERED_EVENT_TITLE,
  },
};

pub fn sample_products() -> Vec<Product> {
  vec![
    Product {
      id:               "prod-1234".into(),
      name:             "Organic Coffee Beans".into(),
      description:      "Premium organic coffee beans from Colombia".into(),
      manufacturer:     "Green Farms Co.".into(),
      manufacture_date: "2023-10-15".into(),
      status:           ProductStatus::Registered,
      last_updated:     None,
      events:           vec![Event::new(
        REGISTERED_EVENT_TITLE,
        REGISTERED_EVENT_DESCRIPTION,
        "2023-10-15",
      )],
    },
    Product {
      id:               "prod-5678".into(),
      name:             "Electronics Package".into(),
      description:      "High-end electronics shipment".into(),
      manufacturer:     "TechGiant Inc.".into(),
      manufacture_date: "2023-11-20".into(),
      status:           ProductStatus::InTransit,
      last_updated:     None,
      events:           vec![
        Event::new(
          REGISTERED_EVENT_TITLE,
          REGISTERED_EVENT_DESCRIPTION,
          "2023-11-20",
        ),
        Event::new("Bid Accepted", "Transportation bid accepted", "2023-11-22"),
        Event::new(
          "Custody Transferred",
          "Custody transferred to carrier",
          "2023-11-25",
        ),
      ],
    },
  ]
}

pub fn sample_bids() -> Vec<Bid> {
  vec![
    Bid {
      id:           "bid-1234".into(),
      product_id:   "prod-5678".into(),
      product_name: "Electronics Package".into(),
      carrier:      "FastShip Logistics".into(),
      amount:       "1200".into(),
      origin:       "Seattle, WA".into(),
      destination:  "Chicago, IL".into(),
      deadline:     "2023-12-15".into(),
      status:       BidStatus::Accepted,
    },
    Bid {
      id:           "bid-5678".into(),
      product_id:   "prod-1234".into(),
      product_name: "Organic Coffee Beans".into(),
      carrier:      "EcoTransport".into(),
      amount:       "800".into(),
      origin:       "Bogotá, Colombia".into(),
      destination:  "Miami, FL".into(),
      deadline:     "2023-12-20".into(),
      status:       BidStatus::Open,
    },
  ]
}

pub fn sample_custody_transfers() -> Vec<CustodyTransfer> {
  vec![CustodyTransfer {
    id:           "transfer-1234".into(),
    product_id:   "prod-5678".into(),
    product_name: "Electronics Package".into(),
    from:         "TechGiant Inc.".into(),
    to:           "FastShip Logistics".into(),
    date:         "2023-11-25".into(),
    status:       TransferStatus::Completed,
    notes:        None,
  }]
}
