//! Handlers for `/bids`.

use std::sync::Arc;

use aether_core::{
  bid::{Bid, NewBid},
  store::LedgerStore,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::error::ApiError;

/// `GET /bids`
pub async fn list<S: LedgerStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Bid>>, ApiError> {
  let bids = store.list_bids().await.map_err(ApiError::from_store)?;
  Ok(Json(bids))
}

/// `POST /bids`: returns 201 + the new open [`Bid`].
pub async fn create<S: LedgerStore>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewBid>,
) -> Result<impl IntoResponse, ApiError> {
  let bid = store.create_bid(body).await.map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(bid)))
}
