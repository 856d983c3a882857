//! Handlers for `/custody-transfers`.

use std::sync::Arc;

use aether_core::{
  custody::{CustodyTransfer, NewCustodyTransfer},
  store::LedgerStore,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::error::ApiError;

/// `GET /custody-transfers`
pub async fn list<S: LedgerStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<CustodyTransfer>>, ApiError> {
  let transfers = store
    .list_custody_transfers()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(transfers))
}

/// `POST /custody-transfers`: returns 201 + the pending transfer. The
/// referenced product, if it exists, is moved to `In Transit`.
pub async fn create<S: LedgerStore>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewCustodyTransfer>,
) -> Result<impl IntoResponse, ApiError> {
  let transfer = store
    .create_custody_transfer(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(transfer)))
}
