//! Handlers for `/products` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/products` | Optional `?q=` filters by name or id, ignoring case |
//! | `POST` | `/products` | Body: [`NewProduct`]; returns 201 + stored product |
//! | `GET`  | `/products/{id}` | 404 if not found |
//! | `GET`  | `/products/{id}/detail` | Product with its bids and custody transfers |

use std::sync::Arc;

use aether_core::{
  product::{NewProduct, Product},
  store::LedgerStore,
  view::ProductDetail,
};
use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Search term matched against product name and id.
  pub q: Option<String>,
}

/// `GET /products[?q=<term>]`
pub async fn list<S: LedgerStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
  let products = match params.q.as_deref() {
    Some(term) => store.search_products(term).await,
    None => store.list_products().await,
  }
  .map_err(ApiError::from_store)?;
  Ok(Json(products))
}

// ─── Register ─────────────────────────────────────────────────────────────────

/// `POST /products`: returns 201 + the registered [`Product`].
pub async fn create<S: LedgerStore>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
  let product = store
    .register_product(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(product)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /products/{id}`
pub async fn get_one<S: LedgerStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
  let product = store
    .get_product(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;
  Ok(Json(product))
}

/// `GET /products/{id}/detail`
pub async fn detail<S: LedgerStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<ProductDetail>, ApiError> {
  let detail = store
    .product_detail(&id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))?;
  Ok(Json(detail))
}
