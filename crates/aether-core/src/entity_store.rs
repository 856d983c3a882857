//! [`EntityStore`]: the [`LedgerStore`] implementation over any
//! [`StorageBackend`].
//!
//! Each collection lives under one fixed key as a JSON array. Every operation
//! reads the whole collection, changes it in memory and writes it back.
//! Nothing is locked: two writers racing on the same key can lose updates,
//! and custody-transfer creation writes two keys one after the other.

use serde::{Serialize, de::DeserializeOwned};

use crate::{
  Error, Result,
  backend::StorageBackend,
  bid::{BID_ID_PREFIX, Bid, BidStatus, NewBid},
  custody::{CustodyTransfer, NewCustodyTransfer, TRANSFER_ID_PREFIX, TransferStatus},
  id::{generate_id, today},
  product::{NewProduct, Product},
  seed,
  store::LedgerStore,
  view::ProductDetail,
};

pub const PRODUCTS_KEY: &str = "aetherlink_products";
pub const BIDS_KEY: &str = "aetherlink_bids";
pub const CUSTODY_TRANSFERS_KEY: &str = "aetherlink_custody_transfers";

/// Product name recorded on bids and transfers whose product id matches
/// nothing.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

// ─── Store ───────────────────────────────────────────────────────────────────

/// The ledger's entity store.
///
/// A store is either attached to a backend (built with [`EntityStore::open`])
/// or detached (built with [`EntityStore::detached`]). A detached store
/// answers every read with an empty result and fails every write with
/// [`Error::StorageUnavailable`].
///
/// Sample data is written lazily: before each operation, any collection key
/// that has never been set is filled with its sample records.
#[derive(Debug, Clone)]
pub struct EntityStore<B> {
  backend: Option<B>,
}

impl<B: StorageBackend> EntityStore<B> {
  /// Attach to `backend`, failing fast if its probe reports the medium is
  /// unusable.
  pub async fn open(backend: B) -> Result<Self> {
    backend
      .probe()
      .await
      .map_err(|e| Error::StorageUnavailable(e.to_string()))?;
    Ok(Self { backend: Some(backend) })
  }

  /// A store with no storage medium at all.
  pub fn detached() -> Self { Self { backend: None } }

  pub fn is_detached(&self) -> bool { self.backend.is_none() }

  /// The seeded backend for a read, or `None` when detached.
  async fn reader(&self) -> Result<Option<&B>> {
    match &self.backend {
      Some(backend) => {
        ensure_seeded(backend).await?;
        Ok(Some(backend))
      }
      None => Ok(None),
    }
  }

  /// The seeded backend for a write.
  async fn writer(&self) -> Result<&B> {
    let backend = self.backend.as_ref().ok_or_else(|| {
      Error::StorageUnavailable("no storage backend attached".into())
    })?;
    ensure_seeded(backend).await?;
    Ok(backend)
  }

  async fn list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
    match self.reader().await? {
      Some(backend) => load(backend, key).await,
      None => Ok(Vec::new()),
    }
  }
}

// ─── Collection I/O ──────────────────────────────────────────────────────────

/// Read a collection. An absent or empty value is an empty collection.
async fn load<B, T>(backend: &B, key: &str) -> Result<Vec<T>>
where
  B: StorageBackend,
  T: DeserializeOwned,
{
  match backend.get(key).await.map_err(Error::backend)? {
    Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
    _ => Ok(Vec::new()),
  }
}

async fn save<B, T>(backend: &B, key: &str, records: &[T]) -> Result<()>
where
  B: StorageBackend,
  T: Serialize + Sync,
{
  let raw = serde_json::to_string(records)?;
  backend.set(key, raw).await.map_err(Error::backend)
}

async fn ensure_seeded<B: StorageBackend>(backend: &B) -> Result<()> {
  seed_if_absent(backend, PRODUCTS_KEY, seed::sample_products).await?;
  seed_if_absent(backend, BIDS_KEY, seed::sample_bids).await?;
  seed_if_absent(backend, CUSTODY_TRANSFERS_KEY, seed::sample_custody_transfers)
    .await
}

/// Write `samples()` under `key` unless the key already holds a value. A
/// stored empty array counts as a value and is left alone.
async fn seed_if_absent<B, T>(
  backend: &B,
  key: &str,
  samples: fn() -> Vec<T>,
) -> Result<()>
where
  B: StorageBackend,
  T: Serialize + Send + Sync,
{
  let present = backend
    .get(key)
    .await
    .map_err(Error::backend)?
    .is_some_and(|raw| !raw.is_empty());
  if present {
    return Ok(());
  }

  let records = samples();
  tracing::debug!(key, count = records.len(), "seeding sample collection");
  save(backend, key, &records).await
}

/// A blank product name falls back to the placeholder as well.
fn product_name_or_placeholder(product: Option<&Product>, product_id: &str) -> String {
  match product {
    Some(p) if !p.name.is_empty() => p.name.clone(),
    Some(_) => UNKNOWN_PRODUCT_NAME.to_owned(),
    None => {
      tracing::warn!(product_id, "reference to unknown product");
      UNKNOWN_PRODUCT_NAME.to_owned()
    }
  }
}

// ─── LedgerStore impl ────────────────────────────────────────────────────────

impl<B: StorageBackend> LedgerStore for EntityStore<B> {
  type Error = Error;

  // ── Products ──────────────────────────────────────────────────────────────

  async fn list_products(&self) -> Result<Vec<Product>> {
    self.list(PRODUCTS_KEY).await
  }

  async fn get_product(&self, id: &str) -> Result<Option<Product>> {
    let products: Vec<Product> = self.list(PRODUCTS_KEY).await?;
    Ok(products.into_iter().find(|p| p.id == id))
  }

  async fn register_product(&self, input: NewProduct) -> Result<Product> {
    let backend = self.writer().await?;
    let mut products: Vec<Product> = load(backend, PRODUCTS_KEY).await?;

    if products.iter().any(|p| p.id == input.id) {
      tracing::warn!(product_id = %input.id, "registering a product id that already exists");
    }

    let product = Product::registered(input, today());
    products.push(product.clone());
    save(backend, PRODUCTS_KEY, &products).await?;

    tracing::info!(product_id = %product.id, "registered product");
    Ok(product)
  }

  async fn search_products(&self, term: &str) -> Result<Vec<Product>> {
    let needle = term.to_lowercase();
    let mut products: Vec<Product> = self.list(PRODUCTS_KEY).await?;
    products.retain(|p| {
      p.name.to_lowercase().contains(&needle)
        || p.id.to_lowercase().contains(&needle)
    });
    Ok(products)
  }

  async fn product_detail(&self, id: &str) -> Result<Option<ProductDetail>> {
    let Some(product) = self.get_product(id).await? else {
      return Ok(None);
    };

    let mut bids: Vec<Bid> = self.list(BIDS_KEY).await?;
    bids.retain(|b| b.product_id == id);

    let mut custody_transfers: Vec<CustodyTransfer> =
      self.list(CUSTODY_TRANSFERS_KEY).await?;
    custody_transfers.retain(|t| t.product_id == id);

    Ok(Some(ProductDetail { product, bids, custody_transfers }))
  }

  // ── Bids ──────────────────────────────────────────────────────────────────

  async fn list_bids(&self) -> Result<Vec<Bid>> { self.list(BIDS_KEY).await }

  async fn create_bid(&self, input: NewBid) -> Result<Bid> {
    let backend = self.writer().await?;
    let mut bids: Vec<Bid> = load(backend, BIDS_KEY).await?;
    let products: Vec<Product> = load(backend, PRODUCTS_KEY).await?;

    let product = products.iter().find(|p| p.id == input.product_id);
    let product_name = product_name_or_placeholder(product, &input.product_id);

    let bid = Bid {
      id: generate_id(BID_ID_PREFIX),
      product_id: input.product_id,
      product_name,
      carrier: input.carrier,
      amount: input.amount,
      origin: input.origin,
      destination: input.destination,
      deadline: input.deadline,
      status: BidStatus::Open,
    };

    bids.push(bid.clone());
    save(backend, BIDS_KEY, &bids).await?;

    tracing::info!(bid_id = %bid.id, product_id = %bid.product_id, "created bid");
    Ok(bid)
  }

  // ── Custody transfers ─────────────────────────────────────────────────────

  async fn list_custody_transfers(&self) -> Result<Vec<CustodyTransfer>> {
    self.list(CUSTODY_TRANSFERS_KEY).await
  }

  async fn create_custody_transfer(
    &self,
    input: NewCustodyTransfer,
  ) -> Result<CustodyTransfer> {
    let backend = self.writer().await?;
    let mut transfers: Vec<CustodyTransfer> =
      load(backend, CUSTODY_TRANSFERS_KEY).await?;
    let mut products: Vec<Product> = load(backend, PRODUCTS_KEY).await?;

    let date = today();
    let product_idx = products.iter().position(|p| p.id == input.product_id);
    let product_name = product_name_or_placeholder(
      product_idx.map(|i| &products[i]),
      &input.product_id,
    );

    let transfer = CustodyTransfer {
      id: generate_id(TRANSFER_ID_PREFIX),
      product_id: input.product_id,
      product_name,
      from: input.from,
      to: input.to,
      date: date.clone(),
      status: TransferStatus::Pending,
      notes: input.notes,
    };

    transfers.push(transfer.clone());
    save(backend, CUSTODY_TRANSFERS_KEY, &transfers).await?;

    tracing::info!(
      transfer_id = %transfer.id,
      product_id = %transfer.product_id,
      "recorded custody transfer"
    );

    // The transfer is already persisted at this point; an error below leaves
    // the product untouched.
    if let Some(i) = product_idx {
      products[i].record_custody_transfer(&transfer.from, &transfer.to, date);
      save(backend, PRODUCTS_KEY, &products).await?;
    }

    Ok(transfer)
  }
}
