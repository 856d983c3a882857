//! Integration tests for `SqliteBackend`.

use std::path::PathBuf;

use aether_core::{
  EntityStore, StorageBackend,
  custody::NewCustodyTransfer,
  entity_store::PRODUCTS_KEY,
  product::{NewProduct, ProductStatus},
  store::LedgerStore,
};

use crate::{Error, SqliteBackend};

async fn backend() -> SqliteBackend {
  SqliteBackend::open_in_memory()
    .await
    .expect("in-memory backend")
}

/// A database path unique to this test process and `name`, removed up front.
fn temp_db(name: &str) -> PathBuf {
  let path = std::env::temp_dir()
    .join(format!("aether-{name}-{}.db", std::process::id()));
  let _ = std::fs::remove_file(&path);
  path
}

// ─── Key-value ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_key_reads_none() {
  let b = backend().await;
  assert!(b.get("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn set_then_get() {
  let b = backend().await;
  b.set("k", "[1,2,3]".into()).await.unwrap();
  assert_eq!(b.get("k").await.unwrap().as_deref(), Some("[1,2,3]"));
}

#[tokio::test]
async fn set_overwrites() {
  let b = backend().await;
  b.set("k", "first".into()).await.unwrap();
  b.set("k", "second".into()).await.unwrap();
  assert_eq!(b.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn probe_succeeds_on_fresh_database() {
  let b = backend().await;
  b.probe().await.unwrap();
}

// ─── Durability ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn values_survive_reopen() {
  let path = temp_db("reopen");

  {
    let b = SqliteBackend::open(&path).await.unwrap();
    b.set(PRODUCTS_KEY, "[]".into()).await.unwrap();
  }

  let b = SqliteBackend::open(&path).await.unwrap();
  assert_eq!(b.get(PRODUCTS_KEY).await.unwrap().as_deref(), Some("[]"));

  let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn newer_schema_is_rejected() {
  let path = temp_db("schema");

  SqliteBackend::open(&path).await.unwrap();
  {
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
  }

  let err = SqliteBackend::open(&path).await.err().unwrap();
  assert!(matches!(err, Error::UnsupportedSchema(99)));

  let _ = std::fs::remove_file(&path);
}

// ─── Entity store on SQLite ──────────────────────────────────────────────────

#[tokio::test]
async fn entity_store_persists_across_reopen() {
  let path = temp_db("ledger");

  {
    let store = EntityStore::open(SqliteBackend::open(&path).await.unwrap())
      .await
      .unwrap();
    store
      .register_product(NewProduct {
        id:               "prod-42".into(),
        name:             "Heirloom Seeds".into(),
        description:      "Open-pollinated tomato seeds".into(),
        manufacturer:     "Seed Savers".into(),
        manufacture_date: "2024-05-05".into(),
      })
      .await
      .unwrap();
    store
      .create_custody_transfer(NewCustodyTransfer {
        product_id: "prod-42".into(),
        from:       "Seed Savers".into(),
        to:         "Rail Freight".into(),
        notes:      None,
      })
      .await
      .unwrap();
  }

  let store = EntityStore::open(SqliteBackend::open(&path).await.unwrap())
    .await
    .unwrap();

  let products = store.list_products().await.unwrap();
  assert_eq!(products.len(), 3);

  let product = store.get_product("prod-42").await.unwrap().unwrap();
  assert_eq!(product.status, ProductStatus::InTransit);
  assert_eq!(product.events.len(), 2);

  let transfers = store.list_custody_transfers().await.unwrap();
  assert_eq!(transfers.len(), 2);
  assert_eq!(transfers[1].product_name, "Heirloom Seeds");

  let _ = std::fs::remove_file(&path);
}
