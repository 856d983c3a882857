//! SQL schema for the AetherLink SQLite backend.
//!
//! Executed once at connection startup. The version is recorded in
//! `PRAGMA user_version`; future migrations will be gated on it.

pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per collection; the value is the whole collection as JSON.
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

PRAGMA user_version = 1;
";
