//! Identifier and date helpers.

use chrono::Utc;
use rand_core::{OsRng, RngCore};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random base-36 characters after the prefix.
pub const SUFFIX_LEN: usize = 8;

/// Generate `{prefix}-` followed by [`SUFFIX_LEN`] random base-36 characters.
///
/// Collisions are not checked for.
pub fn generate_id(prefix: &str) -> String {
  let mut id = String::with_capacity(prefix.len() + 1 + SUFFIX_LEN);
  id.push_str(prefix);
  id.push('-');
  for _ in 0..SUFFIX_LEN {
    let idx = (OsRng.next_u32() % ALPHABET.len() as u32) as usize;
    id.push(char::from(ALPHABET[idx]));
  }
  id
}

/// Today's calendar date in UTC, formatted `YYYY-MM-DD`.
pub fn today() -> String { Utc::now().date_naive().format("%Y-%m-%d").to_string() }
