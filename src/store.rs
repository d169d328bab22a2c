// src/store.rs
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Transaction;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("fixture io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture is not valid transaction JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// First 10 characters of a transaction hash, used in fixture file names.
pub fn shorten_hash(hash: &str) -> &str {
    let end = hash.len().min(10);
    &hash[..end]
}

/// Save a raw transaction document as `<dir>/<prefix>-<short-hash>.json`.
pub fn save_fixture(
    dir: &Path,
    prefix: &str,
    hash: &str,
    raw: &serde_json::Value,
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}-{}.json", prefix, shorten_hash(hash)));
    fs::write(&path, serde_json::to_string_pretty(raw)?)?;
    Ok(path)
}

/// Load a stored fixture back into a `Transaction`.
pub fn load_fixture(path: &Path) -> Result<Transaction, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
