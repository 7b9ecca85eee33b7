use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use pharmagen_core::{CATALOG_VERSION, CatalogMetadata, Product, Transaction};

use super::atomic::write_bytes_atomic;
use crate::errors::GenerationError;

/// `data/products.json`, borrowed from the generated list.
#[derive(Debug, Serialize)]
pub struct CatalogFile<'a> {
    pub products: &'a [Product],
    pub metadata: CatalogMetadata,
}

impl<'a> CatalogFile<'a> {
    pub fn new(products: &'a [Product], generated_at: DateTime<Utc>, seed: u64) -> Self {
        Self {
            products,
            metadata: CatalogMetadata {
                total_products: products.len() as u64,
                generated_at: generated_at.to_rfc3339(),
                version: CATALOG_VERSION.to_string(),
                seed,
            },
        }
    }
}

/// `data/transactions.json`.
#[derive(Debug, Serialize)]
pub struct TransactionsFile<'a> {
    pub transactions: &'a [Transaction],
}

/// Leading `limit` products for the preview file.
pub fn preview(products: &[Product], limit: usize) -> &[Product] {
    &products[..products.len().min(limit)]
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<u64, GenerationError> {
    let data = serde_json::to_vec_pretty(value)?;
    Ok(write_bytes_atomic(path, &data)?)
}

pub fn write_json_compact<T: Serialize>(path: &Path, value: &T) -> Result<u64, GenerationError> {
    let data = serde_json::to_vec(value)?;
    Ok(write_bytes_atomic(path, &data)?)
}
