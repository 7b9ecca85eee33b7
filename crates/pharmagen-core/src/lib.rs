//! Core contracts for Pharmagen.
//!
//! This crate defines the product, transaction and search-index records
//! written by the generator, plus JSON Schema emission for them.

pub mod error;
pub mod index;
pub mod product;
pub mod schema;
pub mod transaction;

pub use error::{Error, Result};
pub use index::SearchIndex;
pub use product::{Category, Product};
pub use schema::{CatalogDocument, CatalogMetadata, catalog_json_schema, product_json_schema};
pub use transaction::{LineItem, PaymentMethod, Transaction};

/// Format version stamped into `products.json` metadata.
pub const CATALOG_VERSION: &str = "1.0";
