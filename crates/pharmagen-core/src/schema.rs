use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Shape of `data/products.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
    pub metadata: CatalogMetadata,
}

/// Metadata block written alongside the full catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogMetadata {
    pub total_products: u64,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
    pub version: String,
    pub seed: u64,
}

/// Emit the JSON Schema for a single product record.
pub fn product_json_schema() -> RootSchema {
    schema_for!(Product)
}

/// Emit the JSON Schema for `data/products.json`.
pub fn catalog_json_schema() -> RootSchema {
    schema_for!(CatalogDocument)
}
