use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::product::Category;

/// Lookup tables over the generated product ids.
///
/// `by_barcode` keeps the last id written for a barcode; barcodes are not
/// guaranteed unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchIndex {
    /// Lowercased product name to ids.
    pub by_name: BTreeMap<String, Vec<String>>,
    pub by_barcode: BTreeMap<String, String>,
    pub by_category: BTreeMap<Category, Vec<String>>,
}

impl SearchIndex {
    pub fn ids_for_name(&self, name: &str) -> &[String] {
        self.by_name
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn ids_for_category(&self, category: Category) -> &[String] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn id_for_barcode(&self, barcode: &str) -> Option<&str> {
        self.by_barcode.get(barcode).map(String::as_str)
    }
}
