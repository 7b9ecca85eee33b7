use pharmagen_core::{Product, SearchIndex};

/// Build the name, barcode and category lookups over `products`.
///
/// Names are keyed lowercased. A repeated barcode maps to the last product
/// carrying it.
pub fn build_search_index(products: &[Product]) -> SearchIndex {
    let mut index = SearchIndex::default();

    for product in products {
        index
            .by_name
            .entry(product.name.to_lowercase())
            .or_default()
            .push(product.id.clone());

        index
            .by_barcode
            .insert(product.barcode.clone(), product.id.clone());

        index
            .by_category
            .entry(product.category)
            .or_default()
            .push(product.id.clone());
    }

    index
}
