use pharmagen_core::{SearchIndex, catalog_json_schema, product_json_schema};

#[test]
fn product_schema_lists_required_fields() {
    let schema = serde_json::to_value(product_json_schema()).expect("serialize schema");
    let required = schema
        .get("required")
        .and_then(|value| value.as_array())
        .expect("required array");
    let required: Vec<&str> = required.iter().filter_map(|value| value.as_str()).collect();

    for field in ["id", "barcode", "name", "category", "mrp", "cost_price", "gst_percentage"] {
        assert!(required.contains(&field), "missing required field {field}");
    }
    assert!(!required.contains(&"expiry_date"));
    assert!(!required.contains(&"generic_name"));
}

#[test]
fn catalog_schema_wraps_products_and_metadata() {
    let schema = serde_json::to_value(catalog_json_schema()).expect("serialize schema");
    let properties = schema
        .get("properties")
        .and_then(|value| value.as_object())
        .expect("properties object");
    assert!(properties.contains_key("products"));
    assert!(properties.contains_key("metadata"));
}

#[test]
fn search_index_serializes_category_keys_as_strings() {
    let mut index = SearchIndex::default();
    index
        .by_category
        .entry(pharmagen_core::Category::BabyProducts)
        .or_default()
        .push("PROD_000001".to_string());

    let json = serde_json::to_value(&index).expect("serialize index");
    assert_eq!(
        json["by_category"]["BABY_PRODUCTS"][0].as_str(),
        Some("PROD_000001")
    );

    let back: SearchIndex = serde_json::from_value(json).expect("deserialize index");
    assert_eq!(back, index);
}
