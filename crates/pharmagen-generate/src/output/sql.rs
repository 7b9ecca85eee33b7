use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use pharmagen_core::Product;

/// Column list of the `products` table, in VALUES order.
pub const PRODUCT_COLUMNS: [&str; 16] = [
    "barcode",
    "name",
    "generic_name",
    "category",
    "subcategory",
    "manufacturer",
    "pack_size",
    "dosage",
    "mrp",
    "cost_price",
    "stock_quantity",
    "prescription_required",
    "gst_percentage",
    "hsn_code",
    "expiry_date",
    "description",
];

/// Render one multi-row INSERT per chunk of `batch_size` products.
///
/// Returns no statements for an empty slice. `batch_size` must be non-zero.
pub fn insert_batches(products: &[Product], batch_size: usize) -> Vec<String> {
    let header = format!(
        "INSERT INTO products ({}) VALUES\n",
        PRODUCT_COLUMNS.join(", ")
    );

    products
        .chunks(batch_size)
        .map(|batch| {
            let rows: Vec<String> = batch.iter().map(values_row).collect();
            format!("{header}{};", rows.join(",\n"))
        })
        .collect()
}

/// Full `seed.sql` document: a comment banner followed by the batches.
pub fn seed_document(batches: &[String], total: usize, generated_at: DateTime<Utc>) -> String {
    let rule = "-- ============================================================================";
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "-- PHARMACY PRODUCTS SEED DATA ({total} items)");
    let _ = writeln!(out, "-- Generated: {}", generated_at.to_rfc3339());
    let _ = writeln!(out, "{rule}");
    out.push('\n');
    for batch in batches {
        out.push_str(batch);
        out.push('\n');
    }
    out
}

fn values_row(product: &Product) -> String {
    let expiry = product
        .expiry_date
        .map(|date| date.format("%Y-%m-%d").to_string());

    let fields = [
        text(&product.barcode),
        text(&product.name),
        optional_text(product.generic_name.as_deref()),
        text(product.category.as_str()),
        text(&product.subcategory),
        text(&product.manufacturer),
        text(&product.pack_size),
        optional_text(product.dosage.as_deref()),
        decimal(product.mrp),
        decimal(product.cost_price),
        product.stock_quantity.to_string(),
        boolean(product.prescription_required),
        decimal(product.gst_percentage),
        text(&product.hsn_code),
        optional_text(expiry.as_deref()),
        text(&product.description),
    ];

    format!("({})", fields.join(", "))
}

/// Quote a string literal, doubling embedded single quotes.
pub fn text(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn optional_text(value: Option<&str>) -> String {
    value.map(text).unwrap_or_else(|| "NULL".to_string())
}

fn decimal(value: f64) -> String {
    format!("{value:.2}")
}

fn boolean(value: bool) -> String {
    let literal = if value { "TRUE" } else { "FALSE" };
    literal.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pharmagen_core::Category;

    use super::*;

    fn product(index: u64) -> Product {
        Product {
            id: format!("PROD_{index:06}"),
            barcode: "8901234567890".to_string(),
            name: "Johnson's Baby Oil".to_string(),
            generic_name: None,
            category: Category::BabyProducts,
            subcategory: "BABY_CARE".to_string(),
            manufacturer: "J&J".to_string(),
            pack_size: "100ml".to_string(),
            dosage: None,
            mrp: 120.5,
            cost_price: 90.0,
            stock_quantity: 40,
            prescription_required: false,
            gst_percentage: 12.0,
            hsn_code: "19011234".to_string(),
            expiry_date: None,
            description: "Baby care product".to_string(),
        }
    }

    fn row_count(statement: &str) -> usize {
        statement.lines().skip(1).count()
    }

    #[test]
    fn batches_respect_size_and_cover_all_rows() {
        let products: Vec<Product> = (1..=2_501).map(product).collect();
        let batches = insert_batches(&products, 1000);

        assert_eq!(batches.len(), 3);
        let counts: Vec<usize> = batches.iter().map(|batch| row_count(batch)).collect();
        assert_eq!(counts, vec![1000, 1000, 501]);
        assert!(batches.iter().all(|batch| batch.ends_with(';')));
        assert!(batches.iter().all(|batch| batch.starts_with("INSERT INTO products (barcode, name,")));
    }

    #[test]
    fn empty_input_renders_no_statements() {
        assert!(insert_batches(&[], 10).is_empty());
    }

    #[test]
    fn escapes_quotes_and_renders_nulls() {
        let batches = insert_batches(&[product(1)], 10);
        let row = batches[0].lines().nth(1).expect("values row");

        assert!(row.contains("'Johnson''s Baby Oil'"));
        assert!(row.contains("'8901234567890', 'Johnson''s Baby Oil', NULL, 'BABY_PRODUCTS'"));
        assert!(row.contains("120.50, 90.00, 40, FALSE, 12.00, '19011234', NULL, 'Baby care product')"));
    }

    #[test]
    fn keeps_fractional_gst_rates() {
        let mut item = product(1);
        item.gst_percentage = 12.25;
        let batches = insert_batches(&[item], 10);
        assert!(batches[0].contains("40, FALSE, 12.25, '19011234'"));
    }

    #[test]
    fn renders_expiry_as_iso_date() {
        let mut item = product(1);
        item.expiry_date = NaiveDate::from_ymd_opt(2027, 4, 14);
        item.dosage = Some("500mg".to_string());
        let batches = insert_batches(&[item], 10);
        assert!(batches[0].contains("'2027-04-14'"));
        assert!(batches[0].contains("'500mg'"));
    }

    #[test]
    fn seed_document_has_banner_and_batches() {
        let generated_at = DateTime::parse_from_rfc3339("2026-10-16T09:30:00Z")
            .map(|value| value.with_timezone(&Utc))
            .expect("timestamp");
        let batches = insert_batches(&[product(1), product(2)], 1);
        let doc = seed_document(&batches, 2, generated_at);

        assert!(doc.starts_with("-- ===="));
        assert!(doc.contains("-- PHARMACY PRODUCTS SEED DATA (2 items)"));
        assert!(doc.contains("-- Generated: 2026-10-16T09:30:00+00:00"));
        assert_eq!(doc.matches("INSERT INTO products").count(), 2);
    }
}
