//! Record builders.
//!
//! [`ProductGenerator`] is the single generic builder: every category is
//! produced from its [`CategorySpec`] without per-category code paths.

pub mod identifiers;
pub mod transactions;

use chrono::NaiveDate;
use rand::Rng;

use pharmagen_core::{Category, Product};

use crate::catalog::{Catalog, CategorySpec, MIN_PRICE, Naming, validate_spec};
use crate::errors::GenerationError;
use crate::model::DayWindow;

pub use transactions::generate_transactions;

/// Builds products from a catalog, numbering ids sequentially across calls.
#[derive(Debug, Clone)]
pub struct ProductGenerator<'a> {
    catalog: &'a Catalog,
    today: NaiveDate,
    expiry_window: DayWindow,
    next_index: u64,
}

impl<'a> ProductGenerator<'a> {
    pub fn new(catalog: &'a Catalog, today: NaiveDate, expiry_window: DayWindow) -> Self {
        Self {
            catalog,
            today,
            expiry_window,
            next_index: 1,
        }
    }

    /// Index the next product id will use.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Generate `count` products for `category`. The category's table is
    /// validated first.
    pub fn generate(
        &mut self,
        category: Category,
        count: u64,
        rng: &mut impl Rng,
    ) -> Result<Vec<Product>, GenerationError> {
        let catalog = self.catalog;
        let spec = catalog.spec(category).ok_or_else(|| {
            GenerationError::InvalidCatalog(format!("category {category} has no template table"))
        })?;
        validate_spec(spec)?;

        let mut products = Vec::new();
        for _ in 0..count {
            products.push(self.build(spec, rng));
        }
        Ok(products)
    }

    /// Build one record from `spec`. The spec must have passed
    /// [`Catalog::validate`].
    pub(crate) fn build(&mut self, spec: &CategorySpec, rng: &mut impl Rng) -> Product {
        let subcategory = pick(&spec.subcategories, rng);
        let template = pick(&subcategory.templates, rng);
        let option = pick(&template.options, rng);

        let mut mrp = round2(rng.random_range(template.min_price..=template.max_price));

        let (name, generic_name, dosage, pack_size) = match &spec.naming {
            Naming::Dosage { pack_sizes } => {
                let pack = pick(pack_sizes, rng);
                mrp = round2(mrp * pack.price_multiplier).max(MIN_PRICE);
                (
                    format!("{} {}", template.name, option),
                    Some(template.name.clone()),
                    Some(option.clone()),
                    pack.label.clone(),
                )
            }
            Naming::PackSize => (template.name.clone(), None, None, option.clone()),
        };

        let ratio = rng.random_range(spec.cost_ratio.min..=spec.cost_ratio.max);
        let cost_price = below(round2(mrp * ratio), mrp);

        let manufacturer = pick(&spec.manufacturers, rng).clone();
        let stock_quantity = rng.random_range(spec.stock.min..=spec.stock.max);
        let hsn_code = identifiers::hsn_code(&spec.hsn_prefix, rng);
        let expiry_date = spec
            .expiry
            .applies_to(&template.name)
            .then(|| identifiers::expiry_date(self.today, self.expiry_window, rng));

        let id = identifiers::product_id(self.next_index);
        self.next_index += 1;

        Product {
            id,
            barcode: identifiers::barcode(rng),
            name,
            generic_name,
            category: spec.category,
            subcategory: subcategory.name.clone(),
            manufacturer,
            pack_size,
            dosage,
            mrp,
            cost_price,
            stock_quantity,
            prescription_required: subcategory.prescription_required,
            gst_percentage: spec.gst_percentage,
            hsn_code,
            expiry_date,
            description: spec.description.describe(&subcategory.name),
        }
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn below(cost: f64, mrp: f64) -> f64 {
    if cost < mrp {
        cost
    } else {
        round2(mrp - 0.01).max(0.0)
    }
}

fn pick<'v, T>(values: &'v [T], rng: &mut impl Rng) -> &'v T {
    let idx = rng.random_range(0..values.len());
    &values[idx]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::catalog::{ProductTemplate, SubcategorySpec};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default()
    }

    fn paracetamol_only() -> Catalog {
        let mut catalog = Catalog::builtin();
        let medicine = &mut catalog.categories[0];
        medicine.subcategories = vec![SubcategorySpec {
            name: "FEVER".to_string(),
            prescription_required: false,
            templates: vec![ProductTemplate {
                name: "Paracetamol".to_string(),
                options: vec!["500mg".to_string(), "650mg".to_string()],
                min_price: 10.0,
                max_price: 80.0,
            }],
        }];
        catalog
    }

    #[test]
    fn single_fever_medicine_matches_template() {
        let catalog = paracetamol_only();
        catalog.validate().expect("valid catalog");
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let products = generator
            .generate(Category::Medicine, 1, &mut rng)
            .expect("generate medicine");
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert!(
            product.name == "Paracetamol 500mg" || product.name == "Paracetamol 650mg",
            "unexpected name {}",
            product.name
        );
        assert_eq!(product.generic_name.as_deref(), Some("Paracetamol"));
        assert_eq!(product.subcategory, "FEVER");
        assert_eq!(product.gst_percentage, 12.0);
        let expiry = product.expiry_date.expect("medicine has expiry");
        assert!(expiry > today());
        assert!(!product.prescription_required);
    }

    #[test]
    fn ids_continue_across_categories() {
        let catalog = Catalog::builtin();
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let medicines = generator
            .generate(Category::Medicine, 3, &mut rng)
            .expect("medicines");
        let otc = generator
            .generate(Category::Otc, 2, &mut rng)
            .expect("otc");

        assert_eq!(medicines[0].id, "PROD_000001");
        assert_eq!(otc[0].id, "PROD_000004");
        assert_eq!(generator.next_index(), 6);
    }

    #[test]
    fn records_respect_category_bounds() {
        let catalog = Catalog::builtin();
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        for category in Category::ALL {
            let spec = catalog.spec(category).expect("spec");
            let products = generator
                .generate(category, 400, &mut rng)
                .expect("generate");
            for product in products {
                assert_eq!(product.category, category);
                assert!(product.cost_price < product.mrp, "{product:?}");
                assert!(spec.stock.contains(product.stock_quantity));
                assert_eq!(product.gst_percentage, spec.gst_percentage);
                assert!(product.hsn_code.starts_with(&spec.hsn_prefix));
                if let Some(expiry) = product.expiry_date {
                    assert!(expiry > today());
                }
            }
        }
    }

    #[test]
    fn syrup_packs_are_priced_up() {
        let catalog = paracetamol_only();
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let products = generator
            .generate(Category::Medicine, 300, &mut rng)
            .expect("generate");
        let syrups: Vec<&Product> = products
            .iter()
            .filter(|product| product.pack_size.contains("syrup"))
            .collect();
        assert!(!syrups.is_empty());
        assert!(syrups.iter().all(|product| product.mrp >= 15.0));
        assert!(
            products
                .iter()
                .filter(|product| !product.pack_size.contains("syrup"))
                .all(|product| product.mrp <= 80.0)
        );
    }

    #[test]
    fn non_medicines_have_no_dosage_or_generic_name() {
        let catalog = Catalog::builtin();
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let products = generator
            .generate(Category::PersonalCare, 50, &mut rng)
            .expect("generate");
        assert!(products.iter().all(|product| product.dosage.is_none()));
        assert!(products.iter().all(|product| product.generic_name.is_none()));
        assert!(products.iter().all(|product| product.expiry_date.is_none()));
    }

    #[test]
    fn missing_category_table_is_an_error() {
        let mut catalog = Catalog::builtin();
        catalog
            .categories
            .retain(|spec| spec.category != Category::Otc);
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = generator.generate(Category::Otc, 1, &mut rng);
        assert!(matches!(result, Err(GenerationError::InvalidCatalog(_))));
    }

    #[test]
    fn empty_template_list_is_an_error() {
        let mut catalog = Catalog::builtin();
        catalog.categories[2].subcategories[0].templates.clear();
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = generator.generate(Category::PersonalCare, 3, &mut rng);
        assert!(matches!(result, Err(GenerationError::InvalidCatalog(_))));
        assert_eq!(generator.next_index(), 1);
    }

    #[test]
    fn one_cent_templates_keep_cost_below_mrp() {
        let mut catalog = Catalog::builtin();
        for sub in &mut catalog.categories[1].subcategories {
            for template in &mut sub.templates {
                template.min_price = MIN_PRICE;
                template.max_price = 0.014;
            }
        }
        let mut generator = ProductGenerator::new(&catalog, today(), DayWindow::default());
        let mut rng = ChaCha8Rng::seed_from_u64(13);

        let products = generator
            .generate(Category::Otc, 200, &mut rng)
            .expect("generate");
        for product in products {
            assert_eq!(product.mrp, 0.01);
            assert!(product.cost_price < product.mrp, "{product:?}");
        }
    }

    #[test]
    fn cost_is_forced_below_mrp() {
        assert_eq!(below(9.99, 10.0), 9.99);
        assert_eq!(below(10.0, 10.0), 9.99);
    }
}
