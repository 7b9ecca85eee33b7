//! Category template tables.
//!
//! A [`Catalog`] maps every category to its subcategories, product
//! templates and pricing rules. The record builder in
//! [`crate::generators`] consumes it uniformly; nothing else carries
//! category-specific constants.

use serde::{Deserialize, Serialize};

use pharmagen_core::Category;

use crate::errors::GenerationError;

/// Smallest price that survives rounding to two decimals.
pub const MIN_PRICE: f64 = 0.01;

/// Base product with its option list and MRP range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub name: String,
    /// Dosages for medicines, pack sizes for everything else.
    pub options: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategorySpec {
    pub name: String,
    pub prescription_required: bool,
    pub templates: Vec<ProductTemplate>,
}

/// Category-level pack size with its price multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSize {
    pub label: String,
    pub price_multiplier: f64,
}

/// How template options turn into a product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Naming {
    /// Options are dosages: name is `"{base} {dosage}"`, generic name is the
    /// base, and the pack size comes from the category list.
    Dosage { pack_sizes: Vec<PackSize> },
    /// Options are pack sizes: name is the base.
    PackSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExpiryRule {
    Always,
    /// Expiry only when the base name contains one of the markers.
    NameContains(Vec<String>),
    Never,
}

impl ExpiryRule {
    pub fn applies_to(&self, name: &str) -> bool {
        match self {
            ExpiryRule::Always => true,
            ExpiryRule::NameContains(markers) => {
                markers.iter().any(|marker| name.contains(marker.as_str()))
            }
            ExpiryRule::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DescriptionRule {
    /// `"Used for treating fever"` style, derived from the subcategory.
    TreatsSubcategory,
    Fixed(String),
}

impl DescriptionRule {
    pub fn describe(&self, subcategory: &str) -> String {
        match self {
            DescriptionRule::TreatsSubcategory => format!(
                "Used for treating {}",
                subcategory.to_lowercase().replace('_', " ")
            ),
            DescriptionRule::Fixed(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRange {
    pub min: u32,
    pub max: u32,
}

impl StockRange {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Everything the record builder needs for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub category: Category,
    pub subcategories: Vec<SubcategorySpec>,
    pub manufacturers: Vec<String>,
    pub naming: Naming,
    /// Cost price as a fraction of MRP.
    pub cost_ratio: RatioRange,
    pub stock: StockRange,
    pub gst_percentage: f64,
    /// Four-digit HSN chapter prefix; four random digits are appended.
    pub hsn_prefix: String,
    pub expiry: ExpiryRule,
    pub description: DescriptionRule,
}

/// Full template table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategorySpec>,
}

impl Catalog {
    /// Built-in Indian pharmacy catalog.
    pub fn builtin() -> Self {
        Self {
            categories: vec![medicine(), otc(), personal_care(), baby_products()],
        }
    }

    pub fn spec(&self, category: Category) -> Option<&CategorySpec> {
        self.categories.iter().find(|spec| spec.category == category)
    }

    /// Check every bound the record builder relies on.
    pub fn validate(&self) -> Result<(), GenerationError> {
        for spec in &self.categories {
            validate_spec(spec)?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn validate_spec(spec: &CategorySpec) -> Result<(), GenerationError> {
    let category = spec.category;
    let invalid = |message: String| GenerationError::InvalidCatalog(format!("{category}: {message}"));

    if spec.subcategories.is_empty() {
        return Err(invalid("no subcategories".to_string()));
    }
    if spec.manufacturers.is_empty() {
        return Err(invalid("no manufacturers".to_string()));
    }
    if let Naming::Dosage { pack_sizes } = &spec.naming {
        if pack_sizes.is_empty() {
            return Err(invalid("no pack sizes".to_string()));
        }
        if let Some(pack) = pack_sizes.iter().find(|pack| pack.price_multiplier <= 0.0) {
            return Err(invalid(format!(
                "pack size '{}' has a non-positive multiplier",
                pack.label
            )));
        }
    }
    let ratio = spec.cost_ratio;
    if !(ratio.min > 0.0 && ratio.min <= ratio.max && ratio.max < 1.0) {
        return Err(invalid(format!(
            "cost ratio {}..{} must lie inside (0, 1)",
            ratio.min, ratio.max
        )));
    }
    if spec.stock.min > spec.stock.max {
        return Err(invalid(format!(
            "stock min {} exceeds max {}",
            spec.stock.min, spec.stock.max
        )));
    }

    for subcategory in &spec.subcategories {
        if subcategory.templates.is_empty() {
            return Err(invalid(format!("subcategory {} has no templates", subcategory.name)));
        }
        for template in &subcategory.templates {
            if template.options.is_empty() {
                return Err(invalid(format!("template '{}' has no options", template.name)));
            }
            if !(template.min_price >= MIN_PRICE && template.min_price <= template.max_price) {
                return Err(invalid(format!(
                    "template '{}' has invalid price range {}..{}",
                    template.name, template.min_price, template.max_price
                )));
            }
        }
    }

    Ok(())
}

fn template(name: &str, options: &[&str], min_price: f64, max_price: f64) -> ProductTemplate {
    ProductTemplate {
        name: name.to_string(),
        options: strings(options),
        min_price,
        max_price,
    }
}

fn subcategory(name: &str, prescription_required: bool, templates: Vec<ProductTemplate>) -> SubcategorySpec {
    SubcategorySpec {
        name: name.to_string(),
        prescription_required,
        templates,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn medicine() -> CategorySpec {
    let tablets = |label: &str| PackSize {
        label: label.to_string(),
        price_multiplier: 1.0,
    };
    let syrup = |label: &str| PackSize {
        label: label.to_string(),
        price_multiplier: 1.5,
    };

    CategorySpec {
        category: Category::Medicine,
        subcategories: vec![
            subcategory(
                "FEVER",
                false,
                vec![
                    template("Paracetamol", &["500mg", "650mg", "1000mg"], 10.0, 80.0),
                    template("Dolo", &["500mg", "650mg"], 25.0, 65.0),
                    template("Crocin", &["500mg", "650mg"], 20.0, 60.0),
                    template("Calpol", &["250mg", "500mg"], 15.0, 50.0),
                    template("Tylenol", &["500mg", "650mg"], 30.0, 85.0),
                ],
            ),
            subcategory(
                "ANTIBIOTIC",
                true,
                vec![
                    template("Amoxicillin", &["250mg", "500mg"], 50.0, 250.0),
                    template("Azithromycin", &["250mg", "500mg"], 80.0, 280.0),
                    template("Ciprofloxacin", &["250mg", "500mg", "750mg"], 60.0, 220.0),
                    template("Augmentin", &["375mg", "625mg"], 90.0, 300.0),
                    template("Cefixime", &["100mg", "200mg"], 70.0, 240.0),
                ],
            ),
            subcategory(
                "PAIN_RELIEF",
                false,
                vec![
                    template("Ibuprofen", &["200mg", "400mg", "600mg"], 15.0, 100.0),
                    template("Diclofenac", &["50mg", "100mg"], 20.0, 90.0),
                    template("Combiflam", &["400mg"], 25.0, 75.0),
                    template("Brufen", &["400mg", "600mg"], 30.0, 95.0),
                    template("Voveran", &["50mg", "100mg"], 35.0, 110.0),
                ],
            ),
            subcategory(
                "COLD_COUGH",
                false,
                vec![
                    template("Cetirizine", &["5mg", "10mg"], 20.0, 70.0),
                    template("Sinarest", &["Tab"], 25.0, 65.0),
                    template("Vicks Vaporub", &["25ml", "50ml", "100ml"], 40.0, 150.0),
                    template("Benadryl Cough Syrup", &["100ml", "150ml"], 80.0, 200.0),
                    template("Alex Cough Syrup", &["100ml"], 70.0, 180.0),
                ],
            ),
            subcategory(
                "DIGESTIVE",
                false,
                vec![
                    template("Omeprazole", &["20mg", "40mg"], 15.0, 80.0),
                    template("Pan-D", &["40mg"], 45.0, 120.0),
                    template("Eno", &["5g sachet", "100g bottle"], 5.0, 150.0),
                    template("Digene", &["Tab", "Gel"], 10.0, 90.0),
                    template("Pantoprazole", &["40mg"], 25.0, 95.0),
                ],
            ),
            subcategory(
                "DIABETES",
                true,
                vec![
                    template("Metformin", &["500mg", "850mg", "1000mg"], 30.0, 180.0),
                    template("Glimepiride", &["1mg", "2mg", "4mg"], 40.0, 200.0),
                    template("Insulin Lantus", &["10ml vial"], 800.0, 1500.0),
                    template("Glucometer Strips", &["25 strips", "50 strips"], 400.0, 900.0),
                ],
            ),
            subcategory(
                "BP_HEART",
                true,
                vec![
                    template("Amlodipine", &["5mg", "10mg"], 20.0, 90.0),
                    template("Atenolol", &["25mg", "50mg"], 15.0, 75.0),
                    template("Telmisartan", &["40mg", "80mg"], 50.0, 180.0),
                    template("Aspirin", &["75mg", "150mg"], 5.0, 45.0),
                ],
            ),
            subcategory(
                "VITAMINS",
                false,
                vec![
                    template("Becosules", &["Tab", "Cap"], 25.0, 80.0),
                    template("Vitamin D3", &["1000IU", "2000IU", "60000IU"], 30.0, 250.0),
                    template("Calcium Tablets", &["500mg"], 40.0, 150.0),
                    template("Vitamin C", &["500mg", "1000mg"], 20.0, 100.0),
                ],
            ),
            subcategory(
                "SKIN",
                false,
                vec![
                    template("Betnovate Cream", &["15g", "30g"], 50.0, 180.0),
                    template("Clotrimazole Cream", &["15g", "30g"], 30.0, 120.0),
                    template("Candid Powder", &["50g", "100g"], 60.0, 200.0),
                ],
            ),
        ],
        manufacturers: strings(&[
            "Cipla",
            "Sun Pharma",
            "Dr Reddy",
            "Lupin",
            "Micro Labs",
            "Ranbaxy",
            "Abbott",
            "GSK",
            "Cadila",
            "Alkem",
        ]),
        naming: Naming::Dosage {
            pack_sizes: vec![
                tablets("10 tablets"),
                tablets("15 tablets"),
                tablets("20 tablets"),
                tablets("30 tablets"),
                syrup("100ml syrup"),
                syrup("150ml syrup"),
            ],
        },
        cost_ratio: RatioRange { min: 0.65, max: 0.80 },
        stock: StockRange { min: 0, max: 500 },
        gst_percentage: 12.0,
        hsn_prefix: "3004".to_string(),
        expiry: ExpiryRule::Always,
        description: DescriptionRule::TreatsSubcategory,
    }
}

fn otc() -> CategorySpec {
    CategorySpec {
        category: Category::Otc,
        subcategories: vec![
            subcategory(
                "MEDICAL_DEVICES",
                false,
                vec![
                    template("Digital Thermometer", &["1 piece"], 100.0, 400.0),
                    template("BP Monitor", &["1 piece"], 600.0, 2500.0),
                    template("Glucometer", &["1 piece"], 500.0, 1800.0),
                    template("Pulse Oximeter", &["1 piece"], 400.0, 1500.0),
                    template("Nebulizer", &["1 piece"], 1200.0, 3000.0),
                    template("Weighing Scale Digital", &["1 piece"], 400.0, 1200.0),
                ],
            ),
            subcategory(
                "FIRST_AID",
                false,
                vec![
                    template("Cotton Wool", &["50g", "100g", "200g"], 20.0, 90.0),
                    template("Bandage Elastic", &["1 roll", "3 rolls"], 15.0, 80.0),
                    template("Gauze", &["10 pieces"], 25.0, 100.0),
                    template("Dettol Antiseptic", &["100ml", "250ml", "500ml"], 50.0, 200.0),
                    template("Band-Aid", &["10 strips", "20 strips"], 30.0, 120.0),
                    template("Surgical Gloves", &["1 pair", "50 pairs"], 10.0, 400.0),
                    template("Face Mask", &["10 pieces", "50 pieces"], 40.0, 350.0),
                ],
            ),
            subcategory(
                "HEALTH_SUPPLEMENTS",
                false,
                vec![
                    template("Protein Powder", &["250g", "500g", "1kg"], 400.0, 2000.0),
                    template("Omega-3 Capsules", &["30 caps", "60 caps"], 200.0, 800.0),
                    template("Multivitamin", &["30 tabs", "60 tabs"], 150.0, 600.0),
                ],
            ),
            subcategory(
                "SURGICAL_ITEMS",
                false,
                vec![
                    template("Syringe 5ml", &["1 piece", "10 pieces"], 5.0, 100.0),
                    template("IV Set", &["1 piece"], 25.0, 80.0),
                    template("Catheter", &["1 piece"], 50.0, 200.0),
                ],
            ),
        ],
        manufacturers: strings(&["Omron", "Dr Trust", "3M", "Romsons", "Accu-Chek", "Beurer"]),
        naming: Naming::PackSize,
        cost_ratio: RatioRange { min: 0.70, max: 0.85 },
        stock: StockRange { min: 10, max: 300 },
        gst_percentage: 18.0,
        hsn_prefix: "9018".to_string(),
        expiry: ExpiryRule::Never,
        description: DescriptionRule::Fixed("Medical device for healthcare".to_string()),
    }
}

fn personal_care() -> CategorySpec {
    CategorySpec {
        category: Category::PersonalCare,
        subcategories: vec![
            subcategory(
                "SANITARY_PADS",
                false,
                vec![
                    template("Whisper Ultra Clean", &["7 pads", "15 pads", "30 pads"], 40.0, 250.0),
                    template("Stayfree Secure", &["7 pads", "10 pads", "20 pads"], 45.0, 220.0),
                    template("Sofy Antibacteria", &["10 pads", "20 pads"], 50.0, 240.0),
                ],
            ),
            subcategory(
                "DIAPERS",
                false,
                vec![
                    template("Pampers", &["S 20pc", "M 30pc", "L 40pc", "XL 50pc"], 200.0, 1200.0),
                    template("Huggies", &["S 20pc", "M 30pc", "L 40pc"], 220.0, 1300.0),
                    template("MamyPoko Pants", &["M 30pc", "L 40pc"], 250.0, 1400.0),
                ],
            ),
            subcategory(
                "SOAPS_HYGIENE",
                false,
                vec![
                    template("Dettol Soap", &["75g", "125g"], 30.0, 90.0),
                    template("Dove Soap", &["75g", "100g"], 40.0, 110.0),
                    template("Lifebuoy Soap", &["75g", "125g"], 25.0, 80.0),
                    template("Savlon Handwash", &["200ml", "500ml"], 45.0, 180.0),
                ],
            ),
            subcategory(
                "SKIN_CARE",
                false,
                vec![
                    template("Nivea Body Lotion", &["200ml", "400ml"], 100.0, 350.0),
                    template("Vaseline Petroleum Jelly", &["50ml", "100ml"], 40.0, 150.0),
                    template("Ponds Cold Cream", &["50ml", "100ml"], 60.0, 200.0),
                ],
            ),
        ],
        manufacturers: strings(&["P&G", "HUL", "J&J", "Kimberly Clark", "Reckitt", "Beiersdorf"]),
        naming: Naming::PackSize,
        cost_ratio: RatioRange { min: 0.70, max: 0.85 },
        stock: StockRange { min: 30, max: 400 },
        gst_percentage: 18.0,
        hsn_prefix: "3304".to_string(),
        expiry: ExpiryRule::Never,
        description: DescriptionRule::Fixed("Personal care product".to_string()),
    }
}

fn baby_products() -> CategorySpec {
    CategorySpec {
        category: Category::BabyProducts,
        subcategories: vec![
            subcategory(
                "BABY_FOOD",
                false,
                vec![
                    template("Cerelac Wheat", &["300g", "500g"], 150.0, 400.0),
                    template("Farex Baby Food", &["300g"], 180.0, 420.0),
                    template("Lactogen", &["400g", "1kg"], 350.0, 1200.0),
                ],
            ),
            subcategory(
                "BABY_CARE",
                false,
                vec![
                    template("Johnson Baby Powder", &["100g", "200g", "400g"], 80.0, 300.0),
                    template("Johnson Baby Oil", &["100ml", "200ml"], 100.0, 280.0),
                    template("Johnson Baby Shampoo", &["200ml", "500ml"], 120.0, 350.0),
                ],
            ),
            subcategory(
                "FEEDING",
                false,
                vec![
                    template("Baby Bottle", &["125ml", "250ml"], 100.0, 400.0),
                    template("Bottle Nipple", &["1 piece", "2 pieces"], 30.0, 120.0),
                    template("Bottle Sterilizer", &["1 piece"], 500.0, 1500.0),
                ],
            ),
        ],
        manufacturers: strings(&["Nestle", "J&J", "Philips Avent", "Chicco"]),
        naming: Naming::PackSize,
        cost_ratio: RatioRange { min: 0.70, max: 0.85 },
        stock: StockRange { min: 20, max: 250 },
        gst_percentage: 12.0,
        hsn_prefix: "1901".to_string(),
        expiry: ExpiryRule::NameContains(strings(&["Food", "Lactogen"])),
        description: DescriptionRule::Fixed("Baby care product".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid_and_complete() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("builtin catalog validates");
        for category in Category::ALL {
            assert!(catalog.spec(category).is_some(), "missing {category}");
        }
    }

    #[test]
    fn gst_rates_follow_category() {
        let catalog = Catalog::builtin();
        let gst = |category| catalog.spec(category).map(|spec| spec.gst_percentage);
        assert_eq!(gst(Category::Medicine), Some(12.0));
        assert_eq!(gst(Category::BabyProducts), Some(12.0));
        assert_eq!(gst(Category::Otc), Some(18.0));
        assert_eq!(gst(Category::PersonalCare), Some(18.0));
    }

    #[test]
    fn only_restricted_medicines_need_prescription() {
        let catalog = Catalog::builtin();
        let mut restricted: Vec<&str> = catalog
            .categories
            .iter()
            .flat_map(|spec| spec.subcategories.iter())
            .filter(|sub| sub.prescription_required)
            .map(|sub| sub.name.as_str())
            .collect();
        restricted.sort_unstable();
        assert_eq!(restricted, vec!["ANTIBIOTIC", "BP_HEART", "DIABETES"]);
    }

    #[test]
    fn baby_expiry_applies_to_food_only() {
        let rule = ExpiryRule::NameContains(strings(&["Food", "Lactogen"]));
        assert!(rule.applies_to("Farex Baby Food"));
        assert!(rule.applies_to("Lactogen"));
        assert!(!rule.applies_to("Johnson Baby Oil"));
    }

    #[test]
    fn describes_medicine_subcategory_in_words() {
        let text = DescriptionRule::TreatsSubcategory.describe("COLD_COUGH");
        assert_eq!(text, "Used for treating cold cough");
    }

    #[test]
    fn validate_rejects_inverted_price_range() {
        let mut catalog = Catalog::builtin();
        catalog.categories[0].subcategories[0].templates[0].min_price = 500.0;
        let err = catalog.validate().expect_err("invalid range");
        assert!(matches!(err, GenerationError::InvalidCatalog(message) if message.contains("Paracetamol")));
    }

    #[test]
    fn validate_rejects_prices_that_round_to_zero() {
        let mut catalog = Catalog::builtin();
        let template = &mut catalog.categories[1].subcategories[0].templates[0];
        template.min_price = 0.001;
        template.max_price = 0.004;
        let err = catalog.validate().expect_err("sub-cent price");
        assert!(matches!(err, GenerationError::InvalidCatalog(message) if message.contains("invalid price range")));
    }

    #[test]
    fn validate_accepts_one_cent_minimum() {
        let mut catalog = Catalog::builtin();
        let template = &mut catalog.categories[1].subcategories[0].templates[0];
        template.min_price = MIN_PRICE;
        template.max_price = 0.02;
        catalog.validate().expect("one cent is a valid price");
    }

    #[test]
    fn validate_rejects_cost_ratio_at_or_above_one() {
        let mut catalog = Catalog::builtin();
        catalog.categories[1].cost_ratio = RatioRange { min: 0.9, max: 1.0 };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_manufacturers() {
        let mut catalog = Catalog::builtin();
        catalog.categories[2].manufacturers.clear();
        assert!(catalog.validate().is_err());
    }
}
