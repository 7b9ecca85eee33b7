use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Top-level product category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Medicine,
    Otc,
    PersonalCare,
    BabyProducts,
}

impl Category {
    /// All categories in generation order.
    pub const ALL: [Category; 4] = [
        Category::Medicine,
        Category::Otc,
        Category::PersonalCare,
        Category::BabyProducts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medicine => "MEDICINE",
            Category::Otc => "OTC",
            Category::PersonalCare => "PERSONAL_CARE",
            Category::BabyProducts => "BABY_PRODUCTS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::UnknownCategory(value.to_string()))
    }
}

/// A single synthetic inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    /// Sequential identifier (`PROD_000001`).
    pub id: String,
    /// EAN-13 style barcode with the Indian `890` prefix.
    pub barcode: String,
    pub name: String,
    pub generic_name: Option<String>,
    pub category: Category,
    pub subcategory: String,
    pub manufacturer: String,
    pub pack_size: String,
    pub dosage: Option<String>,
    /// Maximum retail price, always above `cost_price`.
    pub mrp: f64,
    pub cost_price: f64,
    pub stock_quantity: u32,
    pub prescription_required: bool,
    pub gst_percentage: f64,
    pub hsn_code: String,
    /// Serialized as `YYYY-MM-DD`.
    pub expiry_date: Option<NaiveDate>,
    pub description: String,
}
