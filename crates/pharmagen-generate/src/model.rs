use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmagen_core::Category;

use crate::errors::GenerationError;

/// Largest product total a run accepts. `PROD_` ids are six digits wide.
pub const MAX_PRODUCTS: u64 = 999_999;
/// Largest transaction count a run accepts. Bill numbers carry a four-digit
/// sequence.
pub const MAX_TRANSACTIONS: usize = 9_999;

/// Number of products to generate per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCounts {
    pub medicine: u64,
    pub otc: u64,
    pub personal_care: u64,
    pub baby_products: u64,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Medicine => self.medicine,
            Category::Otc => self.otc,
            Category::PersonalCare => self.personal_care,
            Category::BabyProducts => self.baby_products,
        }
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        Category::ALL
            .iter()
            .fold(0u64, |acc, category| acc.saturating_add(self.get(*category)))
    }

    /// Sum of all counts, or `None` on overflow.
    pub fn checked_total(&self) -> Option<u64> {
        Category::ALL
            .iter()
            .try_fold(0u64, |acc, category| acc.checked_add(self.get(*category)))
    }

    /// Counts with only `category` set.
    pub fn only(category: Category, count: u64) -> Self {
        let mut counts = Self {
            medicine: 0,
            otc: 0,
            personal_care: 0,
            baby_products: 0,
        };
        match category {
            Category::Medicine => counts.medicine = count,
            Category::Otc => counts.otc = count,
            Category::PersonalCare => counts.personal_care = count,
            Category::BabyProducts => counts.baby_products = count,
        }
        counts
    }
}

impl Default for CategoryCounts {
    fn default() -> Self {
        Self {
            medicine: 30_000,
            otc: 10_000,
            personal_care: 7_500,
            baby_products: 2_500,
        }
    }
}

/// Inclusive window of days, used for expiry offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub min: u64,
    pub max: u64,
}

impl Default for DayWindow {
    fn default() -> Self {
        Self { min: 180, max: 1095 }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where artifacts are written.
    pub out_dir: PathBuf,
    /// Seed for the run RNG. Drawn from OS entropy when absent.
    pub seed: Option<u64>,
    /// Products per category.
    pub counts: CategoryCounts,
    /// Maximum VALUES rows per INSERT statement.
    pub sql_batch_size: usize,
    /// Number of leading products written to the preview file.
    pub preview_limit: usize,
    /// Number of sample transactions.
    pub transaction_count: usize,
    /// Expiry offset from the generation date, in days.
    pub expiry_window_days: DayWindow,
    /// Generation timestamp. Defaults to the current time.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            seed: None,
            counts: CategoryCounts::default(),
            sql_batch_size: 1000,
            preview_limit: 100,
            transaction_count: 100,
            expiry_window_days: DayWindow::default(),
            generated_at: None,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.sql_batch_size == 0 {
            return Err(GenerationError::InvalidOptions(
                "sql_batch_size must be greater than zero".to_string(),
            ));
        }
        match self.counts.checked_total() {
            Some(total) if total <= MAX_PRODUCTS => {}
            Some(total) => {
                return Err(GenerationError::InvalidOptions(format!(
                    "product counts add up to {total}, above the limit of {MAX_PRODUCTS}"
                )));
            }
            None => {
                return Err(GenerationError::InvalidOptions(
                    "product counts overflow when added".to_string(),
                ));
            }
        }
        if self.transaction_count > MAX_TRANSACTIONS {
            return Err(GenerationError::InvalidOptions(format!(
                "transaction_count {} is above the limit of {MAX_TRANSACTIONS}",
                self.transaction_count
            )));
        }
        let window = self.expiry_window_days;
        if window.min == 0 {
            return Err(GenerationError::InvalidOptions(
                "expiry_window_days.min must be at least 1".to_string(),
            ));
        }
        if window.min > window.max {
            return Err(GenerationError::InvalidOptions(format!(
                "expiry_window_days.min ({}) must be <= max ({})",
                window.min, window.max
            )));
        }
        Ok(())
    }
}

/// A file written during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub products_total: u64,
    pub products_by_category: BTreeMap<Category, u64>,
    pub prescription_required: u64,
    pub with_expiry: u64,
    pub barcode_collisions: u64,
    pub sql_batches: u64,
    pub transactions: u64,
    pub index_names: u64,
    pub files: Vec<FileReport>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, generated_at: DateTime<Utc>) -> Self {
        Self {
            run_id,
            seed,
            generated_at,
            products_total: 0,
            products_by_category: BTreeMap::new(),
            prescription_required: 0,
            with_expiry: 0,
            barcode_collisions: 0,
            sql_batches: 0,
            transactions: 0,
            index_names: 0,
            files: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, path: PathBuf, bytes: u64) {
        self.files.push(FileReport { path, bytes });
    }

    pub fn bytes_written(&self) -> u64 {
        self.files.iter().map(|file| file.bytes).sum()
    }
}
