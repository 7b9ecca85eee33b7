use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use pharmagen_core::{Category, Product, SearchIndex, Transaction};

use crate::catalog::Catalog;
use crate::errors::GenerationError;
use crate::generators::{ProductGenerator, generate_transactions};
use crate::index::build_search_index;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::OutputPaths;
use crate::output::json::{
    CatalogFile, TransactionsFile, preview, write_json_compact, write_json_pretty,
};
use crate::output::sql::{insert_batches, seed_document};
use crate::output::atomic::write_bytes_atomic;

/// In-memory result of the sampling step.
#[derive(Debug, Clone)]
pub struct GeneratedDataset {
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub index: SearchIndex,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub paths: OutputPaths,
    pub report: GenerationReport,
}

/// Entry point for generating the pharmacy dataset and its artifacts.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
    catalog: Catalog,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_catalog(options, Catalog::builtin())
    }

    pub fn with_catalog(options: GenerateOptions, catalog: Catalog) -> Self {
        Self { options, catalog }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Sample products, transactions and the index without touching disk.
    pub fn generate(
        &self,
        rng: &mut impl Rng,
        generated_at: DateTime<Utc>,
    ) -> Result<GeneratedDataset, GenerationError> {
        self.options.validate()?;
        self.catalog.validate()?;

        let mut generator = ProductGenerator::new(
            &self.catalog,
            generated_at.date_naive(),
            self.options.expiry_window_days,
        );

        let mut products = Vec::new();
        for category in Category::ALL {
            let count = self.options.counts.get(category);
            if count == 0 {
                continue;
            }
            let started = Instant::now();
            let batch = generator.generate(category, count, rng)?;
            info!(
                category = %category,
                rows = batch.len(),
                first_id = batch.first().map(|p| p.id.as_str()).unwrap_or_default(),
                duration_ms = started.elapsed().as_millis() as u64,
                "category generated"
            );
            products.extend(batch);
        }

        let transactions = generate_transactions(
            self.options.transaction_count,
            &products,
            generated_at.naive_utc(),
            rng,
        );
        let index = build_search_index(&products);

        Ok(GeneratedDataset {
            products,
            transactions,
            index,
        })
    }

    /// Generate the dataset and write every artifact under `out_dir`.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let generated_at = self.options.generated_at.unwrap_or_else(Utc::now);
        let paths = OutputPaths::new(&self.options.out_dir);

        info!(
            event = "generation_started",
            run_id = %run_id,
            seed,
            products = self.options.counts.total(),
            out_dir = %self.options.out_dir.display(),
            "generation started"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dataset = self.generate(&mut rng, generated_at)?;
        let products = &dataset.products;

        let mut report = GenerationReport::new(run_id.clone(), seed, generated_at);
        report.products_total = products.len() as u64;
        for product in products {
            *report
                .products_by_category
                .entry(product.category)
                .or_insert(0) += 1;
        }
        report.prescription_required =
            products.iter().filter(|p| p.prescription_required).count() as u64;
        report.with_expiry = products.iter().filter(|p| p.expiry_date.is_some()).count() as u64;
        report.barcode_collisions = (products.len() - dataset.index.by_barcode.len()) as u64;
        report.transactions = dataset.transactions.len() as u64;
        report.index_names = dataset.index.by_name.len() as u64;

        if report.barcode_collisions > 0 {
            warn!(
                collisions = report.barcode_collisions,
                "duplicate barcodes generated; index keeps the last product per barcode"
            );
        }

        let batches = insert_batches(products, self.options.sql_batch_size);
        report.sql_batches = batches.len() as u64;
        let sql = seed_document(&batches, products.len(), generated_at);
        let bytes = write_bytes_atomic(&paths.seed_sql, sql.as_bytes())?;
        report.record_file(paths.seed_sql.clone(), bytes);
        info!(
            event = "artifact_written",
            path = %paths.seed_sql.display(),
            batches = batches.len(),
            bytes
        );

        let bytes = write_json_pretty(
            &paths.preview,
            &preview(products, self.options.preview_limit),
        )?;
        report.record_file(paths.preview.clone(), bytes);
        info!(event = "artifact_written", path = %paths.preview.display(), bytes);

        let catalog = CatalogFile::new(products, generated_at, seed);
        let bytes = write_json_pretty(&paths.catalog, &catalog)?;
        report.record_file(paths.catalog.clone(), bytes);
        info!(event = "artifact_written", path = %paths.catalog.display(), bytes);

        let transactions = TransactionsFile {
            transactions: &dataset.transactions,
        };
        let bytes = write_json_pretty(&paths.transactions, &transactions)?;
        report.record_file(paths.transactions.clone(), bytes);
        info!(event = "artifact_written", path = %paths.transactions.display(), bytes);

        let bytes = write_json_compact(&paths.search_index, &dataset.index)?;
        report.record_file(paths.search_index.clone(), bytes);
        info!(event = "artifact_written", path = %paths.search_index.display(), bytes);

        report.duration_ms = start.elapsed().as_millis() as u64;
        write_json_pretty(&paths.report, &report)?;

        info!(
            event = "generation_completed",
            run_id = %run_id,
            products = report.products_total,
            transactions = report.transactions,
            sql_batches = report.sql_batches,
            bytes_written = report.bytes_written(),
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { paths, report })
    }
}

impl GenerationResult {
    pub fn out_files(&self) -> Vec<PathBuf> {
        self.report.files.iter().map(|file| file.path.clone()).collect()
    }
}
