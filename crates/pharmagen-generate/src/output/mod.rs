//! Artifact serializers and file layout.

pub mod atomic;
pub mod json;
pub mod sql;

use std::path::{Path, PathBuf};

/// Where each artifact of a run is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub seed_sql: PathBuf,
    pub preview: PathBuf,
    pub catalog: PathBuf,
    pub transactions: PathBuf,
    pub search_index: PathBuf,
    pub report: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path) -> Self {
        let data_dir = out_dir.join("data");
        Self {
            seed_sql: out_dir.join("supabase").join("seed.sql"),
            preview: out_dir.join("products_preview.json"),
            catalog: data_dir.join("products.json"),
            transactions: data_dir.join("transactions.json"),
            search_index: data_dir.join("search_index.json"),
            report: out_dir.join("generation_report.json"),
        }
    }
}
