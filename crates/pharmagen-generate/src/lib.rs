//! Synthetic pharmacy catalog generation for Pharmagen.
//!
//! This crate samples product records from static category tables and
//! writes the seed SQL, JSON catalog, preview, sample transactions and
//! search index artifacts. All randomness flows through an injected RNG so
//! runs are reproducible from a seed.

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod index;
pub mod model;
pub mod output;

pub use catalog::Catalog;
pub use engine::{GeneratedDataset, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{CategoryCounts, DayWindow, GenerateOptions, GenerationReport};
