use thiserror::Error;

/// Core error type shared across Pharmagen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A category name did not match any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Convenience alias for results returned by Pharmagen crates.
pub type Result<T> = std::result::Result<T, Error>;
