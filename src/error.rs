use std::path::PathBuf;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum PricingError {
    /// Total headcount must be at least one
    #[error("Invalid headcount: total employees must be at least 1 (got {0})")]
    InvalidHeadcount(u32),
    /// Failed to write a report file
    #[error("Failed to write {path}: {source}")]
    ExportError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
