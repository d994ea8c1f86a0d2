use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a source file into a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file is missing or cannot be read.
    #[error("song list not found at {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("song list has no '{column}' column")]
    MissingColumn { column: &'static str },

    /// Data-quality defect in a single row; aborts the whole load.
    #[error("row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("unsupported song list format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl CatalogError {
    /// Whether the source itself could not be reached (as opposed to bad content).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

/// Convenience alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;
