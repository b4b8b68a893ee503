//! Error types for the core domain model.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building or parsing domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Growth year outside the slider range.
    #[error("invalid growth year: {year} (must be between {min} and {max})")]
    InvalidGrowthYear { year: i64, min: u8, max: u8 },

    /// Sunlight value that is not one of full, partial or shade.
    #[error("unknown sunlight requirement: {0:?}")]
    UnknownSunlight(String),

    /// Water value that is not one of low, medium or high.
    #[error("unknown water requirement: {0:?}")]
    UnknownWater(String),

    /// Filter category name that is not sunlight, water or features.
    #[error("unknown filter category: {0:?}")]
    UnknownFilterCategory(String),

    /// Two catalog entries share the same identifier.
    #[error("duplicate plant id in catalog: {id}")]
    DuplicatePlantId { id: String },

    /// A catalog must contain at least one plant.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Catalog JSON could not be decoded.
    #[error("catalog decode error: {0}")]
    Json(#[from] serde_json::Error),
}
