use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Insufficient data: {found} groups (need at least 2)")]
    InsufficientGroups { found: usize },

    #[error("Insufficient data: group {index} has {count} observations (need at least 2)")]
    InsufficientObservations { index: usize, count: usize },

    #[error("Invalid alpha: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    #[error("Numerical error: {0}")]
    Numerical(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
