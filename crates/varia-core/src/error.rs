//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors from chart rendering
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Chart rendering failed: {0}")]
    Render(String),
}

/// Top-level error for an analysis run
#[derive(Debug, Error)]
pub enum AnovaError {
    /// Table reading/writing errors (missing files, missing columns,
    /// non-numeric value cells)
    #[error("Table error: {0}")]
    Table(#[from] varia_io::TableError),

    /// Statistical computation errors
    #[error("Statistics error: {0}")]
    Stats(#[from] varia_stats::StatsError),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Fewer than two groups in the grouping column
    #[error("Insufficient data: found {found} group(s) (need at least 2)")]
    NotEnoughGroups { found: usize },

    /// A group with too few observations for variance-based tests
    #[error("Insufficient data: group '{label}' has {count} observation(s) (need at least 2)")]
    GroupTooSmall { label: String, count: usize },

    /// I/O errors outside the table layer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnovaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnovaError::GroupTooSmall {
            label: "B".into(),
            count: 1,
        };
        assert!(err.to_string().contains("'B'"));

        let err = AnovaError::NotEnoughGroups { found: 1 };
        assert!(err.to_string().contains("1 group"));
    }
}
