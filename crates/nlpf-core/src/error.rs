//! Error types for pipeline adapters.

use thiserror::Error;

/// Errors raised by the column adapters.
///
/// Errors raised by composed stages are never wrapped in this type; they
/// travel through [`TryPipeline`](crate::compose::TryPipeline) unchanged.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A selector named a column the table does not have.
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// A value could not be coerced to text.
    #[error("column '{column}' row {row}: expected {expected}, found {found}")]
    Type {
        column: String,
        row: usize,
        expected: &'static str,
        found: String,
    },

    /// A single-column adapter received a table with another width.
    #[error("expected a single column, found {found}")]
    ColumnCount { found: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    Polars { message: String },
}

impl From<polars::prelude::PolarsError> for PipelineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Polars {
            message: err.to_string(),
        }
    }
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = PipelineError::MissingColumn {
            column: "missing".to_string(),
            available: vec!["text".to_string(), "score".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "column 'missing' not found (available: text, score)"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("text".into());
        let err: PipelineError = polars_err.into();
        assert!(matches!(err, PipelineError::Polars { .. }));
    }
}
