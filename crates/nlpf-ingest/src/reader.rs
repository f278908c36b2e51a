//! CSV dataset loading with up-front file checks.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows Polars samples when inferring column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Frames wider than this are loaded with a warning.
const WIDE_FRAME_COLUMNS: usize = 500;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject files that start with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Validate DataFrame shape after loading.
///
/// Rejects frames without rows and blank column names; warns about very
/// wide frames.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    if df.width() > WIDE_FRAME_COLUMNS {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "dataset has more than {WIDE_FRAME_COLUMNS} columns"
        );
    }

    if df
        .get_column_names()
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Read a CSV file with a single header row into a DataFrame.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    validate_dataframe_shape(&df, path)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );
    Ok(df)
}

/// Fail with [`IngestError::ColumnNotFound`] for the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    match columns
        .iter()
        .find(|column| df.get_column_index(column).is_none())
    {
        Some(column) => Err(IngestError::ColumnNotFound {
            column: (*column).to_string(),
        }),
        None => Ok(()),
    }
}

/// Replace null cells of a text column with empty strings.
///
/// Empty CSV fields load as null; callers treat them as empty documents.
/// Returns the number of cells filled. Non-string columns are left as is.
pub fn fill_missing_text(df: &mut DataFrame, column: &str) -> Result<usize> {
    let series = df
        .column(column)
        .map_err(|_| IngestError::ColumnNotFound {
            column: column.to_string(),
        })?
        .as_materialized_series();
    let missing = series.null_count();
    if series.dtype() != &DataType::String || missing == 0 {
        return Ok(0);
    }

    let name = series.name().clone();
    let values: Vec<&str> = series
        .str()?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    let filled = Column::new(name, values);
    df.with_column(filled)?;
    debug!(column, missing, "filled missing text cells");
    Ok(missing)
}
