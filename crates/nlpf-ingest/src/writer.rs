//! Output of preprocessed documents.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::error::{IngestError, Result};

/// Name of the document column in written output.
pub const TEXT_COLUMN: &str = "text";

/// Build an output frame of documents, with the label column appended
/// when given.
pub fn documents_frame(documents: &[String], labels: Option<&Column>) -> Result<DataFrame> {
    let mut columns = vec![Column::new(TEXT_COLUMN.into(), documents)];
    if let Some(labels) = labels {
        if labels.len() != documents.len() {
            return Err(IngestError::HeightMismatch {
                expected: documents.len(),
                found: labels.len(),
            });
        }
        columns.push(labels.clone());
    }
    Ok(DataFrame::new(columns)?)
}

/// Write documents (and optional labels) to a CSV file with a header row.
pub fn write_documents_csv(
    path: &Path,
    documents: &[String],
    labels: Option<&Column>,
) -> Result<()> {
    let mut df = documents_frame(documents, labels)?;
    let mut file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(path = %path.display(), rows = df.height(), "wrote documents");
    Ok(())
}
