//! Dataset ingestion for text preprocessing.
//!
//! Loads labelled review datasets from CSV into Polars DataFrames, merges
//! frames that describe the same samples, and writes preprocessed
//! documents back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use nlpf_ingest::{read_csv_frame, require_columns};
//!
//! let df = read_csv_frame(Path::new("reviews.csv"))?;
//! require_columns(&df, &["text", "score"])?;
//! ```

mod error;
mod merge;
mod reader;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, fill_missing_text,
    read_csv_frame, require_columns, validate_dataframe_shape, validate_encoding,
};

// === Frame Merging ===
pub use merge::merge_frames;

// === Output ===
pub use writer::{TEXT_COLUMN, documents_frame, write_documents_csv};
