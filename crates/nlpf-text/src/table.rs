//! Loader for the small word tables (lexicons, lemma lists) kept as CSV.

use std::path::Path;

use crate::error::{Result, TextError};

/// Read `columns` from every row of a headed CSV file.
///
/// Header names are matched after trimming whitespace and a UTF-8 BOM.
/// Each row comes back with its 1-based data row number and the trimmed
/// field values in the order of `columns`.
pub(crate) fn read_table<const N: usize>(
    path: &Path,
    columns: [&str; N],
) -> Result<Vec<(usize, [String; N])>> {
    let bytes = std::fs::read(path).map_err(|e| TextError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| TextError::csv(path, e.to_string()))?
        .clone();

    let mut indices = [0usize; N];
    for (slot, name) in indices.iter_mut().zip(columns) {
        *slot = headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').trim() == name)
            .ok_or_else(|| TextError::csv(path, format!("missing {name} column")))?;
    }

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| TextError::csv(path, e.to_string()))?;
        let fields = indices.map(|idx| {
            record
                .get(idx)
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        });
        rows.push((row_idx + 1, fields));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_columns_follow_requested_order() {
        let file = create_temp_csv("\u{feff}score , word\n 0.5 ,great\n1,awful\n");
        let rows = read_table(file.path(), ["word", "score"]).unwrap();
        assert_eq!(
            rows,
            vec![
                (1, ["great".to_string(), "0.5".to_string()]),
                (2, ["awful".to_string(), "1".to_string()]),
            ]
        );
    }

    #[test]
    fn test_missing_column() {
        let file = create_temp_csv("word\ngreat\n");
        let err = read_table(file.path(), ["word", "score"]).unwrap_err();
        assert!(err.to_string().contains("missing score column"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_table(Path::new("/nonexistent/lexicon.csv"), ["word"]).unwrap_err();
        assert!(matches!(err, TextError::Io { .. }));
    }
}
