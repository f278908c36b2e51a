//! Column adapters that turn a table into the plain document list a
//! vectorizer expects.
//!
//! ```
//! use nlpf_core::{ColumnSelector, SeriesToList, Transformer};
//! use polars::prelude::{Column, DataFrame};
//!
//! let df = DataFrame::new(vec![
//!     Column::new("text".into(), ["good film", "bad film"]),
//!     Column::new("score".into(), [1i64, 0]),
//! ])
//! .unwrap();
//!
//! let docs = ColumnSelector::new(["text"]).then(SeriesToList).transform(&df).unwrap();
//! assert_eq!(docs, vec!["good film", "bad film"]);
//! ```

use polars::prelude::{Column, DataFrame, DataType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::transformer::Transformer;

/// Projects a table onto a fixed list of columns.
///
/// Columns come back in the order they were requested; rows keep their
/// order and count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelector {
    columns: Vec<String>,
}

impl ColumnSelector {
    /// Create a selector for the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Column names this selector keeps.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl Transformer<DataFrame> for ColumnSelector {
    type Output = DataFrame;

    fn fit(self, _data: &DataFrame) -> Result<Self> {
        Ok(self)
    }

    fn transform(&self, data: &DataFrame) -> Result<DataFrame> {
        if let Some(column) = self
            .columns
            .iter()
            .find(|name| data.get_column_index(name).is_none())
        {
            return Err(PipelineError::MissingColumn {
                column: column.clone(),
                available: data
                    .get_column_names()
                    .into_iter()
                    .map(|name| name.to_string())
                    .collect(),
            });
        }
        let selected = data.select(self.columns.iter().map(String::as_str))?;
        debug!(
            columns = ?self.columns,
            rows = selected.height(),
            "selected columns"
        );
        Ok(selected)
    }
}

/// Flattens one text column into an ordered `Vec<String>`.
///
/// Accepts either a [`Column`] or a single-column [`DataFrame`], so it can
/// sit directly behind a [`ColumnSelector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesToList;

impl Transformer<Column> for SeriesToList {
    type Output = Vec<String>;

    fn fit(self, _data: &Column) -> Result<Self> {
        Ok(self)
    }

    fn transform(&self, data: &Column) -> Result<Vec<String>> {
        column_to_strings(data)
    }
}

impl Transformer<DataFrame> for SeriesToList {
    type Output = Vec<String>;

    fn fit(self, _data: &DataFrame) -> Result<Self> {
        Ok(self)
    }

    fn transform(&self, data: &DataFrame) -> Result<Vec<String>> {
        match data.get_columns() {
            [column] => column_to_strings(column),
            columns => Err(PipelineError::ColumnCount {
                found: columns.len(),
            }),
        }
    }
}

/// Select `name` from `data` and return its values as documents.
pub fn text_column(data: &DataFrame, name: &str) -> Result<Vec<String>> {
    ColumnSelector::new([name]).then(SeriesToList).transform(data)
}

fn column_to_strings(column: &Column) -> Result<Vec<String>> {
    let name = column.name().to_string();
    if column.dtype() != &DataType::String {
        if column.is_empty() {
            return Ok(Vec::new());
        }
        return Err(PipelineError::Type {
            column: name,
            row: 0,
            expected: "string",
            found: column.dtype().to_string(),
        });
    }

    let values = column.as_materialized_series().str()?;
    let mut documents = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        match value {
            Some(text) => documents.push(text.to_string()),
            None => {
                return Err(PipelineError::Type {
                    column: name,
                    row,
                    expected: "string",
                    found: "null".to_string(),
                });
            }
        }
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_to_list_rejects_numeric_column() {
        let column = Column::new("score".into(), [1i64, 0]);
        let err = SeriesToList.transform(&column).unwrap_err();
        match err {
            PipelineError::Type {
                column, row, found, ..
            } => {
                assert_eq!(column, "score");
                assert_eq!(row, 0);
                assert_eq!(found, "i64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_series_to_list_reports_null_row() {
        let column = Column::new("text".into(), [Some("fine"), None, Some("ok")]);
        let err = SeriesToList.transform(&column).unwrap_err();
        assert!(matches!(err, PipelineError::Type { row: 1, .. }));
    }

    #[test]
    fn test_series_to_list_empty_numeric_column_is_empty() {
        let column = Column::new("score".into(), Vec::<i64>::new());
        assert!(SeriesToList.transform(&column).unwrap().is_empty());
    }

    #[test]
    fn test_series_to_list_requires_single_column_frame() {
        let df = DataFrame::new(vec![
            Column::new("a".into(), ["x"]),
            Column::new("b".into(), ["y"]),
        ])
        .unwrap();
        let err = SeriesToList.transform(&df).unwrap_err();
        assert!(matches!(err, PipelineError::ColumnCount { found: 2 }));
    }

    #[test]
    fn test_selector_keeps_requested_order() {
        let df = DataFrame::new(vec![
            Column::new("a".into(), ["1"]),
            Column::new("b".into(), ["2"]),
            Column::new("c".into(), ["3"]),
        ])
        .unwrap();
        let selected = ColumnSelector::new(["c", "a"]).transform(&df).unwrap();
        let names: Vec<String> = selected
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["c", "a"]);
    }
}
