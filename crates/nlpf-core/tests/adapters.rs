//! Integration tests for the column adapters.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use nlpf_core::{ColumnSelector, PipelineError, SeriesToList, Transformer, text_column};

fn reviews_df() -> DataFrame {
    let cols: Vec<Column> = vec![
        Series::new("text".into(), ["good film", "bad film"]).into_column(),
        Series::new("score".into(), [1i64, 0]).into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

#[test]
fn selector_keeps_only_requested_column() {
    let df = reviews_df();
    let selected = ColumnSelector::new(["text"]).transform(&df).unwrap();

    assert_eq!(selected.width(), 1);
    assert_eq!(selected.height(), df.height());
    let values: Vec<Option<&str>> = selected
        .column("text")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(values, vec![Some("good film"), Some("bad film")]);
}

#[test]
fn selector_fit_is_a_no_op() {
    let selector = ColumnSelector::new(["text", "score"]);
    let fitted = selector.clone().fit(&reviews_df()).unwrap();
    assert_eq!(fitted, selector);
}

#[test]
fn selector_reports_missing_column() {
    let err = ColumnSelector::new(["missing"])
        .transform(&reviews_df())
        .unwrap_err();
    match err {
        PipelineError::MissingColumn { column, available } => {
            assert_eq!(column, "missing");
            assert_eq!(available, vec!["text", "score"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn series_to_list_preserves_order() {
    let column = Series::new("text".into(), ["a", "b", "c"]).into_column();
    let docs = SeriesToList.transform(&column).unwrap();
    assert_eq!(docs, vec!["a", "b", "c"]);
}

#[test]
fn selector_then_series_to_list_yields_documents() {
    let chain = ColumnSelector::new(["text"]).then(SeriesToList);
    let (chain, docs) = chain.fit_transform(&reviews_df()).unwrap();
    assert_eq!(docs, vec!["good film", "bad film"]);
    assert_eq!(chain.first().columns(), ["text".to_string()]);
}

#[test]
fn text_column_shortcut_matches_chain() {
    let docs = text_column(&reviews_df(), "text").unwrap();
    assert_eq!(docs, vec!["good film", "bad film"]);

    let err = text_column(&reviews_df(), "score").unwrap_err();
    assert!(matches!(err, PipelineError::Type { .. }));
}

#[test]
fn selector_on_empty_frame_keeps_schema() {
    let cols: Vec<Column> = vec![
        Series::new("text".into(), Vec::<String>::new()).into_column(),
        Series::new("score".into(), Vec::<i64>::new()).into_column(),
    ];
    let df = DataFrame::new(cols).unwrap();
    let docs = ColumnSelector::new(["text"])
        .then(SeriesToList)
        .transform(&df)
        .unwrap();
    assert!(docs.is_empty());
}
