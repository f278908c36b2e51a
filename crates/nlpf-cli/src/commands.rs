use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{Column, DataType};
use tracing::{debug, info, info_span, warn};

use nlpf_core::{ColumnSelector, SeriesToList, Transformer};
use nlpf_ingest::{fill_missing_text, read_csv_frame, require_columns, write_documents_csv};
use nlpf_text::stopwords::NEGATION_WORDS;
use nlpf_text::{LexiconScorer, PreprocessOptions, Preprocessor, StopWords};

use crate::cli::{PreprocessArgs, StopwordsArgs};
use crate::summary::{StopwordSource, stopwords_table};
use crate::types::{DocumentRecord, PreprocessResult, TokenCount};

/// Tokens listed in the run summary.
const TOP_TOKENS: usize = 10;

pub fn run_stopwords(args: &StopwordsArgs) -> Result<()> {
    let options = load_options(args.config.as_deref())?;
    let keep_negations = options.keep_negations && !args.include_negations;
    let base = StopWords::english(keep_negations);
    let stopwords = base
        .clone()
        .with_extra(options.extra_stopwords.iter().cloned());

    let words: Vec<(String, StopwordSource)> = stopwords
        .iter()
        .map(|word| {
            let source = if !base.contains(word) {
                StopwordSource::Extra
            } else if NEGATION_WORDS.contains(&word) {
                StopwordSource::Negation
            } else {
                StopwordSource::English
            };
            (word.to_string(), source)
        })
        .collect();

    println!("{}", stopwords_table(&words));
    println!("{} stop-words", words.len());
    Ok(())
}

pub fn run_preprocess(args: &PreprocessArgs) -> Result<PreprocessResult> {
    let span = info_span!("preprocess", input = %args.input.display());
    let _guard = span.enter();

    let options = resolve_options(args)?;
    let mut df = read_csv_frame(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let mut required = vec![args.text_column.as_str()];
    if let Some(label) = args.label_column.as_deref() {
        required.push(label);
    }
    require_columns(&df, &required).context("check dataset columns")?;
    let blank = fill_missing_text(&mut df, &args.text_column)
        .with_context(|| format!("fill blank cells in '{}'", args.text_column))?;
    if blank > 0 {
        warn!(blank, "blank text cells treated as empty documents");
    }

    let raw = ColumnSelector::new([args.text_column.as_str()])
        .then(SeriesToList)
        .transform(&df)
        .with_context(|| format!("extract column '{}'", args.text_column))?;
    info!(documents = raw.len(), "loaded documents");

    let preprocessor = match &args.lexicon {
        Some(path) => {
            let scorer = LexiconScorer::from_csv(path)
                .with_context(|| format!("load lexicon {}", path.display()))?;
            Preprocessor::with_scorer(&options, scorer)
        }
        None => Preprocessor::new(&options),
    };
    let documents = preprocessor.documents(&raw);

    let labels = args
        .label_column
        .as_deref()
        .map(|name| df.column(name))
        .transpose()?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_output(&output, &documents, labels)?;
    info!(path = %output.display(), "wrote preprocessed documents");

    let stopwords = StopWords::english(options.keep_negations)
        .with_extra(options.extra_stopwords.iter().cloned())
        .len();
    let (tokens, vocabulary, top_tokens) = token_stats(&documents, TOP_TOKENS);
    Ok(PreprocessResult {
        input: args.input.clone(),
        output,
        text_column: args.text_column.clone(),
        label_column: args.label_column.clone(),
        lexicon: args.lexicon.clone(),
        threshold: options.subjectivity_threshold,
        stopwords,
        documents: documents.len(),
        empty_documents: documents.iter().filter(|doc| doc.is_empty()).count(),
        tokens,
        vocabulary,
        top_tokens,
    })
}

/// Options from the config file (or defaults) with CLI flags applied on top.
pub fn resolve_options(args: &PreprocessArgs) -> Result<PreprocessOptions> {
    let mut options = load_options(args.config.as_deref())?;
    if let Some(threshold) = args.threshold {
        options = options.with_threshold(threshold);
    }
    options = options.with_extra_stopwords(args.extra_stopwords.iter().cloned());
    options.validate().context("invalid preprocessing options")?;
    debug!(?options, "resolved preprocessing options");
    Ok(options)
}

fn load_options(path: Option<&Path>) -> Result<PreprocessOptions> {
    match path {
        Some(path) => PreprocessOptions::load(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(PreprocessOptions::default()),
    }
}

/// `<dir>/<stem>.preprocessed.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "documents".to_string());
    input.with_file_name(format!("{stem}.preprocessed.csv"))
}

fn write_output(path: &Path, documents: &[String], labels: Option<&Column>) -> Result<()> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        write_documents_json(path, documents, labels)
    } else {
        write_documents_csv(path, documents, labels)
            .with_context(|| format!("write {}", path.display()))
    }
}

fn write_documents_json(path: &Path, documents: &[String], labels: Option<&Column>) -> Result<()> {
    let labels = labels.map(label_strings).transpose()?;
    let records: Vec<DocumentRecord<'_>> = documents
        .iter()
        .enumerate()
        .map(|(index, text)| DocumentRecord {
            text,
            label: labels
                .as_ref()
                .and_then(|values| values.get(index))
                .and_then(Option::as_deref),
        })
        .collect();

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records)
        .with_context(|| format!("write {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

fn label_strings(column: &Column) -> Result<Vec<Option<String>>> {
    let cast = column
        .cast(&DataType::String)
        .with_context(|| format!("cast label column '{}'", column.name()))?;
    let values = cast
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

/// Total tokens, distinct tokens, and the `limit` most frequent tokens.
///
/// Ties are broken alphabetically.
pub fn token_stats(documents: &[String], limit: usize) -> (usize, usize, Vec<TokenCount>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in documents.iter().flat_map(|doc| doc.split_whitespace()) {
        *counts.entry(token).or_default() += 1;
    }
    let total = counts.values().sum();
    let vocabulary = counts.len();

    let mut ranked: Vec<TokenCount> = counts
        .into_iter()
        .map(|(token, count)| TokenCount {
            token: token.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    ranked.truncate(limit);
    (total, vocabulary, ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_stats() {
        let documents = vec![
            "good film good".to_string(),
            String::new(),
            "bad film".to_string(),
        ];
        let (total, vocabulary, top) = token_stats(&documents, 2);
        assert_eq!(total, 5);
        assert_eq!(vocabulary, 3);
        assert_eq!(
            top,
            vec![
                TokenCount {
                    token: "film".to_string(),
                    count: 2
                },
                TokenCount {
                    token: "good".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/reviews.csv")),
            PathBuf::from("/data/reviews.preprocessed.csv")
        );
    }
}
