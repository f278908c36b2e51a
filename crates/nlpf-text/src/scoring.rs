//! Sentence scoring seams and subjectivity filtering.
//!
//! Subjectivity and polarity scores come from an external sentiment
//! library. Any `Fn(&str) -> f64` can stand in for one; [`LexiconScorer`]
//! wraps a word-score table exported from such a library.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TextError};
use crate::table::read_table;

/// Scores how subjective a sentence is, in `[0, 1]`.
pub trait SubjectivityScorer {
    fn subjectivity(&self, sentence: &str) -> f64;
}

impl<F> SubjectivityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn subjectivity(&self, sentence: &str) -> f64 {
        self(sentence)
    }
}

/// Scores the polarity of a sentence.
pub trait SentimentScorer {
    fn polarity(&self, sentence: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, sentence: &str) -> f64 {
        self(sentence)
    }
}

/// Keep the sentences whose subjectivity is at least `threshold`.
pub fn filter_subjective<S: SubjectivityScorer + ?Sized>(
    sentences: &[String],
    scorer: &S,
    threshold: f64,
) -> Vec<String> {
    let kept: Vec<String> = sentences
        .iter()
        .filter(|sentence| scorer.subjectivity(sentence) >= threshold)
        .cloned()
        .collect();
    debug!(
        total = sentences.len(),
        kept = kept.len(),
        threshold,
        "filtered sentences by subjectivity"
    );
    kept
}

/// Polarity of every sentence, or `None` for a document with no sentences.
pub fn sentence_scores<S: SentimentScorer + ?Sized>(
    sentences: &[String],
    scorer: &S,
) -> Option<Vec<f64>> {
    if sentences.is_empty() {
        return None;
    }
    Some(sentences.iter().map(|s| scorer.polarity(s)).collect())
}

/// Mean word score over the words of a sentence found in a table.
///
/// Sentences with no known word score `0.0`.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    scores: HashMap<String, f64>,
}

impl LexiconScorer {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: entries
                .into_iter()
                .map(|(word, score)| (word.into().to_lowercase(), score))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Load a table from a CSV with `word` and `score` columns.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut entries = Vec::new();
        for (row, [word, raw]) in read_table(path, ["word", "score"])? {
            let score = raw.parse::<f64>().map_err(|_| {
                TextError::csv(path, format!("row {row}: invalid score '{raw}'"))
            })?;
            if !word.is_empty() {
                entries.push((word, score));
            }
        }
        let scorer = Self::new(entries);
        debug!(path = %path.display(), entries = scorer.len(), "loaded lexicon");
        Ok(scorer)
    }

    /// Mean score of the known words in `text`.
    pub fn score(&self, text: &str) -> f64 {
        let known: Vec<f64> = text
            .split(|ch: char| !(ch.is_alphanumeric() || ch == '\''))
            .filter(|word| !word.is_empty())
            .filter_map(|word| self.scores.get(&word.to_lowercase()).copied())
            .collect();
        if known.is_empty() {
            0.0
        } else {
            known.iter().sum::<f64>() / known.len() as f64
        }
    }
}

impl SubjectivityScorer for LexiconScorer {
    fn subjectivity(&self, sentence: &str) -> f64 {
        self.score(sentence)
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, sentence: &str) -> f64 {
        self.score(sentence)
    }
}
