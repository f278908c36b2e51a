//! Preprocessing configuration.
//!
//! Options are read from TOML. Every field has a default, so an empty
//! file (or no file) gives the standard pipeline:
//!
//! ```toml
//! subjectivity_threshold = 0.3
//! extra_stopwords = ["'s", "'re", "'ve", "'ll", "'d", "'m"]
//! keep_negations = true
//! compound_symbol = "-"
//! punctuation_to_keep = ""
//! mark_negation = true
//! double_negation_flip = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextError};

/// Minimum subjectivity a sentence needs to survive filtering.
pub const DEFAULT_SUBJECTIVITY_THRESHOLD: f64 = 0.3;

/// Contraction suffixes left behind by the tokenizer.
pub const DEFAULT_EXTRA_STOPWORDS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Tunable parameters of the preprocessing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreprocessOptions {
    /// Sentences scoring below this subjectivity are dropped.
    pub subjectivity_threshold: f64,
    /// Words removed on top of the English stop-word list.
    pub extra_stopwords: Vec<String>,
    /// Keep negation-bearing stop-words such as `not` and `no`.
    pub keep_negations: bool,
    /// Symbol joining compound words; empty disables splitting.
    pub compound_symbol: String,
    /// Punctuation characters that survive clean-up.
    pub punctuation_to_keep: String,
    /// Append `_NEG` to tokens inside a negation scope.
    pub mark_negation: bool,
    /// A second negation closes the scope instead of being marked.
    pub double_negation_flip: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            subjectivity_threshold: DEFAULT_SUBJECTIVITY_THRESHOLD,
            extra_stopwords: DEFAULT_EXTRA_STOPWORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            keep_negations: true,
            compound_symbol: "-".to_string(),
            punctuation_to_keep: String::new(),
            mark_negation: true,
            double_negation_flip: false,
        }
    }
}

impl PreprocessOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: Self = toml::from_str(text).map_err(|e| TextError::InvalidConfig {
            message: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TextError::io(path, e))?;
        let options: Self = toml::from_str(&text).map_err(|source| TextError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Override the subjectivity threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.subjectivity_threshold = threshold;
        self
    }

    /// Add words to the extra stop-word list.
    #[must_use]
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.subjectivity_threshold) {
            return Err(TextError::InvalidConfig {
                message: format!(
                    "subjectivity_threshold must be within [0, 1], got {}",
                    self.subjectivity_threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PreprocessOptions::default();
        assert!((options.subjectivity_threshold - 0.3).abs() < f64::EPSILON);
        assert!(options.keep_negations);
        assert!(options.extra_stopwords.contains(&"'s".to_string()));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let options = PreprocessOptions::from_toml_str("").unwrap();
        assert_eq!(options, PreprocessOptions::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let options = PreprocessOptions::from_toml_str(
            "subjectivity_threshold = 0.5\nextra_stopwords = [\"film\"]\nmark_negation = false\n",
        )
        .unwrap();
        assert!((options.subjectivity_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(options.extra_stopwords, vec!["film"]);
        assert!(!options.mark_negation);
        assert_eq!(options.compound_symbol, "-");
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = PreprocessOptions::from_toml_str("subjectivity_threshold = 1.5").unwrap_err();
        assert!(matches!(err, TextError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(PreprocessOptions::from_toml_str("threshold = 0.1").is_err());
    }
}
