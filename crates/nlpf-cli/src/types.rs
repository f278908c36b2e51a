use std::path::PathBuf;

use serde::Serialize;

/// Outcome of one `preprocess` run.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub text_column: String,
    pub label_column: Option<String>,
    pub lexicon: Option<PathBuf>,
    pub threshold: f64,
    pub stopwords: usize,
    pub documents: usize,
    pub empty_documents: usize,
    pub tokens: usize,
    pub vocabulary: usize,
    pub top_tokens: Vec<TokenCount>,
}

impl PreprocessResult {
    /// Mean number of tokens per document.
    pub fn mean_tokens(&self) -> f64 {
        if self.documents == 0 {
            0.0
        } else {
            self.tokens as f64 / self.documents as f64
        }
    }
}

/// Frequency of one token across all output documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// One row of JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}
