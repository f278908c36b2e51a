//! Text preprocessing stages for bag-of-words sentiment pipelines.
//!
//! Every stage is a plain function, so stages can be chained with
//! [`nlpf_core::Pipeline`] or [`nlpf_core::compose!`]:
//!
//! - **tokenize**: sentence and word tokenization
//! - **negation**: negative-auxiliary rewriting and `_NEG` scope marking
//! - **stopwords**: English stop-word list and filtering
//! - **normalize**: punctuation, compound words, detokenization, flattening
//! - **pos**: Treebank to WordNet tags, tagger and lemmatizer seams
//! - **scoring**: subjectivity and polarity scorer seams, sentence filtering
//! - **config**: [`PreprocessOptions`] loaded from TOML
//! - **pipelines**: the configured [`Preprocessor`]

pub mod config;
pub mod error;
pub mod negation;
pub mod normalize;
pub mod pipelines;
pub mod pos;
pub mod scoring;
pub mod stopwords;
mod table;
pub mod tokenize;

pub use config::{DEFAULT_SUBJECTIVITY_THRESHOLD, PreprocessOptions};
pub use error::{Result, TextError};
pub use pipelines::{
    Preprocessor, Sentences, TokenizedSentences, preprocess_document, sentence_pipeline,
    token_pipeline,
};
pub use pos::{DictionaryLemmatizer, Lemmatizer, PosTagger, WordnetPos, wordnet_pos};
pub use scoring::{LexiconScorer, SentimentScorer, SubjectivityScorer, filter_subjective};
pub use stopwords::StopWords;
