//! Sentence and token pipelines assembled from [`PreprocessOptions`].
//!
//! A document flows through:
//!
//! 1. sentence tokenization
//! 2. the sentence pipeline (subjectivity filter, when a scorer is given)
//! 3. word tokenization
//! 4. the token pipeline: compound splitting, negative auxiliaries to
//!    `not`, stop-word removal, negation marking, punctuation tokens
//!    dropped
//!
//! Lemmatization is optional and slots in after the token pipeline when
//! both a tagger and a lemmatizer are supplied.

use nlpf_core::{Pipeline, compose};
use tracing::{debug, warn};

use crate::config::PreprocessOptions;
use crate::negation::{fix_negative_auxiliaries, mark_negation_sentences};
use crate::normalize::{break_compound_words, detokenize_sentences, drop_punctuation_tokens};
use crate::pos::{Lemmatizer, PosTagger, lemmatize_tagged, pos_tag_sentences};
use crate::scoring::{SubjectivityScorer, filter_subjective};
use crate::stopwords::{StopWords, remove_stopwords};
use crate::tokenize::{sent_tokenize, word_tokenize};

/// Sentences of one document.
pub type Sentences = Vec<String>;

/// Word tokens of one document, grouped by sentence.
pub type TokenizedSentences = Vec<Vec<String>>;

/// Sentence-level stages: keep subjective sentences only.
pub fn sentence_pipeline<S>(options: &PreprocessOptions, scorer: S) -> Pipeline<Sentences>
where
    S: SubjectivityScorer + 'static,
{
    let threshold = options.subjectivity_threshold;
    Pipeline::new().stage(move |sentences: Sentences| {
        filter_subjective(&sentences, &scorer, threshold)
    })
}

/// Token-level stages configured by `options`.
pub fn token_pipeline(options: &PreprocessOptions) -> Pipeline<TokenizedSentences> {
    let symbol = options.compound_symbol.clone();
    let stopwords = StopWords::english(options.keep_negations)
        .with_extra(options.extra_stopwords.iter().cloned());
    let keep = options.punctuation_to_keep.clone();
    let flip = options.double_negation_flip;

    let mut pipeline = Pipeline::<TokenizedSentences>::new()
        .stage(move |tokens| break_compound_words(tokens, &symbol))
        .stage(fix_negative_auxiliaries)
        .stage(move |tokens| remove_stopwords(tokens, &stopwords));
    if options.mark_negation {
        pipeline.push(move |tokens| mark_negation_sentences(tokens, flip));
    }
    pipeline.push(move |tokens| drop_punctuation_tokens(tokens, &keep));
    pipeline
}

/// Attach a tagger and lemmatizer as a final token stage.
pub fn lemmatize_stage<T, L>(
    tagger: T,
    lemmatizer: L,
) -> impl Fn(TokenizedSentences) -> TokenizedSentences
where
    T: PosTagger,
    L: Lemmatizer,
{
    move |tokens: TokenizedSentences| {
        let tagged = pos_tag_sentences(&tokens, &tagger);
        lemmatize_tagged(&tagged, &lemmatizer)
    }
}

/// Run one document through the sentence filter and token clean-up.
///
/// Builds the pipelines on every call; reuse a [`Preprocessor`] for
/// batches.
pub fn preprocess_document<S>(document: &str, options: &PreprocessOptions, scorer: S) -> String
where
    S: SubjectivityScorer + 'static,
{
    Preprocessor::with_scorer(options, scorer).document(document)
}

/// Turns raw documents into cleaned bag-of-words strings.
#[derive(Debug)]
pub struct Preprocessor {
    sentences: Pipeline<Sentences>,
    tokens: Pipeline<TokenizedSentences>,
}

impl Preprocessor {
    /// Build a preprocessor without sentence filtering.
    pub fn new(options: &PreprocessOptions) -> Self {
        Self {
            sentences: Pipeline::new(),
            tokens: token_pipeline(options),
        }
    }

    /// Build a preprocessor that drops sentences below the configured
    /// subjectivity threshold.
    pub fn with_scorer<S>(options: &PreprocessOptions, scorer: S) -> Self
    where
        S: SubjectivityScorer + 'static,
    {
        Self {
            sentences: sentence_pipeline(options, scorer),
            tokens: token_pipeline(options),
        }
    }

    /// Append a lemmatization stage after the token clean-up.
    #[must_use]
    pub fn with_lemmatizer<T, L>(mut self, tagger: T, lemmatizer: L) -> Self
    where
        T: PosTagger + 'static,
        L: Lemmatizer + 'static,
    {
        self.tokens.push(lemmatize_stage(tagger, lemmatizer));
        self
    }

    pub fn sentence_pipeline(&self) -> &Pipeline<Sentences> {
        &self.sentences
    }

    pub fn token_pipeline(&self) -> &Pipeline<TokenizedSentences> {
        &self.tokens
    }

    /// Run one document through every stage.
    pub fn tokens(&self, document: &str) -> TokenizedSentences {
        let run = compose!(
            sent_tokenize,
            |sentences: Sentences| self.sentences.apply(sentences),
            |sentences: Sentences| word_tokenize(&sentences),
            |tokens: TokenizedSentences| self.tokens.apply(tokens),
            |tokens: TokenizedSentences| {
                tokens
                    .into_iter()
                    .filter(|sentence| !sentence.is_empty())
                    .collect::<TokenizedSentences>()
            },
        );
        run(document)
    }

    /// Run one document and join the surviving tokens with spaces.
    pub fn document(&self, document: &str) -> String {
        detokenize_sentences(&self.tokens(document)).join(" ")
    }

    /// Preprocess a batch of documents, preserving order.
    pub fn documents(&self, documents: &[String]) -> Vec<String> {
        let processed: Vec<String> = documents.iter().map(|doc| self.document(doc)).collect();
        let empty = processed.iter().filter(|doc| doc.is_empty()).count();
        if empty > 0 {
            warn!(empty, total = documents.len(), "documents left empty after preprocessing");
        }
        debug!(total = documents.len(), "preprocessed documents");
        processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pipeline_stage_count() {
        let options = PreprocessOptions::default();
        assert_eq!(token_pipeline(&options).len(), 5);

        let options = PreprocessOptions {
            mark_negation: false,
            ..PreprocessOptions::default()
        };
        assert_eq!(token_pipeline(&options).len(), 4);
    }

    #[test]
    fn test_document_without_scorer() {
        let preprocessor = Preprocessor::new(&PreprocessOptions::default());
        assert_eq!(
            preprocessor.document("I don't like this well-made film. It's boring!"),
            "not like_NEG well_NEG made_NEG film_NEG boring"
        );
    }

    #[test]
    fn test_preprocess_document_filters_objective_sentences() {
        let scorer = |sentence: &str| if sentence.contains("awful") { 0.9 } else { 0.1 };
        assert_eq!(
            preprocess_document(
                "The film runs two hours. Nice pacing.",
                &PreprocessOptions::default(),
                scorer,
            ),
            ""
        );
        assert_eq!(
            preprocess_document(
                "The film runs two hours. The pacing is awful.",
                &PreprocessOptions::default(),
                scorer,
            ),
            "pacing awful"
        );
    }

    #[test]
    fn test_empty_document() {
        let preprocessor = Preprocessor::new(&PreprocessOptions::default());
        assert_eq!(preprocessor.document(""), "");
        assert!(preprocessor.tokens("The.").is_empty());
    }
}
