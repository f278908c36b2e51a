//! Part-of-speech tags and lemmatization.
//!
//! Tagging and lemmatization are external capabilities. This module only
//! defines the seams ([`PosTagger`], [`Lemmatizer`]), the Penn Treebank to
//! WordNet tag mapping, and a dictionary-backed lemmatizer for lemma
//! tables exported from an NLP toolkit.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TextError};
use crate::table::read_table;

/// A token paired with its Penn Treebank tag.
pub type Tagged = (String, String);

/// WordNet part-of-speech classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordnetPos {
    Adjective,
    AdjectiveSatellite,
    Adverb,
    Noun,
    Verb,
}

impl WordnetPos {
    /// Single-letter WordNet code (`a`, `s`, `r`, `n`, `v`).
    pub fn code(self) -> char {
        match self {
            Self::Adjective => 'a',
            Self::AdjectiveSatellite => 's',
            Self::Adverb => 'r',
            Self::Noun => 'n',
            Self::Verb => 'v',
        }
    }

    /// Parse a single-letter WordNet code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "a" => Some(Self::Adjective),
            "s" => Some(Self::AdjectiveSatellite),
            "r" => Some(Self::Adverb),
            "n" => Some(Self::Noun),
            "v" => Some(Self::Verb),
            _ => None,
        }
    }
}

/// Map a Penn Treebank tag to its WordNet class, if it has one.
///
/// ```
/// use nlpf_text::pos::{WordnetPos, wordnet_pos};
///
/// assert_eq!(wordnet_pos("JJR"), Some(WordnetPos::Adjective));
/// assert_eq!(wordnet_pos("VBD"), Some(WordnetPos::Verb));
/// assert_eq!(wordnet_pos("DT"), None);
/// ```
pub fn wordnet_pos(treebank_tag: &str) -> Option<WordnetPos> {
    match treebank_tag.chars().next()? {
        'J' => Some(WordnetPos::Adjective),
        'V' => Some(WordnetPos::Verb),
        'N' => Some(WordnetPos::Noun),
        'R' => Some(WordnetPos::Adverb),
        'S' => Some(WordnetPos::AdjectiveSatellite),
        _ => None,
    }
}

/// Assigns Penn Treebank tags to the tokens of one sentence.
pub trait PosTagger {
    fn tag(&self, tokens: &[String]) -> Vec<Tagged>;
}

impl<F> PosTagger for F
where
    F: Fn(&[String]) -> Vec<Tagged>,
{
    fn tag(&self, tokens: &[String]) -> Vec<Tagged> {
        self(tokens)
    }
}

/// Reduces a word to its lemma for a given WordNet class.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str, pos: WordnetPos) -> String;
}

impl<F> Lemmatizer for F
where
    F: Fn(&str, WordnetPos) -> String,
{
    fn lemmatize(&self, word: &str, pos: WordnetPos) -> String {
        self(word, pos)
    }
}

/// Tag every sentence of a document.
pub fn pos_tag_sentences<T: PosTagger + ?Sized>(
    sentences: &[Vec<String>],
    tagger: &T,
) -> Vec<Vec<Tagged>> {
    sentences.iter().map(|tokens| tagger.tag(tokens)).collect()
}

/// Lemmatize tagged sentences.
///
/// Tokens whose tag has no WordNet class are returned unchanged.
pub fn lemmatize_tagged<L: Lemmatizer + ?Sized>(
    sentences: &[Vec<Tagged>],
    lemmatizer: &L,
) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|sentence| {
            sentence
                .iter()
                .map(|(word, tag)| match wordnet_pos(tag) {
                    Some(pos) => lemmatizer.lemmatize(word, pos),
                    None => word.clone(),
                })
                .collect()
        })
        .collect()
}

/// Lemmatizer backed by a `(word, pos) -> lemma` table.
///
/// Unknown words are returned as is.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    entries: HashMap<(String, WordnetPos), String>,
}

impl DictionaryLemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lemma. Words are stored lowercase, matching the tokenizer.
    #[must_use]
    pub fn with_entry(
        mut self,
        word: impl Into<String>,
        pos: WordnetPos,
        lemma: impl Into<String>,
    ) -> Self {
        self.entries
            .insert((word.into().to_lowercase(), pos), lemma.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a lemma table from a CSV with `word`, `pos` and `lemma` columns.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut lemmatizer = Self::new();
        for (row, [word, code, lemma]) in read_table(path, ["word", "pos", "lemma"])? {
            let pos = WordnetPos::from_code(&code).ok_or_else(|| {
                TextError::csv(path, format!("row {row}: invalid pos '{code}'"))
            })?;
            lemmatizer = lemmatizer.with_entry(word, pos, lemma);
        }
        debug!(path = %path.display(), entries = lemmatizer.len(), "loaded lemma table");
        Ok(lemmatizer)
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str, pos: WordnetPos) -> String {
        self.entries
            .get(&(word.to_string(), pos))
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<Tagged> {
        pairs
            .iter()
            .map(|(w, t)| ((*w).to_string(), (*t).to_string()))
            .collect()
    }

    #[test]
    fn test_wordnet_pos_satellite_and_empty() {
        assert_eq!(wordnet_pos("S"), Some(WordnetPos::AdjectiveSatellite));
        assert_eq!(wordnet_pos("RB"), Some(WordnetPos::Adverb));
        assert_eq!(wordnet_pos(""), None);
    }

    #[test]
    fn test_code_round_trip() {
        for pos in [
            WordnetPos::Adjective,
            WordnetPos::AdjectiveSatellite,
            WordnetPos::Adverb,
            WordnetPos::Noun,
            WordnetPos::Verb,
        ] {
            assert_eq!(WordnetPos::from_code(&pos.code().to_string()), Some(pos));
        }
    }

    #[test]
    fn test_lemmatize_tagged_keeps_untagged_words() {
        let lemmatizer = DictionaryLemmatizer::new()
            .with_entry("films", WordnetPos::Noun, "film")
            .with_entry("loved", WordnetPos::Verb, "love");
        let sentences = vec![tagged(&[
            ("we", "PRP"),
            ("loved", "VBD"),
            ("the", "DT"),
            ("films", "NNS"),
        ])];
        assert_eq!(
            lemmatize_tagged(&sentences, &lemmatizer),
            vec![vec!["we", "love", "the", "film"]]
        );
    }

    #[test]
    fn test_with_entry_matches_lowercase_tokens() {
        let lemmatizer = DictionaryLemmatizer::new().with_entry("Films", WordnetPos::Noun, "film");
        assert_eq!(lemmatizer.lemmatize("films", WordnetPos::Noun), "film");
        assert_eq!(lemmatizer.lemmatize("films", WordnetPos::Verb), "films");
    }

    #[test]
    fn test_closure_tagger_and_lemmatizer() {
        let tagger = |tokens: &[String]| -> Vec<Tagged> {
            tokens
                .iter()
                .map(|t| (t.clone(), "NN".to_string()))
                .collect()
        };
        let upper = |word: &str, _pos: WordnetPos| word.to_uppercase();
        let tagged = pos_tag_sentences(&[vec!["cat".to_string()]], &tagger);
        assert_eq!(lemmatize_tagged(&tagged, &upper), vec![vec!["CAT"]]);
    }
}
