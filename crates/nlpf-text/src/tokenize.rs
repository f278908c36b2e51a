//! Sentence and word tokenization.
//!
//! The rules follow the Penn Treebank conventions closely enough for a
//! bag-of-words model: words are lower-cased, punctuation marks become
//! their own tokens, and negative or pronoun contractions are split off
//! (`don't` becomes `do` + `n't`). Hyphenated compounds are kept whole so
//! that [`break_compound_words`](crate::normalize::break_compound_words)
//! can decide what to do with them.

use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+(?:['\-]\w+)*|\.{3}|[^\w\s]").expect("Invalid word token regex")
});

/// Contraction suffixes split off a word, longest first.
const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// Characters that end a sentence.
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Characters allowed to trail a terminator inside the same sentence.
fn is_closer(ch: char) -> bool {
    is_terminator(ch) || matches!(ch, '"' | ')' | ']')
}

/// Split a text into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus closing quotes or
/// brackets) that is followed by whitespace or the end of the text.
/// Blank input yields no sentences.
///
/// ```
/// use nlpf_text::tokenize::sent_tokenize;
///
/// assert_eq!(
///     sent_tokenize("I do not care. I think. Maybe not"),
///     vec!["I do not care.", "I think.", "Maybe not"]
/// );
/// assert!(sent_tokenize("   ").is_empty());
/// ```
pub fn sent_tokenize(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }
        let mut end = idx + ch.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_closer(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if at_boundary {
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_sentence(&mut sentences, &text[start..]);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Split one sentence into lower-case word tokens.
///
/// ```
/// use nlpf_text::tokenize::tokenize_words;
///
/// assert_eq!(
///     tokenize_words("I don't like well-made films!"),
///     vec!["i", "do", "n't", "like", "well-made", "films", "!"]
/// );
/// ```
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    let normalized = sentence.replace('\u{2019}', "'").to_lowercase();
    WORD_REGEX
        .find_iter(&normalized)
        .flat_map(|token| split_contraction(token.as_str()))
        .collect()
}

/// Word-tokenize every sentence of a document.
pub fn word_tokenize(sentences: &[String]) -> Vec<Vec<String>> {
    sentences.iter().map(|s| tokenize_words(s)).collect()
}

fn split_contraction(word: &str) -> Vec<String> {
    for suffix in CONTRACTION_SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix)
            && !stem.is_empty()
        {
            return vec![stem.to_string(), (*suffix).to_string()];
        }
    }
    vec![word.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sent_tokenize_keeps_terminator_runs_together() {
        assert_eq!(
            sent_tokenize("Really?! Yes... \"Fine.\" Done"),
            vec!["Really?!", "Yes...", "\"Fine.\"", "Done"]
        );
    }

    #[test]
    fn test_sent_tokenize_ignores_inner_periods() {
        assert_eq!(
            sent_tokenize("Rated 3.5 stars. Worth it."),
            vec!["Rated 3.5 stars.", "Worth it."]
        );
    }

    #[test]
    fn test_sent_tokenize_empty() {
        assert!(sent_tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_words_splits_contractions() {
        assert_eq!(
            tokenize_words("It's what we've wanted, isn't it"),
            vec!["it", "'s", "what", "we", "'ve", "wanted", ",", "is", "n't", "it"]
        );
    }

    #[test]
    fn test_tokenize_words_curly_apostrophe_and_ellipsis() {
        assert_eq!(
            tokenize_words("Didn\u{2019}t work..."),
            vec!["did", "n't", "work", "..."]
        );
    }

    #[test]
    fn test_word_tokenize_per_sentence() {
        let sentences = vec!["Good film.".to_string(), "Bad ending".to_string()];
        assert_eq!(
            word_tokenize(&sentences),
            vec![vec!["good", "film", "."], vec!["bad", "ending"]]
        );
    }
}
