//! Negation handling for token streams.

use std::sync::LazyLock;

use regex::Regex;

/// Contracted negative auxiliaries rewritten to `not`.
pub const NEGATIVE_AUXILIARIES: &[&str] = &[
    "don't", "didn", "didn't", "doesn", "doesn't", "hadn", "n't", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't", "aren", "aren't", "couldn", "couldn't",
];

/// Suffix appended to tokens inside a negation scope.
pub const NEGATION_SUFFIX: &str = "_NEG";

static NEGATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^(?:never|no|nothing|nowhere|noone|none|not|havent|hasnt|hadnt|cant|couldnt|shouldnt|wont|wouldnt|dont|doesnt|didnt|isnt|arent|aint)$)|n't",
    )
    .expect("Invalid negation regex")
});

static CLAUSE_PUNCT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.:;!?]$").expect("Invalid clause punctuation regex"));

/// True when `token` opens a negation scope.
pub fn is_negation(token: &str) -> bool {
    NEGATION_REGEX.is_match(token)
}

/// Replace contracted negative auxiliaries with `not` in every sentence.
pub fn fix_negative_auxiliaries(sentences: Vec<Vec<String>>) -> Vec<Vec<String>> {
    sentences
        .into_iter()
        .map(|sentence| {
            sentence
                .into_iter()
                .map(|token| {
                    if NEGATIVE_AUXILIARIES.contains(&token.as_str()) {
                        "not".to_string()
                    } else {
                        token
                    }
                })
                .collect()
        })
        .collect()
}

/// Append [`NEGATION_SUFFIX`] to every token between a negation and the
/// next clause-level punctuation mark (`. : ; ! ?`).
///
/// The negation word itself is left untouched. When `double_neg_flip` is
/// set, a second negation inside a scope closes it instead of being
/// marked.
///
/// ```
/// use nlpf_text::negation::mark_negation;
///
/// let tokens: Vec<String> = ["i", "did", "not", "like", "it", ".", "fine"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(
///     mark_negation(tokens, false),
///     vec!["i", "did", "not", "like_NEG", "it_NEG", ".", "fine"]
/// );
/// ```
pub fn mark_negation(tokens: Vec<String>, double_neg_flip: bool) -> Vec<String> {
    let mut in_scope = false;
    let mut marked = Vec::with_capacity(tokens.len());
    for token in tokens {
        if is_negation(&token) {
            if !in_scope || double_neg_flip {
                in_scope = !in_scope;
                marked.push(token);
            } else {
                marked.push(format!("{token}{NEGATION_SUFFIX}"));
            }
        } else if in_scope && CLAUSE_PUNCT_REGEX.is_match(&token) {
            in_scope = false;
            marked.push(token);
        } else if in_scope {
            marked.push(format!("{token}{NEGATION_SUFFIX}"));
        } else {
            marked.push(token);
        }
    }
    marked
}

/// Apply [`mark_negation`] to each sentence independently.
pub fn mark_negation_sentences(
    sentences: Vec<Vec<String>>,
    double_neg_flip: bool,
) -> Vec<Vec<String>> {
    sentences
        .into_iter()
        .map(|sentence| mark_negation(sentence, double_neg_flip))
        .collect()
}
