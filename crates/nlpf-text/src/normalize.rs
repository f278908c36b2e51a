//! Token and string clean-up stages.

/// True for ASCII punctuation not listed in `keep`.
fn is_removable_punct(ch: char, keep: &str) -> bool {
    ch.is_ascii_punctuation() && !keep.contains(ch)
}

/// Strip ASCII punctuation from each sentence string, except the
/// characters listed in `keep` (for example `"!?"`).
pub fn remove_punctuation(sentences: &[String], keep: &str) -> Vec<String> {
    sentences
        .iter()
        .map(|sentence| {
            sentence
                .chars()
                .filter(|ch| !is_removable_punct(*ch, keep))
                .collect()
        })
        .collect()
}

/// Drop tokens made only of removable punctuation.
///
/// Unlike [`remove_punctuation`] this leaves word tokens untouched, so
/// markers such as `like_NEG` survive.
pub fn drop_punctuation_tokens(sentences: Vec<Vec<String>>, keep: &str) -> Vec<Vec<String>> {
    sentences
        .into_iter()
        .map(|sentence| {
            sentence
                .into_iter()
                .filter(|token| !token.chars().all(|ch| is_removable_punct(ch, keep)))
                .collect()
        })
        .collect()
}

/// Split `word1<symbol>word2` tokens into their parts and drop empty
/// strings left behind.
///
/// ```
/// use nlpf_text::normalize::break_compound_words;
///
/// let sentences = vec![vec!["well-made".to_string(), "-".to_string(), "film".to_string()]];
/// assert_eq!(
///     break_compound_words(sentences, "-"),
///     vec![vec!["well", "made", "film"]]
/// );
/// ```
pub fn break_compound_words(sentences: Vec<Vec<String>>, symbol: &str) -> Vec<Vec<String>> {
    if symbol.is_empty() {
        return sentences;
    }
    sentences
        .into_iter()
        .map(|sentence| {
            sentence
                .into_iter()
                .flat_map(|token| {
                    if token.contains(symbol) {
                        token
                            .split(symbol)
                            .filter(|part| !part.is_empty())
                            .map(str::to_string)
                            .collect()
                    } else {
                        vec![token]
                    }
                })
                .filter(|token| !token.is_empty())
                .collect()
        })
        .collect()
}

/// Join each tokenized sentence back into a single string.
pub fn detokenize_sentences(sentences: &[Vec<String>]) -> Vec<String> {
    sentences.iter().map(|tokens| tokens.join(" ")).collect()
}

/// Join a list of strings with single spaces.
pub fn join_strings(strings: &[String]) -> String {
    strings.join(" ")
}

/// Flatten sentences into one token list.
pub fn flatten_tokens(sentences: Vec<Vec<String>>) -> Vec<String> {
    sentences.into_iter().flatten().collect()
}

/// An arbitrarily nested list, such as a parse result mixing words and
/// sub-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Depth-first flattening that keeps the left-to-right order.
    pub fn flatten(self) -> Vec<T> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<T>) {
        match self {
            Nested::Item(item) => out.push(item),
            Nested::List(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_remove_punctuation_keeps_requested() {
        let cleaned = remove_punctuation(&strings(&["Wow, great!", "Is it? (yes)"]), "!?");
        assert_eq!(cleaned, strings(&["Wow great!", "Is it? yes"]));
    }

    #[test]
    fn test_drop_punctuation_tokens() {
        let kept = drop_punctuation_tokens(
            vec![strings(&["not", "like_NEG", ".", "...", "!", "film"])],
            "!",
        );
        assert_eq!(kept, vec![strings(&["not", "like_NEG", "!", "film"])]);
    }

    #[test]
    fn test_break_compound_custom_symbol() {
        let broken = break_compound_words(vec![strings(&["good/bad", "/", "ok"])], "/");
        assert_eq!(broken, vec![strings(&["good", "bad", "ok"])]);
    }

    #[test]
    fn test_detokenize_and_join() {
        let sentences = vec![strings(&["good", "film"]), strings(&["bad", "end"])];
        let detok = detokenize_sentences(&sentences);
        assert_eq!(detok, strings(&["good film", "bad end"]));
        assert_eq!(join_strings(&detok), "good film bad end");
        assert_eq!(flatten_tokens(sentences), strings(&["good", "film", "bad", "end"]));
    }

    #[test]
    fn test_nested_flatten_irregular() {
        let nested = Nested::List(vec![
            Nested::Item(1),
            Nested::List(vec![]),
            Nested::List(vec![Nested::List(vec![Nested::Item(2), Nested::Item(3)])]),
            Nested::Item(4),
        ]);
        assert_eq!(nested.flatten(), vec![1, 2, 3, 4]);
    }
}
