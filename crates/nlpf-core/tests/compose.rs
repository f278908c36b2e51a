//! Composition laws for the function combinator.

use nlpf_core::{Pipeline, compose, compose2};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(i64),
    Mul(i64),
    Neg,
}

impl Op {
    fn run(self, value: i64) -> i64 {
        match self {
            Op::Add(n) => value.wrapping_add(n),
            Op::Mul(n) => value.wrapping_mul(n),
            Op::Neg => value.wrapping_neg(),
        }
    }
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-100i64..100).prop_map(Op::Add),
        (-10i64..10).prop_map(Op::Mul),
        Just(Op::Neg),
    ]
}

/// fn(...f2(f1(x))) written as explicit recursion.
fn nested(ops: &[Op], x: i64) -> i64 {
    match ops.split_last() {
        None => x,
        Some((last, rest)) => last.run(nested(rest, x)),
    }
}

proptest! {
    #[test]
    fn pipeline_matches_nested_application(ops in prop::collection::vec(op(), 0..12), x in any::<i64>()) {
        let pipeline = Pipeline::from_stages(ops.iter().map(|&op| move |v: i64| op.run(v)));
        prop_assert_eq!(pipeline.len(), ops.len());
        prop_assert_eq!(pipeline.apply(x), nested(&ops, x));
    }

    #[test]
    fn empty_pipeline_is_identity(x in any::<i64>(), s in ".*") {
        prop_assert_eq!(Pipeline::<i64>::new().apply(x), x);
        prop_assert_eq!(Pipeline::<String>::new().apply(s.clone()), s);
    }
}

#[test]
fn macro_composes_left_to_right() {
    let f = compose!(|x: i64| x + 1, |x: i64| x * 2, |x: i64| x - 3);
    assert_eq!(f(4), 7);
}

#[test]
fn macro_with_no_functions_is_identity() {
    let f = compose!();
    assert_eq!(f("unchanged"), "unchanged");
}

#[test]
fn compose2_feeds_sentence_split_into_word_split() {
    let sentences = |text: &str| -> Vec<String> {
        text.split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };
    let words = |sents: Vec<String>| -> Vec<Vec<String>> {
        sents
            .iter()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .collect()
    };
    let tokenize = compose2(sentences, words);
    assert_eq!(
        tokenize("I do not care. Maybe not"),
        vec![vec!["I", "do", "not", "care"], vec!["Maybe", "not"]]
    );
}

#[test]
fn pipeline_into_fn_is_reusable() {
    let f = Pipeline::new()
        .stage(|v: Vec<String>| v.into_iter().rev().collect())
        .into_fn();
    let input = vec!["a".to_string(), "b".to_string()];
    assert_eq!(f(input.clone()), vec!["b", "a"]);
    assert_eq!(f(input), vec!["b", "a"]);
}
