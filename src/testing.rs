//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::Strategy;
use crate::search::Autocompletor;
use crate::types::Term;

/// The four-word dictionary most tests start from.
pub const SAMPLE_WORDS: [&str; 4] = ["air", "bat", "bell", "boy"];
pub const SAMPLE_WEIGHTS: [f64; 4] = [3.0, 2.0, 4.0, 1.0];

/// One index per strategy over the same dictionary, labelled by strategy.
pub fn build_all<S: AsRef<str>>(
    words: &[S],
    weights: &[f64],
) -> Vec<(Strategy, Box<dyn Autocompletor + Send + Sync>)> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let engine = strategy
                .build(words, weights)
                .unwrap_or_else(|e| panic!("{} failed to build: {}", strategy, e));
            (strategy, engine)
        })
        .collect()
}

/// The answer every strategy must give: filter, sort by weight then word, truncate.
pub fn oracle_top_terms<S: AsRef<str>>(words: &[S], weights: &[f64], prefix: &str, k: usize) -> Vec<Term> {
    let mut matching: Vec<Term> = words
        .iter()
        .zip(weights)
        .filter(|(word, _)| word.as_ref().starts_with(prefix))
        .map(|(word, &weight)| Term::from_parts(word.as_ref().to_string(), weight + 0.0))
        .collect();
    matching.sort_by(|a, b| b.weight().total_cmp(&a.weight()).then_with(|| a.word().cmp(b.word())));
    matching.truncate(k);
    matching
}

/// Weights and words as plain pairs, for readable assertions.
pub fn pairs(terms: &[Term]) -> Vec<(&str, f64)> {
    terms.iter().map(|t| (t.word(), t.weight())).collect()
}
