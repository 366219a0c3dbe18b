//! Shared test utilities and fixtures.

#![allow(dead_code)]

use heaviest::{Autocompletor, Strategy, Term};

// Re-export canonical test utilities from heaviest::testing
pub use heaviest::testing::{build_all, oracle_top_terms, pairs, SAMPLE_WEIGHTS, SAMPLE_WORDS};

// ============================================================================
// FIXTURES
// ============================================================================

/// A dictionary with heavy ties, shared prefixes and non-ASCII words.
pub fn tricky_dictionary() -> (Vec<&'static str>, Vec<f64>) {
    let entries = [
        ("", 0.5),
        ("a", 2.0),
        ("ab", 2.0),
        ("abc", 2.0),
        ("abd", 7.0),
        ("b", 7.0),
        ("ba", 0.0),
        ("café", 3.0),
        ("cafe", 3.0),
        ("caff", 1.0),
        ("日本", 5.0),
        ("日本語", 5.0),
    ];
    entries.iter().copied().unzip()
}

/// Deterministic pseudo-random dictionary of `n` distinct words.
///
/// Linear congruential generator, so no dev-dependency beyond proptest.
pub fn generated_dictionary(n: usize, seed: u64) -> (Vec<String>, Vec<f64>) {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        state >> 33
    };

    let words: Vec<String> = (0..n)
        .map(|i| {
            let len = 1 + (next() % 6) as usize;
            let stem: String = (0..len).map(|_| (b'a' + (next() % 5) as u8) as char).collect();
            format!("{}{}", stem, i)
        })
        .collect();
    let weights = (0..n).map(|_| (next() % 1000) as f64 / 10.0).collect();
    (words, weights)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Every strategy answers `prefix`/`k` exactly like the oracle.
pub fn assert_agrees_with_oracle<S: AsRef<str>>(words: &[S], weights: &[f64], prefix: &str, k: usize) {
    let expected = oracle_top_terms(words, weights, prefix, k);
    for (strategy, engine) in build_all(words, weights) {
        let actual = engine.top_terms(prefix, k);
        assert_eq!(
            pairs(&actual),
            pairs(&expected),
            "{} disagrees with oracle for prefix {:?}, k={}",
            strategy,
            prefix,
            k
        );
    }
}

/// Weights of a ranked answer never increase.
pub fn assert_ranked(terms: &[Term]) {
    for pair in terms.windows(2) {
        assert!(
            pair[0].weight() >= pair[1].weight(),
            "answer not ranked: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

pub fn engine(strategy: Strategy) -> Box<dyn Autocompletor + Send + Sync> {
    strategy
        .build(&SAMPLE_WORDS, &SAMPLE_WEIGHTS)
        .expect("sample dictionary builds")
}
