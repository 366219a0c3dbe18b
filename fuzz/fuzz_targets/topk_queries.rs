// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for top-k queries across every strategy.
//!
//! Builds all three indexes over an arbitrary dictionary and checks that they
//! answer arbitrary queries identically. The linear scanner is the reference:
//! if the trie or the sorted array disagrees with it, they are wrong.

#![no_main]

use arbitrary::Arbitrary;
use heaviest::{Autocompletor, LinearScanner, SortedArraySearcher, WeightedTrie};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    /// Dictionary entries; weights are scaled down from u16 to keep ties common
    entries: Vec<(String, u16)>,
    prefixes: Vec<String>,
    k: u8,
}

fuzz_target!(|input: QueryInput| {
    // Cap sizes to avoid timeouts
    let mut seen = HashSet::new();
    let (words, weights): (Vec<String>, Vec<f64>) = input
        .entries
        .into_iter()
        .take(200)
        .filter(|(word, _)| seen.insert(word.clone()))
        .map(|(word, weight)| (word, f64::from(weight % 64)))
        .unzip();
    let k = usize::from(input.k % 32);

    let scanner = LinearScanner::new(&words, &weights).expect("distinct words with valid weights");
    let sorted = SortedArraySearcher::new(&words, &weights).expect("valid weights");
    let trie = WeightedTrie::new(&words, &weights).expect("valid weights");

    for prefix in input.prefixes.iter().take(16) {
        let expected = scanner.top_terms(prefix, k);

        // INVARIANT 1: never more than k answers, all starting with the prefix
        assert!(expected.len() <= k);
        assert!(expected.iter().all(|t| t.word().starts_with(prefix.as_str())));

        // INVARIANT 2: every strategy gives the same ranked answer
        assert_eq!(sorted.top_terms(prefix, k), expected, "sorted array, prefix {:?}", prefix);
        assert_eq!(trie.top_terms(prefix, k), expected, "trie, prefix {:?}", prefix);

        // INVARIANT 3: top_match is the head of top_matches
        let head = scanner.top_matches(prefix, 1).pop().unwrap_or_default();
        assert_eq!(sorted.top_match(prefix), head);
        assert_eq!(trie.top_match(prefix), head);

        // INVARIANT 4: exact lookups agree (the scanner ignores case, so use the others)
        assert_eq!(sorted.weight_of(prefix), trie.weight_of(prefix));
    }
});
