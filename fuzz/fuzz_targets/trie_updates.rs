// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for incremental trie updates.
//!
//! Applies an arbitrary sequence of inserts, raises and lowers, then checks
//! the trie against a fresh build of the final dictionary. Cached subtree
//! bounds that drift out of date show up here as wrong answers.

#![no_main]

use arbitrary::Arbitrary;
use heaviest::{Autocompletor, WeightedTrie};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

#[derive(Debug, Arbitrary)]
struct UpdateInput {
    updates: Vec<(String, u8)>,
    prefix: String,
}

fuzz_target!(|input: UpdateInput| {
    let mut trie = WeightedTrie::default();
    let mut latest = BTreeMap::new();

    for (word, weight) in input.updates.into_iter().take(300) {
        let weight = f64::from(weight);
        trie.insert(&word, weight).expect("non-negative weight");
        latest.insert(word, weight);
    }

    let (words, weights): (Vec<String>, Vec<f64>) = latest.into_iter().unzip();
    let fresh = WeightedTrie::new(&words, &weights).expect("non-negative weights");

    assert_eq!(trie.len(), fresh.len());
    assert_eq!(trie.max_weight(), fresh.max_weight());
    assert_eq!(trie.top_terms(&input.prefix, 10), fresh.top_terms(&input.prefix, 10));
    assert_eq!(trie.top_match(&input.prefix), fresh.top_match(&input.prefix));

    // Snapshots of an updated trie must pass validation
    let json = serde_json::to_string(&trie).expect("trie serializes");
    let restored: WeightedTrie = serde_json::from_str(&json).expect("updated trie is well formed");
    assert_eq!(restored.top_terms("", words.len()), fresh.top_terms("", words.len()));
});
