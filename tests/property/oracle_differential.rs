//! Differential testing: compare every strategy against the oracles.
//!
//! Each strategy is checked against the same simple implementation, which
//! also makes them agree with each other.

use super::oracles::{
    dictionary_strategy, oracle_index_range, oracle_top_matches, oracle_weight_of, prefix_strategy,
    unicode_dictionary_strategy,
};
use crate::common::{build_all, oracle_top_terms, pairs};
use heaviest::{first_index_of, last_index_of, SortedArraySearcher};
use proptest::prelude::*;

// =============================================================================
// QUERIES: every strategy vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn diff_top_matches((words, weights) in dictionary_strategy(), prefix in prefix_strategy(), k in 0usize..10) {
        let expected = oracle_top_matches(&words, &weights, &prefix, k);
        for (strategy, engine) in build_all(&words, &weights) {
            prop_assert_eq!(engine.top_matches(&prefix, k), expected.clone(), "strategy {}", strategy);
        }
    }

    #[test]
    fn diff_top_terms_carry_weights((words, weights) in dictionary_strategy(), prefix in prefix_strategy()) {
        let expected = oracle_top_terms(&words, &weights, &prefix, 5);
        for (strategy, engine) in build_all(&words, &weights) {
            let actual = engine.top_terms(&prefix, 5);
            prop_assert_eq!(pairs(&actual), pairs(&expected), "strategy {}", strategy);
        }
    }

    #[test]
    fn diff_top_match((words, weights) in dictionary_strategy(), prefix in prefix_strategy()) {
        let expected = oracle_top_matches(&words, &weights, &prefix, 1).pop().unwrap_or_default();
        for (strategy, engine) in build_all(&words, &weights) {
            prop_assert_eq!(engine.top_match(&prefix), expected.clone(), "strategy {}", strategy);
        }
    }

    #[test]
    fn diff_weight_of((words, weights) in dictionary_strategy(), term in "[a-d]{0,5}") {
        let expected = oracle_weight_of(&words, &weights, &term);
        for (strategy, engine) in build_all(&words, &weights) {
            prop_assert_eq!(engine.weight_of(&term), expected, "strategy {}", strategy);
        }
    }

    #[test]
    fn diff_unicode_prefixes((words, weights) in unicode_dictionary_strategy(), prefix in "[aé日]{0,2}", k in 0usize..6) {
        let expected = oracle_top_terms(&words, &weights, &prefix, k);
        for (strategy, engine) in build_all(&words, &weights) {
            let actual = engine.top_terms(&prefix, k);
            prop_assert_eq!(pairs(&actual), pairs(&expected), "strategy {}", strategy);
        }
    }
}

// =============================================================================
// BOUNDS: binary search vs linear scan
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn diff_index_bounds(mut items in prop::collection::vec(0u8..16, 0..64), key in 0u8..16) {
        items.sort_unstable();
        let expected = oracle_index_range(&items, |&x| x == key);
        let first = first_index_of(&items, &key, |k: &u8, x: &u8| k.cmp(x));
        let last = last_index_of(&items, &key, |k: &u8, x: &u8| k.cmp(x));
        prop_assert_eq!(first.zip(last), expected);
    }

    #[test]
    fn diff_prefix_range((words, weights) in dictionary_strategy(), prefix in prefix_strategy()) {
        let searcher = SortedArraySearcher::new(&words, &weights).unwrap();
        let expected = oracle_index_range(searcher.terms(), |t| t.word().starts_with(prefix.as_str()));
        let actual = searcher.prefix_range(&prefix).map(|r| (*r.start(), *r.end()));
        prop_assert_eq!(actual, expected);
    }
}
