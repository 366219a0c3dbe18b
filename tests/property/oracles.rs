//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations of each query. They serve as
//! ground truth for the optimized strategies. If they disagree, the oracle is
//! right.

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Filter by prefix, sort by (weight desc, word asc), keep `k`.
///
/// O(n log n) per query, but there's nothing to get wrong.
pub fn oracle_top_matches(words: &[String], weights: &[f64], prefix: &str, k: usize) -> Vec<String> {
    let mut matching: Vec<(&str, f64)> = words
        .iter()
        .zip(weights)
        .filter(|(w, _)| w.starts_with(prefix))
        .map(|(w, &weight)| (w.as_str(), weight))
        .collect();
    matching.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    matching.into_iter().take(k).map(|(w, _)| w.to_string()).collect()
}

/// Exact lookup by linear search.
pub fn oracle_weight_of(words: &[String], weights: &[f64], term: &str) -> f64 {
    words
        .iter()
        .position(|w| w == term)
        .map_or(0.0, |i| weights[i])
}

/// Linear scan for the first and last index where `pred` holds.
pub fn oracle_index_range<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<(usize, usize)> {
    let first = items.iter().position(&pred)?;
    let last = items.iter().rposition(&pred)?;
    Some((first, last))
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Small alphabet so prefixes collide often.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,5}").unwrap()
}

/// Distinct words, integral weights (so ties are common).
pub fn dictionary_strategy() -> impl Strategy<Value = (Vec<String>, Vec<f64>)> {
    prop::collection::btree_map(word_strategy(), 0u32..12, 0..40).prop_map(|map| {
        let (words, weights): (Vec<String>, Vec<u32>) = map.into_iter().unzip();
        (words, weights.into_iter().map(f64::from).collect())
    })
}

/// Words with multi-byte characters mixed in.
pub fn unicode_dictionary_strategy() -> impl Strategy<Value = (Vec<String>, Vec<f64>)> {
    let word = prop::string::string_regex("[aé日]{0,4}").unwrap();
    prop::collection::btree_map(word, 0.0f64..100.0, 0..30)
        .prop_map(|map| -> (Vec<String>, Vec<f64>) { map.into_iter().unzip() })
}

pub fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,3}").unwrap()
}

// =============================================================================
// ORACLE SELF-TESTS
// =============================================================================

#[cfg(test)]
mod oracle_tests {
    use super::*;

    #[test]
    fn oracle_top_matches_sample() {
        let words: Vec<String> = ["air", "bat", "bell", "boy"].iter().map(|s| s.to_string()).collect();
        let weights = [3.0, 2.0, 4.0, 1.0];
        assert_eq!(oracle_top_matches(&words, &weights, "b", 2), vec!["bell", "bat"]);
        assert_eq!(oracle_top_matches(&words, &weights, "", 10), vec!["bell", "air", "bat", "boy"]);
        assert_eq!(oracle_weight_of(&words, &weights, "boy"), 1.0);
        assert_eq!(oracle_weight_of(&words, &weights, "bo"), 0.0);
    }

    #[test]
    fn oracle_index_range_sample() {
        let items = [1, 2, 2, 3];
        assert_eq!(oracle_index_range(&items, |&x| x == 2), Some((1, 2)));
        assert_eq!(oracle_index_range(&items, |&x| x == 9), None);
    }
}
