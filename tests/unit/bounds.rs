//! Tests for the first/last index primitives through the public API.

use heaviest::{first_index_of, last_index_of, PrefixOrder, SortedTerms, Term};
use std::cmp::Ordering;

fn by_value(key: &i32, item: &i32) -> Ordering {
    key.cmp(item)
}

#[test]
fn test_run_of_equal_keys() {
    let items = [1, 2, 2, 2, 3, 5];
    assert_eq!(first_index_of(&items, &2, by_value), Some(1));
    assert_eq!(last_index_of(&items, &2, by_value), Some(3));
}

#[test]
fn test_single_match() {
    let items = [1, 3, 5, 7];
    assert_eq!(first_index_of(&items, &5, by_value), Some(2));
    assert_eq!(last_index_of(&items, &5, by_value), Some(2));
}

#[test]
fn test_absent_key() {
    let items = [1, 3, 5, 7];
    for key in [0, 2, 4, 8] {
        assert_eq!(first_index_of(&items, &key, by_value), None, "key {}", key);
        assert_eq!(last_index_of(&items, &key, by_value), None, "key {}", key);
    }
}

#[test]
fn test_empty_slice() {
    let items: [i32; 0] = [];
    assert_eq!(first_index_of(&items, &1, by_value), None);
    assert_eq!(last_index_of(&items, &1, by_value), None);
}

#[test]
fn test_everything_equal() {
    let items = [4; 9];
    assert_eq!(first_index_of(&items, &4, by_value), Some(0));
    assert_eq!(last_index_of(&items, &4, by_value), Some(8));
}

#[test]
fn test_unsized_key_against_terms() {
    let terms = SortedTerms::from_sorted(vec![
        Term::new("air", 3.0).unwrap(),
        Term::new("bat", 2.0).unwrap(),
        Term::new("bell", 4.0).unwrap(),
    ])
    .unwrap();
    let by_word = |key: &str, term: &Term| key.cmp(term.word());
    assert_eq!(first_index_of(terms.as_slice(), "bat", by_word), Some(1));
    assert_eq!(first_index_of(terms.as_slice(), "be", by_word), None);
}

#[test]
fn test_prefix_order_finds_run() {
    let terms = SortedTerms::from_unsorted(
        ["boy", "air", "bell", "bat", "cat"]
            .iter()
            .map(|w| Term::new(*w, 1.0).unwrap())
            .collect(),
    );
    let key = Term::new("b", 0.0).unwrap();
    let order = PrefixOrder::for_prefix("b");
    let compare = |k: &Term, t: &Term| order.compare(k, t);

    assert_eq!(first_index_of(terms.as_slice(), &key, compare), Some(1));
    assert_eq!(last_index_of(terms.as_slice(), &key, compare), Some(3));
}

#[test]
fn test_prefix_order_counts_characters() {
    // "é" is two bytes but one character; "z" sorts before it
    let terms = SortedTerms::from_unsorted(vec![
        Term::new("éa", 1.0).unwrap(),
        Term::new("éb", 1.0).unwrap(),
        Term::new("z", 1.0).unwrap(),
    ]);
    let key = Term::new("é", 0.0).unwrap();
    let order = PrefixOrder::for_prefix("é");
    assert_eq!(order.prefix_len(), 1);

    let compare = |k: &Term, t: &Term| order.compare(k, t);
    assert_eq!(first_index_of(terms.as_slice(), &key, compare), Some(1));
    assert_eq!(last_index_of(terms.as_slice(), &key, compare), Some(2));
}

#[test]
fn test_comparator_call_budget() {
    for n in [1usize, 2, 3, 7, 8, 100, 1000, 4096] {
        let items: Vec<usize> = (0..n).collect();
        let budget = 1 + (n as f64).log2().ceil() as usize;

        let mut calls = 0;
        first_index_of(&items, &(n / 2), |k: &usize, i: &usize| {
            calls += 1;
            k.cmp(i)
        });
        assert!(calls <= budget, "first_index_of: {} calls for n={}", calls, n);

        let mut calls = 0;
        last_index_of(&items, &(n / 3), |k: &usize, i: &usize| {
            calls += 1;
            k.cmp(i)
        });
        assert!(calls <= budget, "last_index_of: {} calls for n={}", calls, n);
    }
}
