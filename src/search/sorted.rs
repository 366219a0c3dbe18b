// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over a lexicographically sorted term array.
//!
//! Sorting by word puts every word sharing a prefix into one contiguous run.
//! Two binary searches under `PrefixOrder` find the run's first and last index
//! in O(log n); ranking then only scans the run instead of the whole array.
//!
//! ```text
//!   prefix "b", PrefixOrder(1):
//!
//!   [ air | bat | bell | boy | cat ]
//!           ^first      ^last
//! ```
//!
//! # Validation
//!
//! Weaker than `LinearScanner`: lengths and weights are checked, duplicate
//! words are not. Duplicates are kept side by side and both can appear in an
//! answer.

use super::bounds::{first_index_of, last_index_of};
use super::ranking::TopK;
use super::Autocompletor;
use crate::types::{PrefixOrder, Term, WeightOrder};
use crate::verify::{check_lengths, AutocompleteError, SortedTerms};
use std::ops::RangeInclusive;

/// Autocomplete backed by a sorted array and prefix-range binary search.
#[derive(Debug, Clone, Default)]
pub struct SortedArraySearcher {
    terms: SortedTerms,
}

impl SortedArraySearcher {
    /// Build from aligned word and weight lists, sorting by word.
    pub fn new<S: AsRef<str>>(words: &[S], weights: &[f64]) -> Result<Self, AutocompleteError> {
        check_lengths(words.len(), weights.len())?;

        let terms = words
            .iter()
            .zip(weights)
            .map(|(word, &weight)| Term::new(word.as_ref(), weight))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_sorted_terms(SortedTerms::from_unsorted(terms)))
    }

    /// Build from terms already known to be sorted.
    pub fn from_sorted_terms(terms: SortedTerms) -> Self {
        tracing::debug!(strategy = "binary-search", terms = terms.len(), "built sorted array");
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        self.terms.as_slice()
    }

    /// Inclusive index range of every term starting with `prefix`.
    pub fn prefix_range(&self, prefix: &str) -> Option<RangeInclusive<usize>> {
        let terms = self.terms.as_slice();
        let key = Term::probe(prefix);
        let order = PrefixOrder::for_prefix(prefix);
        let compare = |key: &Term, term: &Term| order.compare(key, term);

        let last = last_index_of(terms, &key, compare)?;
        let first = first_index_of(terms, &key, compare)?;
        Some(first..=last)
    }
}

impl Autocompletor for SortedArraySearcher {
    fn top_terms(&self, prefix: &str, k: usize) -> Vec<Term> {
        let mut top = TopK::new(k);
        if k > 0 {
            if let Some(range) = self.prefix_range(prefix) {
                for term in &self.terms.as_slice()[range] {
                    top.offer(term.word(), term.weight());
                }
            }
        }
        let ranked = top.into_terms();
        crate::verify::contracts::check_ranked(&ranked, k);
        tracing::trace!(strategy = "binary-search", prefix, k, results = ranked.len(), "top_terms");
        ranked
    }

    fn top_match(&self, prefix: &str) -> String {
        let Some(range) = self.prefix_range(prefix) else {
            return String::new();
        };
        self.terms.as_slice()[range]
            .iter()
            .min_by(|a, b| WeightOrder.compare(a, b))
            .map(|t| t.word().to_string())
            .unwrap_or_default()
    }

    /// Exact, case-sensitive lookup by binary search.
    fn weight_of(&self, term: &str) -> f64 {
        let terms = self.terms.as_slice();
        first_index_of(terms, term, |key: &str, t: &Term| key.cmp(t.word()))
            .map_or(0.0, |i| terms[i].weight())
    }

    fn len(&self) -> usize {
        self.terms.len()
    }
}
