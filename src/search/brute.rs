// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear scan: the baseline everything else is checked against.
//!
//! Every query touches every term. O(n) per query, no index, nothing clever,
//! which is exactly what makes it trustworthy as a reference.
//!
//! Validation here is the strictest in the crate: on top of the length and
//! weight checks, duplicate words are rejected. The other strategies accept
//! duplicates (the sorted array keeps both, the trie keeps the last).

use super::ranking::TopK;
use super::Autocompletor;
use crate::types::{Term, WeightOrder};
use crate::utils::eq_ignore_case;
use crate::verify::{check_lengths, AutocompleteError};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Brute-force autocomplete over an unsorted term list.
#[derive(Debug, Clone, Default)]
pub struct LinearScanner {
    terms: Vec<Term>,
}

impl LinearScanner {
    /// Build from aligned word and weight lists.
    ///
    /// Fails on a length mismatch, a negative or NaN weight, or a duplicate word.
    pub fn new<S: AsRef<str>>(words: &[S], weights: &[f64]) -> Result<Self, AutocompleteError> {
        check_lengths(words.len(), weights.len())?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(words.len());
        let mut terms = Vec::with_capacity(words.len());
        for (word, &weight) in words.iter().zip(weights) {
            let word = word.as_ref();
            terms.push(Term::new(word, weight)?);
            if !seen.insert(word) {
                return Err(AutocompleteError::DuplicateTerm {
                    word: word.to_string(),
                });
            }
        }

        tracing::debug!(strategy = "brute", terms = terms.len(), "built linear scanner");
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl Autocompletor for LinearScanner {
    fn top_terms(&self, prefix: &str, k: usize) -> Vec<Term> {
        let mut top = TopK::new(k);
        if k > 0 {
            for term in self.terms.iter().filter(|t| t.matches(prefix)) {
                top.offer(term.word(), term.weight());
            }
        }
        let ranked = top.into_terms();
        crate::verify::contracts::check_ranked(&ranked, k);
        tracing::trace!(strategy = "brute", prefix, k, results = ranked.len(), "top_terms");
        ranked
    }

    fn top_match(&self, prefix: &str) -> String {
        let mut best: Option<&Term> = None;
        for term in self.terms.iter().filter(|t| t.matches(prefix)) {
            let better = match best {
                None => true,
                Some(current) => WeightOrder.compare(term, current) == Ordering::Less,
            };
            if better {
                best = Some(term);
            }
        }
        best.map(|t| t.word().to_string()).unwrap_or_default()
    }

    /// Case-insensitive: `"BELL"` finds `"bell"`. First match in input order wins.
    fn weight_of(&self, term: &str) -> f64 {
        self.terms
            .iter()
            .find(|t| eq_ignore_case(t.word(), term))
            .map_or(0.0, Term::weight)
    }

    fn len(&self) -> usize {
        self.terms.len()
    }
}
