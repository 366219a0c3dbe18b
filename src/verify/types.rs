// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors and wrappers that make invalid dictionaries unrepresentable.
//!
//! Every constructor in this crate validates its input once and hands back a
//! structure that stays valid forever after. When validation fails you get an
//! `AutocompleteError` saying exactly which word broke which rule, and nothing
//! is built. There is no half-constructed index to worry about.
//!
//! | Type          | What's Guaranteed                                 |
//! |---------------|---------------------------------------------------|
//! | `Term`        | weight is a non-negative number (see `types`)     |
//! | `SortedTerms` | terms are in lexicographic order by word          |

use crate::types::Term;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything that can go wrong while building or restoring an index.
///
/// Queries never fail: a prefix with no matches is an empty answer, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteError {
    /// Words and weights were supplied with different lengths.
    LengthMismatch { words: usize, weights: usize },
    /// A weight below zero.
    NegativeWeight { word: String, weight: f64 },
    /// A weight that is not a number at all.
    NanWeight { word: String },
    /// An infinite weight. Snapshots could not store it.
    InfiniteWeight { word: String },
    /// The same word appeared twice (enforced by `LinearScanner` only).
    DuplicateTerm { word: String },
    /// A term array claimed to be sorted but wasn't.
    UnsortedTerms { position: usize },
    /// A restored trie snapshot violates a structural invariant.
    CorruptTrie { node: usize, reason: &'static str },
    /// A configuration document could not be parsed.
    InvalidConfig { reason: String },
}

impl fmt::Display for AutocompleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutocompleteError::LengthMismatch { words, weights } => {
                write!(
                    f,
                    "terms and weights are not the same length ({} words, {} weights)",
                    words, weights
                )
            }
            AutocompleteError::NegativeWeight { word, weight } => {
                write!(f, "negative weight {} for '{}'", weight, word)
            }
            AutocompleteError::NanWeight { word } => {
                write!(f, "weight for '{}' is NaN", word)
            }
            AutocompleteError::InfiniteWeight { word } => {
                write!(f, "weight for '{}' is infinite", word)
            }
            AutocompleteError::DuplicateTerm { word } => {
                write!(f, "duplicate input term '{}'", word)
            }
            AutocompleteError::UnsortedTerms { position } => {
                write!(f, "terms not sorted at position {}", position)
            }
            AutocompleteError::CorruptTrie { node, reason } => {
                write!(f, "trie node {} is corrupt: {}", node, reason)
            }
            AutocompleteError::InvalidConfig { reason } => {
                write!(f, "invalid autocomplete config: {}", reason)
            }
        }
    }
}

impl std::error::Error for AutocompleteError {}

/// Reject dictionaries whose two halves don't line up.
pub(crate) fn check_lengths(words: usize, weights: usize) -> Result<(), AutocompleteError> {
    if words != weights {
        return Err(AutocompleteError::LengthMismatch { words, weights });
    }
    Ok(())
}

/// Reject weights that can't be ranked or stored: NaN, negatives and infinities.
///
/// Returns the weight with `-0.0` folded into `0.0`, so `total_cmp` and `==`
/// agree on every weight the crate holds.
pub(crate) fn check_weight(word: &str, weight: f64) -> Result<f64, AutocompleteError> {
    if weight.is_nan() {
        return Err(AutocompleteError::NanWeight {
            word: word.to_string(),
        });
    }
    if weight < 0.0 {
        return Err(AutocompleteError::NegativeWeight {
            word: word.to_string(),
            weight,
        });
    }
    if weight.is_infinite() {
        return Err(AutocompleteError::InfiniteWeight {
            word: word.to_string(),
        });
    }
    Ok(weight + 0.0)
}

/// Terms in lexicographic order by word.
///
/// Sortedness is what lets a binary search find every word sharing a prefix:
/// they all sit in one contiguous run. Break the order and the run splits,
/// and the searcher silently misses matches.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `terms[i] <= terms[j]` (by word, then weight)
#[derive(Debug, Clone, Default)]
pub struct SortedTerms {
    terms: Vec<Term>,
}

impl SortedTerms {
    /// Sort the terms. Uses a parallel sort under the `parallel` feature.
    pub fn from_unsorted(mut terms: Vec<Term>) -> Self {
        #[cfg(feature = "parallel")]
        terms.par_sort_unstable();
        #[cfg(not(feature = "parallel"))]
        terms.sort_unstable();

        crate::verify::contracts::check_terms_sorted(&terms);
        Self { terms }
    }

    /// Adopt terms that are already sorted, verifying the claim.
    pub fn from_sorted(terms: Vec<Term>) -> Result<Self, AutocompleteError> {
        if let Some(position) = (1..terms.len()).find(|&i| terms[i - 1] > terms[i]) {
            return Err(AutocompleteError::UnsortedTerms { position });
        }
        Ok(Self { terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn as_slice(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }
}
