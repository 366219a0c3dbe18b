// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a weighted dictionary.
//!
//! A `Term` is a word and the weight that ranks it. Three orders over terms
//! drive everything else in the crate:
//!
//! | Order         | Compares                                  | Used by                  |
//! |---------------|-------------------------------------------|--------------------------|
//! | `Ord` on Term | word, lexicographically (then weight)     | sorting the array        |
//! | `WeightOrder` | weight descending, then word ascending    | ranking answers          |
//! | `PrefixOrder` | first `len` characters only               | finding a prefix's run   |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Term**: `weight >= 0` and not NaN. Checked by `Term::new` and again when
//!   deserializing, so there is no way to hold a `Term` that violates it.
//!
//! - **PrefixOrder**: counts Unicode scalar values, not bytes. `"é"` is one
//!   character, and a prefix of length 1 must not split it.

use crate::verify::{check_weight, AutocompleteError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A dictionary word with its non-negative weight.
///
/// Immutable once built. Equality and ordering are by word first, then by
/// weight (compared with `f64::total_cmp`), so the order is total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTerm")]
pub struct Term {
    word: String,
    weight: f64,
}

/// Unvalidated wire shape of a `Term`.
#[derive(Deserialize)]
struct RawTerm {
    word: String,
    weight: f64,
}

impl TryFrom<RawTerm> for Term {
    type Error = AutocompleteError;

    fn try_from(raw: RawTerm) -> Result<Self, Self::Error> {
        Term::new(raw.word, raw.weight)
    }
}

impl Term {
    /// Create a term, rejecting negative, NaN and infinite weights.
    ///
    /// A weight of `-0.0` is stored as `0.0`.
    pub fn new(word: impl Into<String>, weight: f64) -> Result<Self, AutocompleteError> {
        let word = word.into();
        let weight = check_weight(&word, weight)?;
        Ok(Self { word, weight })
    }

    /// Build a term from parts the caller has already validated.
    pub(crate) fn from_parts(word: String, weight: f64) -> Self {
        debug_assert!(weight >= 0.0, "Contract violation: weight {} < 0", weight);
        Self { word, weight }
    }

    /// A zero-weight search key for binary searching by word.
    pub(crate) fn probe(word: &str) -> Self {
        Self {
            word: word.to_string(),
            weight: 0.0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn into_word(self) -> String {
        self.word
    }

    /// Does this term's word start with `prefix`?
    pub fn matches(&self, prefix: &str) -> bool {
        self.word.starts_with(prefix)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word
            .cmp(&other.word)
            .then_with(|| self.weight.total_cmp(&other.weight))
    }
}

/// Ranking order: heavier terms first, ties broken by word.
///
/// `compare(a, b) == Less` means `a` ranks ahead of `b`. Sorting a slice with
/// this order puts the best answer at index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightOrder;

impl WeightOrder {
    pub fn compare(&self, a: &Term, b: &Term) -> Ordering {
        rank(a.weight, &a.word, b.weight, &b.word)
    }
}

/// Rank two (weight, word) pairs without building terms.
#[inline]
pub(crate) fn rank(a_weight: f64, a_word: &str, b_weight: f64, b_word: &str) -> Ordering {
    b_weight
        .total_cmp(&a_weight)
        .then_with(|| a_word.cmp(b_word))
}

/// Prefix-equivalence order of length `len`.
///
/// Two terms are equal under this order when their first `len` characters
/// match; otherwise they compare lexicographically on those characters. Since
/// truncation preserves lexicographic order, an array sorted by word is also
/// sorted under every `PrefixOrder`, and each prefix owns one contiguous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixOrder {
    len: usize,
}

impl PrefixOrder {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// The order that groups every word starting with `prefix`.
    pub fn for_prefix(prefix: &str) -> Self {
        Self::new(prefix.chars().count())
    }

    pub fn prefix_len(&self) -> usize {
        self.len
    }

    pub fn compare(&self, a: &Term, b: &Term) -> Ordering {
        a.word
            .chars()
            .take(self.len)
            .cmp(b.word.chars().take(self.len))
    }
}
