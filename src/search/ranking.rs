// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-k selection.
//!
//! Keep the `k` best candidates seen so far in a heap whose top is the
//! *worst* of them. A new candidate either loses to that worst entry (cheap
//! rejection, no allocation) or evicts it. Ranking follows `WeightOrder`:
//! heavier first, equal weights broken by word, so the answer is the same no
//! matter what order candidates arrive in.

use crate::types::{rank, Term};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Upper bound on up-front heap allocation; callers may ask for huge `k`.
const MAX_PREALLOC: usize = 64;

/// A candidate ordered so that the worst-ranked one is the heap maximum.
#[derive(Debug)]
struct Ranked {
    weight: f64,
    word: String,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Better rank is Less, so BinaryHeap::peek yields the worst
        rank(self.weight, &self.word, other.weight, &other.word)
    }
}

/// Collects the `k` best-ranked terms.
#[derive(Debug)]
pub struct TopK {
    k: usize,
    heap: BinaryHeap<Ranked>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.min(MAX_PREALLOC)),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.k
    }

    /// Weight of the worst kept candidate, once `k` are held.
    pub fn floor(&self) -> Option<f64> {
        if self.is_full() {
            self.heap.peek().map(|worst| worst.weight)
        } else {
            None
        }
    }

    /// Could anything weighing at most `bound` still make the cut?
    ///
    /// Equal weights can: a lexicographically smaller word with the same
    /// weight outranks the current worst entry.
    pub fn admits_bound(&self, bound: f64) -> bool {
        match self.floor() {
            Some(floor) => bound >= floor,
            None => self.k > 0,
        }
    }

    /// Offer a candidate. Returns whether it was kept.
    pub fn offer(&mut self, word: &str, weight: f64) -> bool {
        if self.k == 0 {
            return false;
        }
        if self.heap.len() < self.k {
            self.heap.push(Ranked {
                weight,
                word: word.to_string(),
            });
            return true;
        }
        let beats_worst = match self.heap.peek() {
            Some(worst) => rank(weight, word, worst.weight, &worst.word) == Ordering::Less,
            None => false,
        };
        if beats_worst {
            self.heap.pop();
            self.heap.push(Ranked {
                weight,
                word: word.to_string(),
            });
        }
        beats_worst
    }

    /// Drain into terms, best first.
    pub fn into_terms(self) -> Vec<Term> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| Term::from_parts(r.word, r.weight))
            .collect()
    }
}
