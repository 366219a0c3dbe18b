// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query strategies: where the rubber meets the road.
//!
//! Three ways to answer the same three questions. The linear scanner is the
//! obviously-correct baseline, the sorted array narrows the scan with binary
//! search, and the trie (in `crate::trie`) prunes whole subtrees by their
//! best weight. All three implement `Autocompletor` and must agree, answer
//! for answer, on every dictionary.

pub mod bounds;
pub mod brute;
pub mod ranking;
pub mod sorted;

pub use bounds::{first_index_of, last_index_of};
pub use brute::LinearScanner;
pub use ranking::TopK;
pub use sorted::SortedArraySearcher;

use crate::types::Term;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The query contract every strategy fulfils.
///
/// Ranking is `WeightOrder`: descending weight, equal weights in ascending
/// word order. Queries never fail; "nothing matches" is an empty answer.
pub trait Autocompletor {
    /// The `k` best terms starting with `prefix`, best first.
    ///
    /// Fewer than `k` only when fewer words start with `prefix`. `k == 0`
    /// always yields an empty answer.
    fn top_terms(&self, prefix: &str, k: usize) -> Vec<Term>;

    /// Words of [`top_terms`](Self::top_terms).
    fn top_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        self.top_terms(prefix, k)
            .into_iter()
            .map(Term::into_word)
            .collect()
    }

    /// The single best word starting with `prefix`, or `""` if there is none.
    fn top_match(&self, prefix: &str) -> String {
        self.top_terms(prefix, 1)
            .into_iter()
            .next()
            .map(Term::into_word)
            .unwrap_or_default()
    }

    /// Weight of `term`, or `0.0` if it isn't in the dictionary.
    fn weight_of(&self, term: &str) -> f64;

    /// Number of dictionary entries held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Answer many prefixes at once, in input order.
///
/// Runs the queries across the rayon pool under the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn batch_top_matches<A, S>(engine: &A, prefixes: &[S], k: usize) -> Vec<Vec<String>>
where
    A: Autocompletor + Sync + ?Sized,
    S: AsRef<str> + Sync,
{
    prefixes
        .par_iter()
        .map(|prefix| engine.top_matches(prefix.as_ref(), k))
        .collect()
}

/// Answer many prefixes at once, in input order.
#[cfg(not(feature = "parallel"))]
pub fn batch_top_matches<A, S>(engine: &A, prefixes: &[S], k: usize) -> Vec<Vec<String>>
where
    A: Autocompletor + ?Sized,
    S: AsRef<str>,
{
    prefixes
        .iter()
        .map(|prefix| engine.top_matches(prefix.as_ref(), k))
        .collect()
}
