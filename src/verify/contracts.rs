// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index invariants.
//!
//! Debug-mode assertions that catch a broken invariant at the moment it
//! breaks, instead of three queries later when a result quietly goes missing.
//! They compile to nothing in release builds.
//!
//! | Contract Function     | Invariant                                          |
//! |-----------------------|----------------------------------------------------|
//! | `check_terms_sorted`  | sorted-array terms are in lexicographic order      |
//! | `check_ranked`        | at most `k` results, best first                    |
//! | `check_node_bound`    | `subtree_max` = max(own weight, children's bounds) |

use crate::trie::node::Node;
use crate::types::{Term, WeightOrder};
use std::cmp::Ordering;

/// Check that terms are sorted by word.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_terms_sorted(terms: &[Term]) {
    for i in 1..terms.len() {
        debug_assert!(
            terms[i - 1] <= terms[i],
            "Contract violation: terms[{}] ('{}') > terms[{}] ('{}')",
            i - 1,
            terms[i - 1].word(),
            i,
            terms[i].word()
        );
    }
}

/// Check that a ranked answer holds at most `k` terms in descending rank.
///
/// # Panics (debug builds only)
/// Panics if the answer is too long or any adjacent pair ranks backwards.
#[inline]
pub fn check_ranked(terms: &[Term], k: usize) {
    debug_assert!(
        terms.len() <= k,
        "Contract violation: {} results returned for k = {}",
        terms.len(),
        k
    );
    for i in 1..terms.len() {
        debug_assert!(
            WeightOrder.compare(&terms[i - 1], &terms[i]) != Ordering::Greater,
            "Contract violation: results[{}] ('{}' {}) ranks below results[{}] ('{}' {})",
            i - 1,
            terms[i - 1].word(),
            terms[i - 1].weight(),
            i,
            terms[i].word(),
            terms[i].weight()
        );
    }
}

/// Check that one trie node's cached bound is exact.
///
/// Pruning relies on the bound never being too low; `top_match` relies on it
/// never being too high either.
///
/// # Panics (debug builds only)
/// Panics if `subtree_max` differs from the recomputed maximum.
#[inline]
pub(crate) fn check_node_bound(nodes: &[Node], idx: usize) {
    if cfg!(debug_assertions) {
        let expected = nodes[idx].recompute_bound(nodes);
        debug_assert!(
            expected == nodes[idx].subtree_max,
            "Contract violation: node {} has subtree_max {} but its subtree's max is {}",
            idx,
            nodes[idx].subtree_max,
            expected
        );
    }
}
