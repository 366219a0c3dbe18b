// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie nodes, stored in an arena and addressed by index.
//!
//! A node owns its children through `children` (character → arena index).
//! There are no parent pointers: insertion remembers the path it walked
//! instead. Because nodes are only ever appended, a child's index is always
//! greater than its parent's, which makes the arena a topological order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arena index of the root.
pub(crate) const ROOT: usize = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Node {
    /// Character on the edge into this node; `None` only for the root.
    pub(crate) ch: Option<char>,
    /// Children ordered by character, so iteration is deterministic.
    pub(crate) children: BTreeMap<char, usize>,
    /// The complete word ending here, if any. `Some` marks a terminal node.
    pub(crate) word: Option<String>,
    /// Weight of `word`. Meaningless when `word` is `None`.
    pub(crate) weight: f64,
    /// Heaviest terminal weight anywhere in this subtree, this node included.
    pub(crate) subtree_max: f64,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            ch: None,
            children: BTreeMap::new(),
            word: None,
            weight: 0.0,
            subtree_max: 0.0,
        }
    }

    /// A fresh interior node on the path of a word weighing `bound`.
    pub(crate) fn branch(ch: char, bound: f64) -> Self {
        Self {
            ch: Some(ch),
            children: BTreeMap::new(),
            word: None,
            weight: 0.0,
            subtree_max: bound,
        }
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Has neither a word nor children (only an empty trie's root).
    pub(crate) fn is_vacant(&self) -> bool {
        self.word.is_none() && self.children.is_empty()
    }

    /// Recompute `subtree_max` from this node's own weight and its children's
    /// cached bounds.
    pub(crate) fn recompute_bound(&self, nodes: &[Node]) -> f64 {
        if self.is_vacant() {
            return 0.0;
        }
        let own = if self.is_terminal() {
            self.weight
        } else {
            f64::NEG_INFINITY
        };
        self.children
            .values()
            .map(|&child| nodes[child].subtree_max)
            .fold(own, f64::max)
    }
}
