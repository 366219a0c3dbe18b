// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted trie: prefix search that skips everything too light to matter.
//!
//! Every node caches `subtree_max`, the heaviest word anywhere below it. That
//! one number turns top-k into a best-first search: always expand the
//! frontier node with the largest bound, and stop as soon as the next bound
//! can't beat the k-th best word already found.
//!
//! ```text
//!   {air:3, bat:2, bell:4, boy:1}
//!
//!               (root) 4
//!              /        \
//!          a 3            b 4
//!           |          /   |   \
//!          i 3      a 2   e 4   o 1
//!           |        |     |     |
//!          r 3*     t 2*  l 4   y 1*
//!                          |
//!                         l 4*          * = terminal
//! ```
//!
//! `top_matches("b", 1)` walks to `b`, pops `e` (bound 4) before `a` (2) or
//! `o` (1), reaches `bell`, and stops: nothing left in the frontier weighs
//! more than 4.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BOUND_EXACT**: `subtree_max` = max(own weight if terminal, children's
//!    `subtree_max`). Holds after every insert, including re-inserting a word
//!    with a *lower* weight, which walks the path back up and tightens it.
//! 2. **TREE**: every non-root node has exactly one parent, and its arena
//!    index is greater than its parent's.
//! 3. **WORD_MATCHES_PATH**: a terminal's `word` spells its root-to-node path.
//!
//! Restored snapshots are checked against all three before use. Weights are
//! finite and never `-0.0`, so `==` on bounds agrees with the ranking order.

pub(crate) mod node;

#[cfg(feature = "parallel")]
mod shared;

#[cfg(feature = "parallel")]
pub use shared::SharedTrie;

use crate::search::{Autocompletor, TopK};
use crate::types::Term;
use crate::verify::contracts::{check_node_bound, check_ranked};
use crate::verify::{check_lengths, check_weight, AutocompleteError};
use node::{Node, ROOT};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Prefix tree with per-subtree maximum weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TrieSnapshot")]
pub struct WeightedTrie {
    nodes: Vec<Node>,
    words: usize,
}

/// Wire shape of a trie before validation. The word count is recomputed.
#[derive(Deserialize)]
struct TrieSnapshot {
    nodes: Vec<Node>,
}

impl TryFrom<TrieSnapshot> for WeightedTrie {
    type Error = AutocompleteError;

    fn try_from(snapshot: TrieSnapshot) -> Result<Self, Self::Error> {
        Self::from_nodes(snapshot.nodes)
    }
}

impl Default for WeightedTrie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::root()],
            words: 0,
        }
    }
}

/// A node waiting in the best-first frontier, ordered by its bound.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    bound: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl WeightedTrie {
    /// Build from aligned word and weight lists, inserting in input order.
    ///
    /// A repeated word keeps the weight of its last occurrence.
    pub fn new<S: AsRef<str>>(words: &[S], weights: &[f64]) -> Result<Self, AutocompleteError> {
        check_lengths(words.len(), weights.len())?;

        let mut trie = Self::default();
        for (word, &weight) in words.iter().zip(weights) {
            trie.insert(word.as_ref(), weight)?;
        }

        tracing::debug!(
            strategy = "trie",
            terms = trie.words,
            nodes = trie.nodes.len(),
            "built weighted trie"
        );
        Ok(trie)
    }

    /// Add `word`, or update its weight if it's already present.
    ///
    /// Bounds along the path are raised on the way down. If the word existed
    /// with a heavier weight, they are recomputed on the way back up so they
    /// stay exact.
    pub fn insert(&mut self, word: &str, weight: f64) -> Result<(), AutocompleteError> {
        let weight = check_weight(word, weight)?;

        let mut path = Vec::with_capacity(word.len());
        let mut idx = ROOT;
        for ch in word.chars() {
            path.push(idx);
            let node = &mut self.nodes[idx];
            node.subtree_max = node.subtree_max.max(weight);
            let existing = node.children.get(&ch).copied();
            idx = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes[idx].children.insert(ch, child);
                    self.nodes.push(Node::branch(ch, weight));
                    child
                }
            };
        }

        let node = &mut self.nodes[idx];
        let previous = if node.is_terminal() {
            Some(node.weight)
        } else {
            node.word = Some(word.to_string());
            self.words += 1;
            None
        };
        node.weight = weight;
        node.subtree_max = node.subtree_max.max(weight);

        if previous.is_some_and(|old| weight < old) {
            self.tighten(idx, &path);
        }

        if cfg!(debug_assertions) {
            for &i in path.iter().chain(std::iter::once(&idx)) {
                check_node_bound(&self.nodes, i);
            }
        }
        Ok(())
    }

    /// Recompute bounds from `terminal` up to the root, stopping at the first
    /// node whose bound doesn't change.
    fn tighten(&mut self, terminal: usize, path: &[usize]) {
        for &idx in std::iter::once(&terminal).chain(path.iter().rev()) {
            let bound = self.nodes[idx].recompute_bound(&self.nodes);
            if bound == self.nodes[idx].subtree_max {
                break;
            }
            self.nodes[idx].subtree_max = bound;
        }
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Heaviest weight in the dictionary, `None` when empty.
    pub fn max_weight(&self) -> Option<f64> {
        if self.words == 0 {
            None
        } else {
            Some(self.nodes[ROOT].subtree_max)
        }
    }

    /// Node reached by spelling `prefix` from the root.
    fn locate(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(ROOT, |idx, ch| self.nodes[idx].children.get(&ch).copied())
    }

    /// Best-first top-k. Also returns how many nodes were expanded.
    fn best_first(&self, prefix: &str, k: usize) -> (Vec<Term>, usize) {
        if k == 0 {
            return (Vec::new(), 0);
        }
        let Some(start) = self.locate(prefix) else {
            return (Vec::new(), 0);
        };

        let mut top = TopK::new(k);
        let mut frontier = BinaryHeap::new();
        frontier.push(Frontier {
            bound: self.nodes[start].subtree_max,
            node: start,
        });

        let mut expanded = 0usize;
        while let Some(Frontier { bound, node }) = frontier.pop() {
            // Every remaining bound is <= this one
            if !top.admits_bound(bound) {
                break;
            }
            expanded += 1;

            let current = &self.nodes[node];
            if let Some(word) = &current.word {
                top.offer(word, current.weight);
            }
            for &child in current.children.values() {
                let child_bound = self.nodes[child].subtree_max;
                if top.admits_bound(child_bound) {
                    frontier.push(Frontier {
                        bound: child_bound,
                        node: child,
                    });
                }
            }
        }

        (top.into_terms(), expanded)
    }

    /// Rebuild a trie from raw nodes, checking every structural invariant.
    fn from_nodes(mut nodes: Vec<Node>) -> Result<Self, AutocompleteError> {
        let corrupt = |node: usize, reason: &'static str| AutocompleteError::CorruptTrie { node, reason };

        let Some(root) = nodes.first() else {
            return Err(corrupt(ROOT, "missing root"));
        };
        if root.ch.is_some() {
            return Err(corrupt(ROOT, "root carries an edge character"));
        }

        for node in &mut nodes {
            node.weight += 0.0;
            node.subtree_max += 0.0;
        }

        let mut reached = vec![false; nodes.len()];
        reached[ROOT] = true;
        let mut words = 0usize;
        let mut stack = vec![(ROOT, String::new())];

        while let Some((idx, path)) = stack.pop() {
            let node = &nodes[idx];
            if idx != ROOT && node.is_vacant() {
                return Err(corrupt(idx, "dead branch with no words"));
            }
            if let Some(word) = &node.word {
                if *word != path {
                    return Err(corrupt(idx, "word does not spell its path"));
                }
                check_weight(word, node.weight)?;
                words += 1;
            }
            for (&ch, &child) in &node.children {
                if child <= idx || child >= nodes.len() {
                    return Err(corrupt(idx, "child index out of order"));
                }
                if reached[child] {
                    return Err(corrupt(child, "node has two parents"));
                }
                if nodes[child].ch != Some(ch) {
                    return Err(corrupt(child, "edge character mismatch"));
                }
                reached[child] = true;
                let mut child_path = path.clone();
                child_path.push(ch);
                stack.push((child, child_path));
            }
        }

        if let Some(orphan) = reached.iter().position(|&r| !r) {
            return Err(corrupt(orphan, "unreachable node"));
        }
        if let Some(stale) = (0..nodes.len()).find(|&i| nodes[i].recompute_bound(&nodes) != nodes[i].subtree_max) {
            return Err(corrupt(stale, "stale subtree bound"));
        }

        tracing::debug!(terms = words, nodes = nodes.len(), "restored weighted trie");
        Ok(Self { nodes, words })
    }
}

impl Autocompletor for WeightedTrie {
    fn top_terms(&self, prefix: &str, k: usize) -> Vec<Term> {
        let (ranked, expanded) = self.best_first(prefix, k);
        check_ranked(&ranked, k);
        tracing::trace!(
            strategy = "trie",
            prefix,
            k,
            results = ranked.len(),
            expanded,
            "top_terms"
        );
        ranked
    }

    /// Follow the bound down: at each node, stop if its own word carries the
    /// bound, else step into the first child (by character) that carries it.
    /// Lands on the heaviest word, lexicographically smallest among ties.
    fn top_match(&self, prefix: &str) -> String {
        let Some(mut idx) = self.locate(prefix) else {
            return String::new();
        };

        loop {
            let node = &self.nodes[idx];
            if node.is_vacant() {
                return String::new();
            }
            if let Some(word) = &node.word {
                if node.weight == node.subtree_max {
                    return word.clone();
                }
            }
            let next = node
                .children
                .values()
                .copied()
                .find(|&child| self.nodes[child].subtree_max == node.subtree_max);
            match next {
                Some(child) => idx = child,
                None => break,
            }
        }

        // Only reachable if a bound is out of date
        tracing::warn!(prefix, "subtree bound out of date; falling back to best-first search");
        self.best_first(prefix, 1)
            .0
            .into_iter()
            .next()
            .map(Term::into_word)
            .unwrap_or_default()
    }

    fn weight_of(&self, term: &str) -> f64 {
        self.locate(term)
            .map(|idx| &self.nodes[idx])
            .filter(|node| node.is_terminal())
            .map_or(0.0, |node| node.weight)
    }

    fn len(&self) -> usize {
        self.words
    }
}
