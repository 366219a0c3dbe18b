// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A trie that many threads can query while others insert.
//!
//! Inserts take the write lock, queries take a read lock for their whole
//! duration, so every answer is computed against one consistent trie.

use super::WeightedTrie;
use crate::search::Autocompletor;
use crate::types::Term;
use crate::verify::AutocompleteError;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cheaply cloneable handle to a read-write-locked `WeightedTrie`.
#[derive(Debug, Clone, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<WeightedTrie>>,
}

impl SharedTrie {
    pub fn new(trie: WeightedTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Insert or update a word under the write lock.
    pub fn insert(&self, word: &str, weight: f64) -> Result<(), AutocompleteError> {
        self.inner.write().insert(word, weight)
    }

    /// Run `f` against the trie under a single read lock.
    pub fn read<R>(&self, f: impl FnOnce(&WeightedTrie) -> R) -> R {
        f(&self.inner.read())
    }

    /// Clone of the current trie.
    pub fn snapshot(&self) -> WeightedTrie {
        self.inner.read().clone()
    }
}

impl From<WeightedTrie> for SharedTrie {
    fn from(trie: WeightedTrie) -> Self {
        Self::new(trie)
    }
}

impl Autocompletor for SharedTrie {
    fn top_terms(&self, prefix: &str, k: usize) -> Vec<Term> {
        self.inner.read().top_terms(prefix, k)
    }

    fn top_match(&self, prefix: &str) -> String {
        self.inner.read().top_match(prefix)
    }

    fn weight_of(&self, term: &str) -> f64 {
        self.inner.read().weight_of(term)
    }

    fn len(&self) -> usize {
        self.inner.read().len()
    }
}
