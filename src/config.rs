// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Choosing a strategy at runtime.
//!
//! ```json
//! { "strategy": "binary-search", "defaultLimit": 5 }
//! ```
//!
//! Every field is optional. An empty document gives the trie and a limit of 10.

use crate::search::{Autocompletor, LinearScanner, SortedArraySearcher};
use crate::trie::WeightedTrie;
use crate::verify::AutocompleteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which index answers the queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// `LinearScanner`
    Brute,
    /// `SortedArraySearcher`
    BinarySearch,
    /// `WeightedTrie`
    #[default]
    Trie,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Brute, Strategy::BinarySearch, Strategy::Trie];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Brute => "brute",
            Strategy::BinarySearch => "binary-search",
            Strategy::Trie => "trie",
        }
    }

    /// Build this strategy's index over the given dictionary.
    pub fn build<S: AsRef<str>>(
        self,
        words: &[S],
        weights: &[f64],
    ) -> Result<Box<dyn Autocompletor + Send + Sync>, AutocompleteError> {
        Ok(match self {
            Strategy::Brute => Box::new(LinearScanner::new(words, weights)?),
            Strategy::BinarySearch => Box::new(SortedArraySearcher::new(words, weights)?),
            Strategy::Trie => Box::new(WeightedTrie::new(words, weights)?),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = AutocompleteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| AutocompleteError::InvalidConfig {
                reason: format!("unknown strategy '{}' (expected brute, binary-search or trie)", s),
            })
    }
}

fn default_limit() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteConfig {
    #[serde(default)]
    pub strategy: Strategy,
    /// `k` used by [`suggest`](Self::suggest).
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            default_limit: default_limit(),
        }
    }
}

impl AutocompleteConfig {
    pub fn from_json(json: &str) -> Result<Self, AutocompleteError> {
        serde_json::from_str(json).map_err(|e| AutocompleteError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    pub fn build<S: AsRef<str>>(
        &self,
        words: &[S],
        weights: &[f64],
    ) -> Result<Box<dyn Autocompletor + Send + Sync>, AutocompleteError> {
        self.strategy.build(words, weights)
    }

    /// `top_matches` with the configured limit.
    pub fn suggest<A: Autocompletor + ?Sized>(&self, engine: &A, prefix: &str) -> Vec<String> {
        engine.top_matches(prefix, self.default_limit)
    }
}
