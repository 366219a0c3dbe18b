//! Top-k prefix autocomplete over weighted dictionaries.
//!
//! Given words with non-negative weights, answer three questions fast:
//! the `k` heaviest words starting with a prefix, the single heaviest one, and
//! the weight of an exact word. Three interchangeable strategies answer them,
//! from the obvious to the clever.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│  search/             │────▶│  Autocompletor   │
//! │ (Term,      │     │  brute   (scan)      │     │  top_terms       │
//! │  WeightOrder│     │  sorted  (bounds)    │     │  top_matches     │
//! │  PrefixOrder│     │  trie/   (best-first)│     │  top_match       │
//! └─────────────┘     └──────────────────────┘     │  weight_of       │
//!        │                     │                   └──────────────────┘
//!        ▼                     ▼
//! ┌──────────────────────────────────────────────┐
//! │                  verify/                      │
//! │  (AutocompleteError, SortedTerms, contracts)  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Strategies
//!
//! | Strategy              | Build         | `top_matches`                 | Duplicates |
//! |-----------------------|---------------|-------------------------------|------------|
//! | `LinearScanner`       | O(n)          | O(n log k)                    | rejected   |
//! | `SortedArraySearcher` | O(n log n)    | O(log n + m log k)            | kept       |
//! | `WeightedTrie`        | O(total chars)| prunes subtrees below k-th    | last wins  |
//!
//! `m` is the number of words matching the prefix.
//!
//! # Ranking
//!
//! Every strategy ranks by descending weight, breaking ties by ascending word.
//! On a dictionary without duplicate words, all three return exactly the same
//! sequence for every query.
//!
//! # Usage
//!
//! ```
//! use heaviest::{Autocompletor, WeightedTrie};
//!
//! let trie = WeightedTrie::new(&["air", "bat", "bell", "boy"], &[3.0, 2.0, 4.0, 1.0]).unwrap();
//! assert_eq!(trie.top_matches("b", 2), vec!["bell", "bat"]);
//! assert_eq!(trie.top_match("a"), "air");
//! assert_eq!(trie.weight_of("boy"), 1.0);
//! ```

pub mod config;
pub mod search;
pub mod trie;
mod types;
mod utils;
pub mod verify;

pub mod testing;

pub use config::{AutocompleteConfig, Strategy};
pub use search::{
    batch_top_matches, first_index_of, last_index_of, Autocompletor, LinearScanner,
    SortedArraySearcher, TopK,
};
pub use trie::WeightedTrie;
#[cfg(feature = "parallel")]
pub use trie::SharedTrie;
pub use types::{PrefixOrder, Term, WeightOrder};
pub use utils::eq_ignore_case;
pub use verify::{AutocompleteError, SortedTerms};
