// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: validated wrappers and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validated types** (`Term`, `SortedTerms`) and a single error enum that
//!    reject bad dictionaries at construction. If it built, it's valid.
//!
//! 2. **Runtime contracts** that panic in debug builds when an invariant breaks.
//!    Zero-cost in release, but catch bugs during development.

mod types;
pub mod contracts;

pub use types::*;
pub(crate) use types::{check_lengths, check_weight};
