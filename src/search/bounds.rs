// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First/last index of an equivalence class in a sorted slice.
//!
//! The classic place to get an off-by-one wrong. Both searches work on a
//! half-open window `[lo, hi)` so there's no `mid - 1` underflow when `mid` is
//! zero, and both keep narrowing after a hit: `first_index_of` keeps looking
//! left for an earlier tie, `last_index_of` keeps looking right.
//!
//! # Complexity
//!
//! Each loop iteration makes exactly one comparator call and at least halves
//! the window, so a slice of `n` items costs at most `floor(log2 n) + 1` calls,
//! within the `1 + ceil(log2 n)` budget. No allocation.
//!
//! # Precondition
//!
//! `items` must be sorted consistently with `compare`: every item comparing
//! `Greater` than the key (key > item) precedes every item comparing `Equal`,
//! which precede every item comparing `Less`. Violate that and the answer is
//! unspecified (but still in bounds).

use std::cmp::Ordering;

/// Smallest index `i` with `compare(key, &items[i]) == Equal`, if any.
pub fn first_index_of<T, K, F>(items: &[T], key: &K, mut compare: F) -> Option<usize>
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    let mut lo = 0usize;
    let mut hi = items.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare(key, &items[mid]) {
            Ordering::Equal => {
                found = Some(mid);
                hi = mid;
            }
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }

    found
}

/// Largest index `i` with `compare(key, &items[i]) == Equal`, if any.
pub fn last_index_of<T, K, F>(items: &[T], key: &K, mut compare: F) -> Option<usize>
where
    K: ?Sized,
    F: FnMut(&K, &T) -> Ordering,
{
    let mut lo = 0usize;
    let mut hi = items.len();
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare(key, &items[mid]) {
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            }
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }

    found
}
