//! Utility functions for string comparison.

/// Compare two strings ignoring case, one character at a time.
///
/// Each side is lowercased with full Unicode case mapping, so `"STRASSE"`
/// equals `"strasse"` and `"Émile"` equals `"émile"`. No allocation.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
