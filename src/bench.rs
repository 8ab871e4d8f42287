//! Baseline uniqueness checks used by the criterion comparison.

use std::collections::HashSet;

/// `HashSet` insert probe; the first rejected insert is a duplicate.
pub fn has_unique_chars_hashset(s: &str) -> bool {
    let mut seen = HashSet::with_capacity(s.len());
    for ch in s.chars() {
        if !seen.insert(ch) {
            return false;
        }
    }
    true
}

/// Sort + adjacent-compare; buffers the characters, so O(n) space.
pub fn has_unique_chars_sort(s: &str) -> bool {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    !chars.windows(2).any(|w| w[0] == w[1])
}
