use std::num::NonZeroUsize;

/// Reverses the code points of `contents`.
pub fn reverse_contents(contents: &str) -> String {
    contents.chars().rev().collect()
}

/// `contents` repeated `n` times, or `None` when the result cannot be allocated.
pub fn duplicate_contents(contents: &str, n: NonZeroUsize) -> Option<String> {
    if contents.is_empty() {
        return Some(String::new());
    }
    let total = contents.len().checked_mul(n.get())?;
    let mut duplicated = String::new();
    duplicated.try_reserve_exact(total).ok()?;
    for _ in 0..n.get() {
        duplicated.push_str(contents);
    }
    Some(duplicated)
}

/// Non-overlapping, leftmost-first replacement of every `needle`.
pub fn replace_string(contents: &str, needle: &str, new_string: &str) -> String {
    contents.replace(needle, new_string)
}
