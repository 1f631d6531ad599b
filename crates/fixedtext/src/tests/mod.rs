use alloc::{string::String, vec::Vec};

use crate::FixedTextBuffer;

mod concurrency;

/// Number of cases per quickcheck property.
pub(crate) fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Folds arbitrary text onto a three-letter alphabet (plus space) so that
/// searches and replacements actually find something.
pub(crate) fn squash(text: &str) -> String {
    text.chars()
        .map(|c| ['a', 'b', 'c', ' '][c as usize % 4])
        .collect()
}

pub(crate) fn filled(capacity: usize, text: &str) -> FixedTextBuffer {
    let mut buf = FixedTextBuffer::with_capacity(capacity);
    buf.append_text(text);
    buf
}

pub(crate) fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}
