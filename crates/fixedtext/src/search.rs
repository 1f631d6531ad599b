use crate::{
    FixedTextBuffer,
    view::{TextSource, TextView},
};

/// Whether `pattern` occurs in `text` starting at `at`.
fn matches_at(text: &[char], at: usize, pattern: &TextView<'_>) -> bool {
    at.checked_add(pattern.len())
        .and_then(|end| text.get(at..end))
        .is_some_and(|window| window.iter().copied().eq(pattern.chars()))
}

/// Naive forward search: first match starting at or after `start`.
pub(crate) fn find_forward(text: &[char], pattern: &TextView<'_>, start: usize) -> Option<usize> {
    let m = pattern.len();
    if m > text.len() {
        return None;
    }
    (start..=text.len() - m).find(|&i| matches_at(text, i, pattern))
}

/// Naive backward search: last match lying entirely within `[0, end]`.
fn find_backward(text: &[char], pattern: &TextView<'_>, end: usize) -> Option<usize> {
    let m = pattern.len();
    let limit = end.saturating_add(1).min(text.len());
    if m > limit {
        return None;
    }
    (0..=limit - m).rev().find(|&i| matches_at(text, i, pattern))
}

impl FixedTextBuffer {
    /// Whether the content begins with `pattern`.
    pub fn starts_with<P: TextSource + ?Sized>(&self, pattern: &P) -> bool {
        matches_at(self.as_chars(), 0, &pattern.text_view())
    }

    /// Whether the content ends with `pattern`.
    pub fn ends_with<P: TextSource + ?Sized>(&self, pattern: &P) -> bool {
        let pattern = pattern.text_view();
        self.len()
            .checked_sub(pattern.len())
            .is_some_and(|at| matches_at(self.as_chars(), at, &pattern))
    }

    /// Index of the first occurrence of `pattern`.
    pub fn index_of<P: TextSource + ?Sized>(&self, pattern: &P) -> Option<usize> {
        self.index_of_from(pattern, 0)
    }

    /// Index of the first occurrence of `pattern` at or after `start`.
    ///
    /// An empty pattern is found at `start` itself, as long as `start` does
    /// not lie past the content.
    pub fn index_of_from<P: TextSource + ?Sized>(&self, pattern: &P, start: usize) -> Option<usize> {
        let pattern = pattern.text_view();
        if start > self.len() {
            return None;
        }
        if pattern.is_empty() {
            return Some(start);
        }
        find_forward(self.as_chars(), &pattern, start)
    }

    /// Index of the last occurrence of `pattern`.
    ///
    /// An empty pattern reports the last index (0 for an empty buffer).
    pub fn last_index_of<P: TextSource + ?Sized>(&self, pattern: &P) -> Option<usize> {
        self.last_index_of_from(pattern, self.len().saturating_sub(1))
    }

    /// Index of the last occurrence of `pattern` that ends at or before
    /// `start`, scanning backward.
    pub fn last_index_of_from<P: TextSource + ?Sized>(&self, pattern: &P, start: usize) -> Option<usize> {
        let pattern = pattern.text_view();
        if pattern.is_empty() {
            return Some(self.len().saturating_sub(1));
        }
        find_backward(self.as_chars(), &pattern, start)
    }

    /// Whether `pattern` occurs anywhere. The empty pattern always does.
    pub fn contains<P: TextSource + ?Sized>(&self, pattern: &P) -> bool {
        let pattern = pattern.text_view();
        pattern.is_empty() || find_forward(self.as_chars(), &pattern, 0).is_some()
    }
}
