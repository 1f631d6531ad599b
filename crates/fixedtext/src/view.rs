//! Borrowed, read-only text views.
//!
//! Search and comparison routines on [`FixedTextBuffer`] take their pattern
//! as any [`TextSource`]. The source is turned into a [`TextView`] once, and
//! the algorithm only ever asks the view for its length and for the char at
//! an index. That way a `&str` literal and another buffer run through exactly
//! the same code, and neither is copied.
//!
//! [`FixedTextBuffer`]: crate::FixedTextBuffer
use alloc::string::String;

/// A borrowed view over text with indexed char access.
#[derive(Debug, Clone, Copy)]
pub enum TextView<'a> {
    /// A native string slice.
    ///
    /// `ascii` is computed once at construction; when it holds, byte offsets
    /// and char indices coincide and indexing is O(1). Otherwise
    /// [`char_at`](TextView::char_at) walks the string and costs O(index);
    /// sequential reads should go through [`chars`](TextView::chars).
    Str {
        /// The borrowed text.
        text: &'a str,
        /// Number of chars in `text`.
        len: usize,
        /// Whether `text` is pure ASCII.
        ascii: bool,
    },
    /// A slice of chars, typically the valid prefix of a buffer.
    Chars(&'a [char]),
}

impl<'a> TextView<'a> {
    /// Builds a view over a string slice.
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        let ascii = text.is_ascii();
        let len = if ascii { text.len() } else { text.chars().count() };
        TextView::Str { text, len, ascii }
    }

    /// Builds a view over a slice of chars.
    #[must_use]
    pub const fn from_chars(chars: &'a [char]) -> Self {
        TextView::Chars(chars)
    }

    /// Number of chars in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TextView::Str { len, .. } => *len,
            TextView::Chars(chars) => chars.len(),
        }
    }

    /// Whether the view holds no chars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the char at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn char_at(&self, index: usize) -> char {
        match self {
            TextView::Str {
                text, ascii: true, ..
            } => char::from(text.as_bytes()[index]),
            TextView::Str { text, len, .. } => {
                assert!(index < *len, "index {index} out of range for view of length {len}");
                // Non-ASCII text has no O(1) char indexing; walk it.
                text.chars().nth(index).unwrap_or_default()
            }
            TextView::Chars(chars) => chars[index],
        }
    }

    /// Iterates over the chars of the view in order, in a single pass.
    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        let (text, chars): (&'a str, &'a [char]) = match *self {
            TextView::Str { text, .. } => (text, &[]),
            TextView::Chars(chars) => ("", chars),
        };
        text.chars().chain(chars.iter().copied())
    }

    /// Char-wise equality with another view.
    #[must_use]
    pub fn content_eq(&self, other: &TextView<'_>) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

/// Anything that can be looked at through a [`TextView`].
pub trait TextSource {
    /// Borrows `self` as a view.
    fn text_view(&self) -> TextView<'_>;
}

impl TextSource for str {
    fn text_view(&self) -> TextView<'_> {
        TextView::from_text(self)
    }
}

impl TextSource for String {
    fn text_view(&self) -> TextView<'_> {
        TextView::from_text(self)
    }
}

impl TextSource for [char] {
    fn text_view(&self) -> TextView<'_> {
        TextView::from_chars(self)
    }
}

impl<const N: usize> TextSource for [char; N] {
    fn text_view(&self) -> TextView<'_> {
        TextView::from_chars(self)
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn text_view(&self) -> TextView<'_> {
        (**self).text_view()
    }
}
