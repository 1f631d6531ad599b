use alloc::{boxed::Box, vec};
use core::{fmt, ops::Index};

use bstr::ByteSlice;

use crate::{
    error::Error,
    view::{TextSource, TextView},
};

/// A mutable text buffer whose storage is allocated once and never grows.
///
/// The buffer owns `capacity` chars. Only the first [`len`] of them are
/// meaningful; everything past that is stale and never read.
///
/// Writes that do not fit are cut short without error: whatever fits is
/// kept, the rest is dropped, and the call returns normally. Size the
/// capacity for the longest text you intend to build.
///
/// # Examples
///
/// ```rust
/// use fixedtext::FixedTextBuffer;
///
/// let mut hud = FixedTextBuffer::with_capacity(32);
/// hud.append("HP: ").append(87).append('/').append(100);
/// assert_eq!(hud, "HP: 87/100");
///
/// let mut tiny = FixedTextBuffer::with_capacity(4);
/// tiny.append("overflow");
/// assert_eq!(tiny, "over");
/// ```
///
/// [`len`]: FixedTextBuffer::len
#[derive(Clone)]
pub struct FixedTextBuffer {
    chars: Box<[char]>,
    len: usize,
}

impl FixedTextBuffer {
    /// Allocates a buffer that can hold up to `capacity` chars.
    ///
    /// This is the only allocation the buffer ever makes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        log::debug!("allocating text buffer with capacity {capacity}");
        Self {
            chars: vec!['\0'; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Builds a buffer holding `text`, failing instead of truncating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Capacity`] if `text` has more than `capacity` chars.
    pub fn try_from_text<P: TextSource + ?Sized>(capacity: usize, text: &P) -> Result<Self, Error> {
        let view = text.text_view();
        if view.len() > capacity {
            return Err(Error::Capacity {
                required: view.len(),
                capacity,
            });
        }
        let mut buf = Self::with_capacity(capacity);
        buf.append_text(text);
        Ok(buf)
    }

    /// Maximum number of chars the buffer can ever hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chars.len()
    }

    /// Number of valid chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no chars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Chars that can still be written before the buffer is full.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The valid prefix.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..self.len]
    }

    /// Iterates over the valid chars.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.as_chars().iter().copied()
    }

    /// Returns the char at `index`, or `None` past the valid prefix.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.as_chars().get(index).copied()
    }

    /// Overwrites the char at `index`. Indices past the valid prefix are
    /// ignored and `false` is returned.
    pub fn set_char(&mut self, index: usize, c: char) -> bool {
        if index >= self.len {
            return false;
        }
        self.chars[index] = c;
        true
    }

    /// Forgets the content. The storage itself is left untouched.
    pub fn clear(&mut self) -> &mut Self {
        self.len = 0;
        self
    }

    /// Shortens the content to at most `len` chars. Never grows it.
    pub fn truncate(&mut self, len: usize) -> &mut Self {
        if self.len > len {
            self.len = len;
        }
        self
    }

    /// Appends `text`, stopping silently at capacity.
    pub fn append_text<P: TextSource + ?Sized>(&mut self, text: &P) -> &mut Self {
        self.push_view(text.text_view(), 0, usize::MAX);
        self
    }

    /// Appends `len` chars of `text` starting at char `start`.
    ///
    /// Nothing is appended if `len` is zero or the window does not lie
    /// entirely inside `text`.
    pub fn append_range<P: TextSource + ?Sized>(
        &mut self,
        text: &P,
        start: usize,
        len: usize,
    ) -> &mut Self {
        let view = text.text_view();
        if len == 0 || start.checked_add(len).is_none_or(|end| end > view.len()) {
            return self;
        }
        self.push_view(view, start, len);
        self
    }

    /// Clears, then appends a window of `text`; see [`append_range`].
    ///
    /// [`append_range`]: FixedTextBuffer::append_range
    pub fn set_range<P: TextSource + ?Sized>(
        &mut self,
        text: &P,
        start: usize,
        len: usize,
    ) -> &mut Self {
        self.clear().append_range(text, start, len)
    }

    /// Appends a single char.
    ///
    /// Unlike every other append, a char needs *two* free slots: it is only
    /// written while `len < capacity - 1`, so the final slot is never filled
    /// this way.
    pub fn append_char(&mut self, c: char) -> &mut Self {
        if self.len + 1 < self.capacity() {
            self.chars[self.len] = c;
            self.len += 1;
        } else {
            log::trace!("dropping char {c:?}, buffer at capacity {}", self.capacity());
        }
        self
    }

    /// Appends UTF-8 bytes, replacing invalid sequences with U+FFFD.
    pub fn append_utf8(&mut self, bytes: &[u8]) -> &mut Self {
        for c in bytes.chars() {
            if !self.push_clamped(c) {
                log::trace!("truncated byte string at capacity {}", self.capacity());
                break;
            }
        }
        self
    }

    /// Appends `true` or `false`.
    pub fn append_bool(&mut self, value: bool) -> &mut Self {
        self.append_text(if value { "true" } else { "false" })
    }

    /// Moves `[start, len)` left by `count` chars, overwriting the `count`
    /// chars just before `start`.
    ///
    /// If fewer than `count` chars precede `start`, only those are
    /// overwritten and the content lands at index 0. No-op when `start` is
    /// past the content or `count` is zero; clears the buffer when `count`
    /// covers the whole content.
    pub fn shift_left(&mut self, count: usize, start: usize) -> &mut Self {
        if start >= self.len || count == 0 {
            return self;
        }
        if count >= self.len {
            return self.clear();
        }
        let shift = count.min(start);
        self.chars.copy_within(start..self.len, start - shift);
        self.len -= shift;
        self
    }

    /// Moves `[start, len)` right by `count` chars and fills the opened gap
    /// with spaces.
    ///
    /// Content pushed past capacity is dropped. When the gap itself reaches
    /// capacity, the tail is lost entirely and the gap is space-filled up
    /// to the end. No-op when `start` is past the content or `count` is zero.
    pub fn shift_right(&mut self, count: usize, start: usize) -> &mut Self {
        if start >= self.len || count == 0 {
            return self;
        }
        let capacity = self.capacity();
        let old_len = self.len;
        let new_len = old_len.saturating_add(count).min(capacity);
        if new_len < old_len.saturating_add(count) {
            log::trace!("shift by {count} truncated at capacity {capacity}");
        }

        let gap_end = start.saturating_add(count);
        if gap_end >= capacity {
            self.chars[start..capacity].fill(' ');
            self.len = capacity;
            return self;
        }

        let moved = new_len - gap_end;
        self.chars.copy_within(start..start + moved, gap_end);
        self.chars[start..gap_end].fill(' ');
        self.len = new_len;
        self
    }

    /// Writes `c` at the end if there is room. Returns whether it was
    /// written.
    #[inline]
    pub(crate) fn push_clamped(&mut self, c: char) -> bool {
        if self.len < self.capacity() {
            self.chars[self.len] = c;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Appends `count` copies of `c` up to capacity. Returns whether all of
    /// them fit.
    pub(crate) fn push_fill(&mut self, c: char, count: usize) -> bool {
        let n = count.min(self.remaining());
        self.chars[self.len..self.len + n].fill(c);
        self.len += n;
        n == count
    }

    /// Appends ASCII bytes up to capacity. Returns whether all of them fit.
    ///
    /// Runs under the scratch lock, so it must not log.
    pub(crate) fn push_ascii(&mut self, bytes: &[u8]) -> bool {
        let n = bytes.len().min(self.remaining());
        for (dst, &b) in self.chars[self.len..self.len + n].iter_mut().zip(bytes) {
            *dst = char::from(b);
        }
        self.len += n;
        n == bytes.len()
    }

    /// Writes `chars` over the content starting at `at`, clipped to the
    /// valid prefix.
    pub(crate) fn overwrite(&mut self, at: usize, chars: TextView<'_>) {
        let end = at.saturating_add(chars.len()).min(self.len);
        if at >= end {
            return;
        }
        for (slot, c) in self.chars[at..end].iter_mut().zip(chars.chars()) {
            *slot = c;
        }
    }

    pub(crate) fn chars_mut(&mut self) -> &mut [char] {
        &mut self.chars[..self.len]
    }

    fn push_view(&mut self, view: TextView<'_>, start: usize, len: usize) {
        let room = self.remaining();
        let wanted = len.min(view.len().saturating_sub(start));
        let n = wanted.min(room);
        match view {
            TextView::Chars(src) => {
                self.chars[self.len..self.len + n].copy_from_slice(&src[start..start + n]);
            }
            TextView::Str { text, .. } => {
                for (dst, c) in self.chars[self.len..self.len + n]
                    .iter_mut()
                    .zip(text.chars().skip(start))
                {
                    *dst = c;
                }
            }
        }
        self.len += n;
        if n < wanted {
            log::trace!("truncated append of {wanted} chars at capacity {}", self.capacity());
        }
    }
}

impl TextSource for FixedTextBuffer {
    fn text_view(&self) -> TextView<'_> {
        TextView::from_chars(self.as_chars())
    }
}

impl Index<usize> for FixedTextBuffer {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.as_chars()[index]
    }
}

impl fmt::Display for FixedTextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        for &c in self.as_chars() {
            f.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FixedTextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        f.write_char('"')?;
        for &c in self.as_chars() {
            for e in c.escape_debug() {
                f.write_char(e)?;
            }
        }
        f.write_char('"')
    }
}

/// `write!` support. Output past capacity is dropped and the write still
/// reports success.
impl fmt::Write for FixedTextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_text(s);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FixedTextBuffer {
    type Item = &'a char;
    type IntoIter = core::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_chars().iter()
    }
}
