//! In-place editing built on [`FixedTextBuffer::shift_left`] and
//! [`FixedTextBuffer::shift_right`].
use core::cmp::Ordering;

use crate::{FixedTextBuffer, search::find_forward, view::TextSource};

impl FixedTextBuffer {
    /// Deletes `count` chars starting at `start`.
    ///
    /// A window running past the end removes everything from `start` on.
    /// No-op if `start` is past the content or `count` is zero.
    pub fn remove(&mut self, start: usize, count: usize) -> &mut Self {
        if start >= self.len() || count == 0 {
            return self;
        }
        match start.checked_add(count) {
            Some(end) if end < self.len() => self.shift_left(count, end),
            _ => self.truncate(start),
        }
    }

    /// Deletes everything from `start` on.
    pub fn remove_from(&mut self, start: usize) -> &mut Self {
        self.truncate(start)
    }

    /// Replaces every occurrence of `old` with `new`, scanning left to
    /// right and never re-scanning inserted text.
    ///
    /// When `new` is longer than `old` and a substitution runs into
    /// capacity, the partial substitution is kept and the pass stops there:
    /// later occurrences are left untouched.
    ///
    /// ```rust
    /// use fixedtext::FixedTextBuffer;
    ///
    /// let mut buf = FixedTextBuffer::with_capacity(64);
    /// buf.append("{name} gains experience! {name} levels up!");
    /// buf.replace("{name}", "Pete");
    /// assert_eq!(buf, "Pete gains experience! Pete levels up!");
    /// ```
    pub fn replace<O, N>(&mut self, old: &O, new: &N) -> &mut Self
    where
        O: TextSource + ?Sized,
        N: TextSource + ?Sized,
    {
        let old = old.text_view();
        let new = new.text_view();
        if old.is_empty() || old.content_eq(&new) {
            return self;
        }

        let (old_len, new_len) = (old.len(), new.len());
        let mut from = 0;
        while let Some(at) = find_forward(self.as_chars(), &old, from) {
            match new_len.cmp(&old_len) {
                Ordering::Equal => {}
                Ordering::Greater => {
                    let grow = new_len - old_len;
                    let overflow = self.len() + grow > self.capacity();
                    self.shift_right(grow, at);
                    if overflow {
                        self.overwrite(at, new);
                        log::debug!(
                            "replace pass stopped at index {at}: buffer full at capacity {}",
                            self.capacity()
                        );
                        return self;
                    }
                }
                Ordering::Less => {
                    self.remove(at + new_len, old_len - new_len);
                }
            }
            self.overwrite(at, new);
            from = at + new_len;
            if from > self.len() {
                break;
            }
        }
        self
    }

    /// Keeps only the content from `start` on.
    ///
    /// `start == 0` keeps everything; `start` at or past the end clears.
    pub fn substring(&mut self, start: usize) -> &mut Self {
        if start == 0 {
            return self;
        }
        if start >= self.len() {
            return self.clear();
        }
        self.shift_left(start, start)
    }

    /// Keeps at most `len` chars starting at `start`.
    pub fn substring_len(&mut self, start: usize, len: usize) -> &mut Self {
        self.substring(start).truncate(len)
    }

    /// Inserts `count` copies of `fill` at the front, dropping whatever
    /// gets pushed past capacity.
    pub fn pad_left(&mut self, count: usize, fill: char) -> &mut Self {
        if count == 0 {
            return self;
        }
        if self.is_empty() {
            return self.pad_right(count, fill);
        }
        self.shift_right(count, 0);
        let end = count.min(self.len());
        self.chars_mut()[..end].fill(fill);
        self
    }

    /// Appends `count` copies of `fill`, up to capacity.
    pub fn pad_right(&mut self, count: usize, fill: char) -> &mut Self {
        if !self.push_fill(fill, count) {
            log::trace!("padding truncated at capacity {}", self.capacity());
        }
        self
    }

    /// Strips leading and trailing spaces (U+0020 only).
    pub fn trim(&mut self) -> &mut Self {
        self.trim_start().trim_end()
    }

    /// Strips leading spaces.
    pub fn trim_start(&mut self) -> &mut Self {
        let leading = self.iter().take_while(|&c| c == ' ').count();
        if leading == self.len() {
            return self.clear();
        }
        self.shift_left(leading, leading)
    }

    /// Strips trailing spaces.
    pub fn trim_end(&mut self) -> &mut Self {
        let trailing = self.iter().rev().take_while(|&c| c == ' ').count();
        let len = self.len() - trailing;
        self.truncate(len)
    }

    /// Upper-cases every char that has a single-char upper-case form.
    ///
    /// The mapping is locale-independent. Chars whose upper case is several
    /// chars long (such as `ß`) are left alone so the length never changes.
    pub fn to_upper_invariant(&mut self) -> &mut Self {
        for c in self.chars_mut() {
            let mut upper = c.to_uppercase();
            if let (Some(u), None) = (upper.next(), upper.next()) {
                *c = u;
            }
        }
        self
    }

    /// Lower-cases every char that has a single-char lower-case form.
    pub fn to_lower_invariant(&mut self) -> &mut Self {
        for c in self.chars_mut() {
            let mut lower = c.to_lowercase();
            if let (Some(l), None) = (lower.next(), lower.next()) {
                *c = l;
            }
        }
        self
    }
}
