use alloc::string::String;
use core::hash::{Hash, Hasher};

use crate::{
    FixedTextBuffer,
    view::{TextSource, TextView},
};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Moves a raw hash off the values reserved for "empty" and "invalid".
fn avoid_sentinels(hash: i32) -> i32 {
    match hash {
        0 => 1,
        -1 => -2,
        h => h,
    }
}

impl FixedTextBuffer {
    /// A hash of the content that is identical across runs and platforms.
    ///
    /// FNV-1a over the little-endian bytes of each char. The result is never
    /// `0` or `-1`; those values are remapped to `1` and `-2`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn stable_hash(&self) -> i32 {
        let mut hash = FNV_OFFSET_BASIS;
        for &c in self.as_chars() {
            for byte in u32::from(c).to_le_bytes() {
                hash ^= u32::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        avoid_sentinels(hash as i32)
    }

    /// Char-wise comparison of the content with any text.
    pub fn content_eq<P: TextSource + ?Sized>(&self, other: &P) -> bool {
        TextView::from_chars(self.as_chars()).content_eq(&other.text_view())
    }
}

impl PartialEq for FixedTextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl Eq for FixedTextBuffer {}

impl PartialEq<str> for FixedTextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.content_eq(other)
    }
}

impl PartialEq<&str> for FixedTextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.content_eq(*other)
    }
}

impl PartialEq<String> for FixedTextBuffer {
    fn eq(&self, other: &String) -> bool {
        self.content_eq(other)
    }
}

impl PartialEq<FixedTextBuffer> for str {
    fn eq(&self, other: &FixedTextBuffer) -> bool {
        other.content_eq(self)
    }
}

impl PartialEq<FixedTextBuffer> for &str {
    fn eq(&self, other: &FixedTextBuffer) -> bool {
        other.content_eq(*self)
    }
}

impl Hash for FixedTextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_chars().hash(state);
    }
}
