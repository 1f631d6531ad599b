//! Integer rendering.
use crate::{
    FixedTextBuffer,
    options::FormatFlags,
    scratch::{self, IntParts},
};

mod sealed {
    pub trait Sealed {
        fn parts(self) -> crate::scratch::IntParts;
    }
}

/// Integer types the buffer knows how to render.
///
/// Implemented for every primitive integer up to 64 bits. This trait is
/// sealed.
pub trait Integer: sealed::Sealed + Copy {}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {
            #[inline]
            fn parts(self) -> IntParts {
                let v = self as u64;
                IntParts {
                    negative: false,
                    magnitude: v,
                    bits: v,
                    nibbles: <$t>::BITS / 4,
                }
            }
        }
        impl Integer for $t {}
    )*};
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {
            #[inline]
            fn parts(self) -> IntParts {
                IntParts {
                    negative: self < 0,
                    // `unsigned_abs` is exact for MIN as well.
                    magnitude: self.unsigned_abs() as u64,
                    bits: (self as $u) as u64,
                    nibbles: <$t>::BITS / 4,
                }
            }
        }
        impl Integer for $t {}
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

pub(crate) fn parts_of<T: Integer>(value: T) -> IntParts {
    sealed::Sealed::parts(value)
}

impl FixedTextBuffer {
    /// Appends `value` padded to at least `min_digits` chars.
    ///
    /// `flags` picks decimal or hex output and the pad char. Hex renders the
    /// two's complement bits of signed values without a sign. The fill goes
    /// in front of everything the number renders, sign included, so a
    /// zero-filled `-7` at width 4 is `00-7`.
    pub fn append_int<T: Integer>(
        &mut self,
        value: T,
        min_digits: usize,
        flags: FormatFlags,
    ) -> &mut Self {
        let parts = parts_of(value);
        let complete = scratch::with_scratch(|scratch| {
            let digits = scratch.write_integer(parts, flags);
            let pad = min_digits.saturating_sub(digits.len());
            self.push_fill(flags.fill_char(), pad) & self.push_ascii(digits)
        });
        if !complete {
            log::trace!("truncated number at capacity {}", self.capacity());
        }
        self
    }

    /// Clears, then [`append_int`](FixedTextBuffer::append_int).
    pub fn set_int<T: Integer>(&mut self, value: T, min_digits: usize, flags: FormatFlags) -> &mut Self {
        self.clear().append_int(value, min_digits, flags)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::*;

    fn render<T: Integer>(value: T, min_digits: usize, flags: FormatFlags) -> alloc::string::String {
        let mut b = FixedTextBuffer::with_capacity(32);
        b.append_int(value, min_digits, flags);
        b.to_string()
    }

    #[rstest]
    #[case(0_i64, 0, FormatFlags::empty(), "0")]
    #[case(-1_i64, 0, FormatFlags::empty(), "-1")]
    #[case(123_i64, 5, FormatFlags::ZERO_FILL, "00123")]
    #[case(123_i64, 5, FormatFlags::empty(), "  123")]
    #[case(-7_i64, 4, FormatFlags::ZERO_FILL, "00-7")]
    #[case(-42_i64, 3, FormatFlags::ZERO_FILL, "-42")]
    #[case(-7_i64, 4, FormatFlags::empty(), "  -7")]
    #[case(123456_i64, 3, FormatFlags::ZERO_FILL, "123456")]
    #[case(0xDEAD_i64, 0, FormatFlags::HEX_LOWER, "dead")]
    #[case(0xDEAD_i64, 0, FormatFlags::HEX_UPPER, "DEAD")]
    #[case(0xF_i64, 4, FormatFlags::HEX_UPPER | FormatFlags::ZERO_FILL, "000F")]
    fn formats_i64(
        #[case] value: i64,
        #[case] min_digits: usize,
        #[case] flags: FormatFlags,
        #[case] expected: &str,
    ) {
        assert_eq!(render(value, min_digits, flags), expected);
    }

    #[test]
    fn hex_uses_full_width_of_the_source_type() {
        assert_eq!(render(-1_i8, 0, FormatFlags::HEX_LOWER), "ff");
        assert_eq!(render(-1_i16, 0, FormatFlags::HEX_LOWER), "ffff");
        assert_eq!(render(-1_i32, 0, FormatFlags::HEX_UPPER), "FFFFFFFF");
        assert_eq!(render(u64::MAX, 0, FormatFlags::HEX_LOWER), "ffffffffffffffff");
        assert_eq!(render(0_u32, 0, FormatFlags::HEX_LOWER), "0");
    }

    #[test]
    fn extreme_values_of_every_width() {
        assert_eq!(render(i8::MIN, 0, FormatFlags::empty()), "-128");
        assert_eq!(render(i16::MIN, 0, FormatFlags::empty()), "-32768");
        assert_eq!(render(i32::MIN, 0, FormatFlags::empty()), "-2147483648");
        assert_eq!(render(i64::MIN, 0, FormatFlags::empty()), "-9223372036854775808");
        assert_eq!(render(u64::MAX, 0, FormatFlags::empty()), "18446744073709551615");
        assert_eq!(render(u8::MAX, 0, FormatFlags::empty()), "255");
    }

    #[test]
    fn padding_and_digits_clip_at_capacity() {
        let mut b = FixedTextBuffer::with_capacity(4);
        b.append_int(42, 8, FormatFlags::ZERO_FILL);
        assert_eq!(b.to_string(), "0000");

        let mut b = FixedTextBuffer::with_capacity(4);
        b.append_text("ab").append_int(-12345, 0, FormatFlags::empty());
        assert_eq!(b.to_string(), "ab-1");
    }

    #[test]
    fn set_replaces_content() {
        let mut b = FixedTextBuffer::with_capacity(8);
        b.append_text("junk");
        b.set_int(9_u8, 2, FormatFlags::ZERO_FILL);
        assert_eq!(b.to_string(), "09");
    }
}
