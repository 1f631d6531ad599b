//! Float rendering as `{integer}.{fraction}`.
//!
//! The value is split into a truncated integer part and an absolute
//! fractional remainder. The integer part goes through the integer writer;
//! the remainder is scaled by `10^precision`, truncated, and also rendered as
//! an integer, zero-padded on the left to `precision` digits. No rounding
//! happens anywhere: `2.999` at precision 2 renders as `2.99`.
//!
//! A small epsilon is added to the remainder first, so that a fraction
//! stored as `...2899999` in binary still renders as `...29`. The epsilon is
//! `1e-14`, tightened to `10^-(precision + 1)` once precision reaches 14 so
//! it never shows up as a stray final digit.
use crate::{
    FixedTextBuffer,
    number::parts_of,
    options::{FormatFlags, Precision},
    scratch,
};

const FRACTION_EPSILON: f64 = 1e-14;
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

// `f64::abs` lives in std.
fn magnitude(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}

/// Truncates toward zero, saturating at the `i64` range.
#[allow(clippy::cast_possible_truncation)]
fn integer_of(value: f64) -> i64 {
    value as i64
}

mod sealed {
    pub trait Sealed {}
}

/// Float types the buffer knows how to render. This trait is sealed.
pub trait Float: sealed::Sealed + Copy {
    /// Significant decimal digits the type reliably carries.
    const MAX_DIGITS: u32;

    #[doc(hidden)]
    fn to_f64(self) -> f64;
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

impl Float for f32 {
    const MAX_DIGITS: u32 = 7;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f64 {
    const MAX_DIGITS: u32 = 15;

    fn to_f64(self) -> f64 {
        self
    }
}

/// Decimal digits in `|value|`, at least one, counted up to `max`.
fn integer_digits(value: i64, max: u32) -> u32 {
    let magnitude = value.unsigned_abs();
    let mut digits = 1;
    let mut bound = 10_u64;
    while digits < max && magnitude >= bound {
        digits += 1;
        match bound.checked_mul(10) {
            Some(next) => bound = next,
            None => break,
        }
    }
    digits
}

impl FixedTextBuffer {
    /// Appends `value` with the given number of fractional digits.
    ///
    /// With [`Precision::Auto`] the fraction gets whatever significant
    /// digits the type has left after the integer part (7 in total for
    /// `f32`, 15 for `f64`) and trailing zeros are dropped; a fraction that
    /// is all zeros disappears together with its `.`. A fixed precision
    /// always renders exactly that many digits.
    ///
    /// Non-finite values render as `NaN`, `inf` and `-inf`. Integer parts
    /// beyond the `i64` range saturate. A negative value whose rendered
    /// digits are all zero carries no sign, so `-1e-20` renders as `0`.
    ///
    /// ```rust
    /// use fixedtext::{FixedTextBuffer, Precision};
    ///
    /// let mut buf = FixedTextBuffer::with_capacity(16);
    /// buf.append_float(3.1415927_f64, Precision::Auto);
    /// assert_eq!(buf, "3.1415927");
    /// buf.set_float(3.1415927_f64, Precision::Fixed(2));
    /// assert_eq!(buf, "3.14");
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn append_float<F: Float>(&mut self, value: F, precision: Precision) -> &mut Self {
        let value = value.to_f64();
        if value.is_nan() {
            return self.append_text("NaN");
        }
        if value.is_infinite() {
            return self.append_text(if value < 0.0 { "-inf" } else { "inf" });
        }

        // Every float at or beyond 2^53 is already integral.
        let whole = if magnitude(value) < EXACT_INTEGER_LIMIT {
            integer_of(value) as f64
        } else {
            value
        };
        let integer = integer_of(value);

        let (digits, auto) = match precision {
            Precision::Auto => (
                F::MAX_DIGITS.saturating_sub(integer_digits(integer, F::MAX_DIGITS)),
                true,
            ),
            Precision::Fixed(digits) => (digits.min(Precision::MAX_FIXED), false),
        };

        let epsilon = if digits >= 14 {
            1.0 / 10_u64.pow(digits + 1) as f64
        } else {
            FRACTION_EPSILON
        };
        let fraction = magnitude(value - whole) + epsilon;
        let limit = 10_u64.pow(digits);
        let scaled = ((fraction * limit as f64) as u64).min(limit - 1);
        // The integer part of -0.5 is 0, which would lose the sign. A value
        // whose digits all render as zero gets no sign at all.
        let sign = integer == 0 && value < 0.0 && scaled != 0;

        let complete = scratch::with_scratch(|scratch| {
            let mut complete = !sign || self.push_clamped('-');
            let int_text = scratch.write_integer(parts_of(integer), FormatFlags::empty());
            complete &= self.push_ascii(int_text);

            if digits == 0 {
                return complete;
            }

            let frac_text = scratch.write_integer(parts_of(scaled), FormatFlags::empty());
            let trailing = if auto {
                frac_text.iter().rev().take_while(|&&b| b == b'0').count()
            } else {
                0
            };
            let kept = &frac_text[..frac_text.len() - trailing];
            if kept.is_empty() {
                return complete;
            }
            let leading = (digits as usize).saturating_sub(frac_text.len());

            complete & self.push_clamped('.') & self.push_fill('0', leading) & self.push_ascii(kept)
        });
        if !complete {
            log::trace!("truncated float at capacity {}", self.capacity());
        }
        self
    }

    /// Clears, then [`append_float`](FixedTextBuffer::append_float).
    pub fn set_float<F: Float>(&mut self, value: F, precision: Precision) -> &mut Self {
        self.clear().append_float(value, precision)
    }
}
