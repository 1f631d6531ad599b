use bitflags::bitflags;

bitflags! {
    /// Controls how integers (and packed colors) are rendered.
    ///
    /// The empty set renders decimal digits and pads short numbers with
    /// spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedtext::{FixedTextBuffer, FormatFlags};
    ///
    /// let mut buf = FixedTextBuffer::with_capacity(16);
    /// buf.append("0x").append_int(0xDEAD_u32, 0, FormatFlags::HEX_LOWER);
    /// assert_eq!(buf, "0xdead");
    ///
    /// buf.set_int(123, 5, FormatFlags::ZERO_FILL);
    /// assert_eq!(buf, "00123");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlags: u8 {
        /// Pad up to `min_digits` with `'0'` instead of `' '`.
        const ZERO_FILL = 1 << 0;
        /// Render as hexadecimal with `a-f`.
        const HEX_LOWER = 1 << 1;
        /// Render as hexadecimal with `A-F`.
        const HEX_UPPER = 1 << 2;
    }
}

impl FormatFlags {
    /// Whether either hex flag is set.
    #[must_use]
    pub const fn is_hex(self) -> bool {
        self.intersects(Self::HEX_LOWER.union(Self::HEX_UPPER))
    }

    /// The pad char selected by [`FormatFlags::ZERO_FILL`].
    #[must_use]
    pub const fn fill_char(self) -> char {
        if self.contains(Self::ZERO_FILL) { '0' } else { ' ' }
    }

    pub(crate) const fn hex_digits(self) -> &'static [u8; 16] {
        // Upper wins when both are set.
        if self.contains(Self::HEX_UPPER) {
            b"0123456789ABCDEF"
        } else {
            b"0123456789abcdef"
        }
    }
}

/// Number of fractional digits to render for a float.
///
/// # Default
///
/// [`Precision::Auto`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Use whatever significant digits the type has left after the integer
    /// part, then drop trailing zeros.
    #[default]
    Auto,
    /// Always render exactly this many fractional digits (capped at
    /// [`Precision::MAX_FIXED`]). Trailing zeros are kept.
    Fixed(u32),
}

impl Precision {
    /// Largest fractional digit count that still fits the scaled fraction in
    /// a `u64`.
    pub const MAX_FIXED: u32 = 18;
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Precision::Fixed(digits)
    }
}

impl From<Option<u32>> for Precision {
    fn from(digits: Option<u32>) -> Self {
        digits.map_or(Precision::Auto, Precision::Fixed)
    }
}
