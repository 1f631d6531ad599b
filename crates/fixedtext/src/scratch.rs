//! The process-wide digit staging area.
//!
//! Integer and float formatting write their digits back-to-front into a
//! single 64 byte scratch array before copying them into the destination
//! buffer. The array is shared by every buffer in the process, so it sits
//! behind a `critical-section` mutex, and callers must keep the lock from the
//! first digit written until the last digit copied out. [`with_scratch`] is
//! the only way in and enforces that by scope.
//!
//! Nothing inside a `with_scratch` closure may call back into formatting:
//! the inner `RefCell` borrow would panic.
use core::cell::RefCell;

use critical_section::Mutex;

use crate::options::FormatFlags;

pub(crate) const SCRATCH_LEN: usize = 64;

static SCRATCH: Mutex<RefCell<Scratch>> = Mutex::new(RefCell::new(Scratch::new()));

/// Runs `f` with exclusive access to the shared scratch digits.
pub(crate) fn with_scratch<R>(f: impl FnOnce(&mut Scratch) -> R) -> R {
    critical_section::with(|cs| f(&mut SCRATCH.borrow_ref_mut(cs)))
}

/// An integer flattened to what the digit writer needs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntParts {
    pub(crate) negative: bool,
    /// Absolute value.
    pub(crate) magnitude: u64,
    /// Two's complement bit pattern, masked to the source width.
    pub(crate) bits: u64,
    /// Hex digits needed for the full source width.
    pub(crate) nibbles: u32,
}

pub(crate) struct Scratch {
    digits: [u8; SCRATCH_LEN],
}

impl Scratch {
    const fn new() -> Self {
        Self {
            digits: [0; SCRATCH_LEN],
        }
    }

    /// Writes `value` right-aligned into the scratch array and returns the
    /// rendered text.
    ///
    /// Decimal output carries a leading `-` for negative values. Hex output
    /// renders the raw bits with no sign, leading zero nibbles stripped down
    /// to a single digit.
    pub(crate) fn write_integer(&mut self, value: IntParts, flags: FormatFlags) -> &[u8] {
        let mut pos = SCRATCH_LEN;

        if flags.is_hex() {
            let table = flags.hex_digits();
            let mut bits = value.bits;
            for _ in 0..value.nibbles {
                pos -= 1;
                self.digits[pos] = table[(bits & 0xF) as usize];
                bits >>= 4;
            }
            while pos < SCRATCH_LEN - 1 && self.digits[pos] == b'0' {
                pos += 1;
            }
        } else {
            let mut n = value.magnitude;
            loop {
                pos -= 1;
                self.digits[pos] = b'0' + (n % 10) as u8;
                n /= 10;
                if n == 0 {
                    break;
                }
            }
            if value.negative {
                pos -= 1;
                self.digits[pos] = b'-';
            }
        }

        &self.digits[pos..]
    }
}
