//! A fixed-capacity, allocation-free mutable text buffer.
//!
//! [`FixedTextBuffer`] allocates its storage once and then builds and edits
//! text in place: appending formatted numbers, floats and small structured
//! values, searching, replacing, padding and trimming. Nothing ever grows the
//! storage; writes that do not fit are truncated silently, so a per-frame
//! render loop can rebuild its labels without touching the allocator.
//!
//! Numbers are staged in a single process-wide scratch area guarded by a
//! `critical-section` lock. The default `std` feature provides the lock
//! implementation on hosted targets; `no_std` users bring their own.
//!
//! ```rust
//! use fixedtext::{FixedTextBuffer, FormatFlags, Precision};
//!
//! let mut label = FixedTextBuffer::with_capacity(32);
//! label
//!     .append("x=")
//!     .append_float(12.5_f32, Precision::Auto)
//!     .append(" id=")
//!     .append_int(255_u8, 4, FormatFlags::HEX_UPPER | FormatFlags::ZERO_FILL);
//! assert_eq!(label, "x=12.5 id=00FF");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod append;
mod buffer;
mod edit;
mod error;
mod float;
mod geometry;
mod hash;
mod number;
mod options;
mod scratch;
mod search;
#[cfg(feature = "serde")]
mod serde_impl;
mod view;

#[cfg(test)]
mod tests;

pub use append::AppendValue;
pub use buffer::FixedTextBuffer;
pub use error::Error;
pub use float::Float;
pub use geometry::{Color32, Rect2i, Vector2i};
pub use number::Integer;
pub use options::{FormatFlags, Precision};
pub use view::{TextSource, TextView};
