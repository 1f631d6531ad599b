//! The `append` / `set` entry points shared by every value kind.
use crate::{
    FixedTextBuffer,
    float::Float,
    geometry::{Color32, Rect2i, Vector2i},
    number::Integer,
    options::{FormatFlags, Precision},
    view::TextSource,
};

/// A value that knows how to append its default text form to a buffer.
///
/// Text renders as-is, integers in plain decimal, floats with
/// [`Precision::Auto`], and the structured types as parenthesized component
/// lists such as `(x, y)`.
pub trait AppendValue {
    /// Appends `self` to `buf`, truncating silently at capacity.
    fn append_to(self, buf: &mut FixedTextBuffer);
}

impl<T: TextSource + ?Sized> AppendValue for &T {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_text(self);
    }
}

impl AppendValue for char {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_char(self);
    }
}

impl AppendValue for bool {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_bool(self);
    }
}

macro_rules! append_integers {
    ($($t:ty),*) => {$(
        impl AppendValue for $t {
            fn append_to(self, buf: &mut FixedTextBuffer) {
                buf.append_int(self, 0, FormatFlags::empty());
            }
        }
    )*};
}

append_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AppendValue for f32 {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_float(self, Precision::Auto);
    }
}

impl AppendValue for f64 {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_float(self, Precision::Auto);
    }
}

/// A float with an explicit precision.
impl<F: Float> AppendValue for (F, Precision) {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_float(self.0, self.1);
    }
}

impl AppendValue for Vector2i {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_components(&[self.x, self.y]);
    }
}

impl AppendValue for Rect2i {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_components(&[self.x, self.y, self.width, self.height]);
    }
}

impl AppendValue for Color32 {
    fn append_to(self, buf: &mut FixedTextBuffer) {
        buf.append_color(self, FormatFlags::empty());
    }
}

impl FixedTextBuffer {
    /// Appends the default text form of `value` and returns `self` for
    /// chaining.
    pub fn append(&mut self, value: impl AppendValue) -> &mut Self {
        value.append_to(self);
        self
    }

    /// Clears, then [`append`](FixedTextBuffer::append).
    pub fn set(&mut self, value: impl AppendValue) -> &mut Self {
        self.clear().append(value)
    }

    /// Appends a color.
    ///
    /// Without hex flags this is `(r, g, b, a)`. With [`FormatFlags::HEX_LOWER`]
    /// or [`FormatFlags::HEX_UPPER`] the channels are packed as two hex
    /// digits each, `rrggbbaa`, with no prefix.
    pub fn append_color(&mut self, color: Color32, flags: FormatFlags) -> &mut Self {
        if flags.is_hex() {
            let hex = flags | FormatFlags::ZERO_FILL;
            for channel in [color.r, color.g, color.b, color.a] {
                self.append_int(channel, 2, hex);
            }
            self
        } else {
            self.append_components(&[color.r, color.g, color.b, color.a])
        }
    }

    /// Clears, then [`append_color`](FixedTextBuffer::append_color).
    pub fn set_color(&mut self, color: Color32, flags: FormatFlags) -> &mut Self {
        self.clear().append_color(color, flags)
    }

    fn append_components<T: Integer>(&mut self, components: &[T]) -> &mut Self {
        self.push_clamped('(');
        for (i, &c) in components.iter().enumerate() {
            if i > 0 {
                self.append_text(", ");
            }
            self.append_int(c, 0, FormatFlags::empty());
        }
        self.push_clamped(')');
        self
    }
}
