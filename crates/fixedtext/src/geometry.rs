//! Plain value types the buffer can render.
//!
//! These carry no behavior beyond component access.

use core::ops::Index;

use crate::error::Error;

/// An integer 2D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2i {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

/// An integer rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect2i {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Extent along `x`.
    pub width: i32,
    /// Extent along `y`.
    pub height: i32,
}

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color32 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Vector2i {
    /// A vector from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component by position: `x`, `y`.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentIndex`] for `index >= 2`.
    pub fn component(&self, index: usize) -> Result<i32, Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::ComponentIndex { index, len: 2 }),
        }
    }
}

impl Rect2i {
    /// A rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Component by position: `x`, `y`, `width`, `height`.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentIndex`] for `index >= 4`.
    pub fn component(&self, index: usize) -> Result<i32, Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.width),
            3 => Ok(self.height),
            _ => Err(Error::ComponentIndex { index, len: 4 }),
        }
    }
}

impl Color32 {
    /// A color from its four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Component by position: `r`, `g`, `b`, `a`.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentIndex`] for `index >= 4`.
    pub fn component(&self, index: usize) -> Result<u8, Error> {
        match index {
            0 => Ok(self.r),
            1 => Ok(self.g),
            2 => Ok(self.b),
            3 => Ok(self.a),
            _ => Err(Error::ComponentIndex { index, len: 4 }),
        }
    }
}

macro_rules! impl_index {
    ($ty:ty => $out:ty, $($i:literal => $field:ident),+; $len:literal) => {
        impl Index<usize> for $ty {
            type Output = $out;

            fn index(&self, index: usize) -> &$out {
                match index {
                    $($i => &self.$field,)+
                    _ => panic!("{}", Error::ComponentIndex { index, len: $len }),
                }
            }
        }
    };
}

impl_index!(Vector2i => i32, 0 => x, 1 => y; 2);
impl_index!(Rect2i => i32, 0 => x, 1 => y, 2 => width, 3 => height; 4);
impl_index!(Color32 => u8, 0 => r, 1 => g, 2 => b, 3 => a; 4);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn components_by_position() {
        let r = Rect2i::new(1, 2, 3, 4);
        assert_eq!(r[2], 3);
        assert_eq!(r.component(3), Ok(4));
        assert_eq!(Color32::new(9, 8, 7, 6)[0], 9);
        assert_eq!(Vector2i::new(5, 6).component(1), Ok(6));
    }

    #[test]
    fn out_of_range_component_is_an_error() {
        let err = Vector2i::new(1, 2).component(2).unwrap_err();
        assert_eq!(err, Error::ComponentIndex { index: 2, len: 2 });
        assert_eq!(err.to_string(), "component index 2 out of range for 2 components");
    }

    #[test]
    #[should_panic(expected = "component index 4 out of range for 4 components")]
    fn out_of_range_index_panics() {
        let _ = Color32::default()[4];
    }
}
