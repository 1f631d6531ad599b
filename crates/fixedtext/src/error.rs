use thiserror::Error;

/// Failures raised outside the silently-truncating text core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A structured value was indexed past its last component.
    #[error("component index {index} out of range for {len} components")]
    ComponentIndex {
        /// The rejected index.
        index: usize,
        /// Number of components the value has.
        len: usize,
    },
    /// Strict construction was asked to hold more than fits.
    #[error("text of {required} chars does not fit capacity {capacity}")]
    Capacity {
        /// Chars the text needs.
        required: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },
}
