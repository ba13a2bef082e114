//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// A read at an index at or beyond the buffer's capacity.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The buffer's capacity at the time of the access.
        capacity: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, capacity } => {
                write!(
                    f,
                    "index out of bounds: index {index}, capacity {capacity}"
                )
            }
        }
    }
}

impl Error for BufferError {}
