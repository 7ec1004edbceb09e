//! Error types for checked window operations.
//!
//! The unchecked window API panics on precondition violations. The
//! `try_*` family reports the same violations through [`WindowError`].

use std::error::Error;
use std::fmt;

/// Precondition violations detected by checked window operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// An element index at or past the end of the window.
    IndexOutOfBounds {
        /// The requested index (window-relative).
        index: usize,
        /// Length of the window at the time of the call.
        len: usize,
    },
    /// A range whose start lies after its end.
    InvertedRange {
        /// Start of the rejected range.
        start: usize,
        /// End of the rejected range.
        end: usize,
    },
    /// A well-ordered range that reaches past the sequence it indexes.
    RangeOutOfBounds {
        /// Start of the rejected range.
        start: usize,
        /// End of the rejected range.
        end: usize,
        /// Length of the indexed sequence (array or window).
        len: usize,
    },
    /// The operation needs at least one element but the window is empty.
    EmptyWindow,
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for window of length {len}")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "inverted range: start {start} is after end {end}")
            }
            Self::RangeOutOfBounds { start, end, len } => {
                write!(
                    f,
                    "range [{start}, {end}) out of bounds for length {len}"
                )
            }
            Self::EmptyWindow => write!(f, "window is empty"),
        }
    }
}

impl Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_index_out_of_bounds() {
        let err = WindowError::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of bounds for window of length 3"
        );
    }

    #[test]
    fn display_range_errors() {
        let inverted = WindowError::InvertedRange { start: 5, end: 2 };
        assert_eq!(inverted.to_string(), "inverted range: start 5 is after end 2");

        let oob = WindowError::RangeOutOfBounds {
            start: 1,
            end: 9,
            len: 4,
        };
        assert_eq!(oob.to_string(), "range [1, 9) out of bounds for length 4");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(WindowError::EmptyWindow);
        assert_eq!(err.to_string(), "window is empty");
        assert!(err.source().is_none());
    }
}
