//! Detached window bounds.
//!
//! A [`WindowBounds`] is a plain `[start, end)` pair of offsets from the
//! start of a backing array. It holds no borrow, so it stays meaningful
//! across relocation of the array: resolving it again against the array
//! yields the same logical elements as long as the array's length and
//! order around the window have not changed.

use std::fmt;
use std::ops::{Bound, Range, RangeBounds};

use vecwin_core::WindowError;

use crate::read::ReadOnlyWindow;

/// Half-open `[start, end)` offsets into a backing array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct WindowBounds {
    start: usize,
    end: usize,
}

impl WindowBounds {
    /// Create bounds from a start/end pair.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "inverted window bounds: [{start}, {end})");
        Self { start, end }
    }

    /// Create bounds from a start/end pair, rejecting inverted pairs.
    pub fn try_new(start: usize, end: usize) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Bounds covering the whole of an array of `len` elements.
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// Offset of the first element from the array's start.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last element.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of elements covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the bounds cover no elements.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bounds as a `Range`, suitable for slicing the array.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check that the bounds fit inside an array of `array_len` elements.
    pub fn check_within(&self, array_len: usize) -> Result<(), WindowError> {
        if self.end > array_len {
            return Err(WindowError::RangeOutOfBounds {
                start: self.start,
                end: self.end,
                len: array_len,
            });
        }
        Ok(())
    }

    /// Re-attach the bounds to `array` as a read-only window.
    ///
    /// Fails if the array has shrunk below `end()` since the bounds were taken.
    pub fn resolve<T>(self, array: &[T]) -> Result<ReadOnlyWindow<'_, T>, WindowError> {
        self.check_within(array.len())?;
        Ok(ReadOnlyWindow::from_parts(&array[self.range()], self))
    }
}

impl fmt::Display for WindowBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Normalise any `RangeBounds` against a sequence of `len` elements.
pub(crate) fn normalize_range<R>(range: R, len: usize) -> Result<Range<usize>, WindowError>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end {
        return Err(WindowError::InvertedRange { start, end });
    }
    if end > len {
        return Err(WindowError::RangeOutOfBounds { start, end, len });
    }
    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accessors() {
        let b = WindowBounds::new(2, 5);
        assert_eq!(b.start(), 2);
        assert_eq!(b.end(), 5);
        assert_eq!(b.len(), 3);
        assert!(!b.is_empty());
        assert_eq!(b.range(), 2..5);
        assert_eq!(b.to_string(), "[2, 5)");
    }

    #[test]
    fn empty_bounds() {
        let b = WindowBounds::new(4, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }

    #[test]
    #[should_panic(expected = "inverted window bounds")]
    fn new_rejects_inverted() {
        let _ = WindowBounds::new(3, 1);
    }

    #[test]
    fn try_new_reports_inverted() {
        assert_eq!(
            WindowBounds::try_new(3, 1),
            Err(WindowError::InvertedRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn check_within_array() {
        let b = WindowBounds::new(1, 4);
        assert!(b.check_within(4).is_ok());
        assert_eq!(
            b.check_within(3),
            Err(WindowError::RangeOutOfBounds {
                start: 1,
                end: 4,
                len: 3
            })
        );
    }

    #[test]
    fn resolve_after_array_shrinks_fails() {
        let mut v = vec![1, 2, 3, 4, 5];
        let b = WindowBounds::new(2, 5);
        assert_eq!(b.resolve(&v).unwrap().as_slice(), &[3, 4, 5]);
        v.truncate(3);
        assert!(b.resolve(&v).is_err());
    }

    #[test]
    fn normalize_range_variants() {
        assert_eq!(normalize_range(.., 5), Ok(0..5));
        assert_eq!(normalize_range(1..=2, 5), Ok(1..3));
        assert_eq!(normalize_range(3.., 5), Ok(3..5));
        assert_eq!(
            normalize_range(2..7, 5),
            Err(WindowError::RangeOutOfBounds {
                start: 2,
                end: 7,
                len: 5
            })
        );
    }
}
