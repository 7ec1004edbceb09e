//! Read-only window over a sub-range of an array.
//!
//! [`ReadOnlyWindow`] borrows exactly the window's elements from the source
//! array and remembers the [`WindowBounds`] they were taken from. Because it
//! holds a shared borrow, the source cannot be mutated or relocated while the
//! window is alive. To keep a window's position across mutation, take its
//! bounds and [`resolve`](WindowBounds::resolve) them again afterwards.

use std::ops::{Index, Range};
use std::slice;

use vecwin_core::{GrowableArray, WindowError};

use crate::bounds::WindowBounds;
use crate::write::MutableWindow;

/// An immutable view of `[start, end)` within a source array.
///
/// Cheap to copy: it is a slice reference plus two offsets.
#[derive(Debug)]
pub struct ReadOnlyWindow<'a, T> {
    /// The window's elements, already narrowed to `bounds`.
    elements: &'a [T],
    /// Where `elements` sits within the source array.
    bounds: WindowBounds,
}

impl<T> Clone for ReadOnlyWindow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyWindow<'_, T> {}

impl<'a, T> ReadOnlyWindow<'a, T> {
    /// View the whole of `array`.
    pub fn new(array: &'a [T]) -> Self {
        Self {
            elements: array,
            bounds: WindowBounds::full(array.len()),
        }
    }

    /// View `range` within `array`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past `array.len()`.
    pub fn from_range(array: &'a [T], range: Range<usize>) -> Self {
        match Self::try_from_range(array, range) {
            Ok(window) => window,
            Err(err) => panic!("{err}"),
        }
    }

    /// View `range` within `array`, rejecting invalid ranges.
    pub fn try_from_range(array: &'a [T], range: Range<usize>) -> Result<Self, WindowError> {
        let bounds = WindowBounds::try_new(range.start, range.end)?;
        bounds.resolve(array)
    }

    /// Assemble a window from an already-narrowed slice and its bounds.
    pub(crate) fn from_parts(elements: &'a [T], bounds: WindowBounds) -> Self {
        debug_assert_eq!(elements.len(), bounds.len());
        Self { elements, bounds }
    }

    /// Number of elements in the window.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the window holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Position of the window within its source array.
    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    /// Element at window-relative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> &'a T {
        &self.elements[index]
    }

    /// Element at window-relative `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elements.get(index)
    }

    /// The last element of the window.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn back(&self) -> &'a T {
        match self.elements.last() {
            Some(last) => last,
            None => panic!("{}", WindowError::EmptyWindow),
        }
    }

    /// The last element of the window, or `None` if empty.
    pub fn last(&self) -> Option<&'a T> {
        self.elements.last()
    }

    /// The window's elements as a slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.elements
    }

    /// Iterate over the window's elements in storage order.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.elements.iter()
    }
}

impl<'a, T, A> From<&'a MutableWindow<'_, T, A>> for ReadOnlyWindow<'a, T>
where
    A: GrowableArray<T>,
{
    fn from(window: &'a MutableWindow<'_, T, A>) -> Self {
        window.as_read_only()
    }
}

impl<T> Index<usize> for ReadOnlyWindow<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for ReadOnlyWindow<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &ReadOnlyWindow<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: PartialEq> PartialEq for ReadOnlyWindow<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ReadOnlyWindow<'_, T> {}
