//! Mutable window over a sub-range of a growable array.
//!
//! [`MutableWindow`] holds an exclusive borrow of its backing array and
//! describes its sub-range as an offset from the array's start plus a
//! length. No address or slice into the array is kept between calls: each
//! accessor re-derives the live slice from `(offset, len)`, so relocation of
//! the array's storage during `reserve`, `push`, `insert` or `resize` can
//! never leave the window dangling.
//!
//! # Repositioning
//!
//! Every mutating operation follows the same three steps:
//!
//! 1. record the window's offset and length,
//! 2. apply the mutation to the backing array at `offset + position`,
//! 3. set the new bounds to `[offset, offset + new_len)` via `reposition()`.
//!
//! Elements before the window never move logically, so the recorded offset
//! is still the window's start after the array has shifted or relocated.

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range, RangeBounds};
use std::slice;

use vecwin_core::{GrowableArray, WindowError};

use crate::bounds::{normalize_range, WindowBounds};
use crate::config::{ReservePolicy, WindowConfig};
use crate::read::ReadOnlyWindow;

/// A live, mutation-capable view of `[start, end)` within a backing array.
///
/// All positions taken or returned by the window are window-relative:
/// index `0` is the window's first element, `len()` is one past its last.
///
/// The window does not own the array and cannot outlive the borrow it was
/// created from. Elements of the array outside the window are never
/// modified, only shifted when the window grows or shrinks.
pub struct MutableWindow<'a, T, A: GrowableArray<T> = Vec<T>> {
    /// The backing array. Borrowed exclusively for the window's lifetime.
    array: &'a mut A,
    /// Offset of the window's first element from the array's start.
    offset: usize,
    /// Number of elements in the window.
    len: usize,
    /// Construction-time settings.
    config: WindowConfig,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T, A: GrowableArray<T>> MutableWindow<'a, T, A> {
    /// Create a window over the whole of `array`.
    pub fn new(array: &'a mut A) -> Self {
        let len = array.len();
        Self::from_parts(array, 0, len, WindowConfig::default())
    }

    /// Create a window over `range` within `array`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past `array.len()`.
    pub fn with_range(array: &'a mut A, range: Range<usize>) -> Self {
        match Self::try_with_range(array, range) {
            Ok(window) => window,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a window over `range` within `array`, rejecting invalid ranges.
    pub fn try_with_range(array: &'a mut A, range: Range<usize>) -> Result<Self, WindowError> {
        Self::with_config(array, range, WindowConfig::default())
    }

    /// Create a window over `range` within `array` with explicit settings.
    pub fn with_config(
        array: &'a mut A,
        range: Range<usize>,
        config: WindowConfig,
    ) -> Result<Self, WindowError> {
        let bounds = WindowBounds::try_new(range.start, range.end)?;
        bounds.check_within(array.len())?;
        Ok(Self::from_parts(array, bounds.start(), bounds.len(), config))
    }

    fn from_parts(array: &'a mut A, offset: usize, len: usize, config: WindowConfig) -> Self {
        let mut window = Self {
            array,
            offset,
            len,
            config,
            _item: PhantomData,
        };
        window.reposition(offset, len);
        window
    }

    /// Settings the window was created with.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Number of elements in the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current position of the window within the backing array.
    pub fn bounds(&self) -> WindowBounds {
        WindowBounds::new(self.offset, self.offset + self.len)
    }

    /// Release the array borrow, keeping only the window's position.
    pub fn into_bounds(self) -> WindowBounds {
        self.bounds()
    }

    /// Elements the backing array can still take without relocating.
    pub fn spare_capacity(&self) -> usize {
        self.array.capacity() - self.array.len()
    }

    /// The window's elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.array.as_slice()[self.offset..self.offset + self.len]
    }

    /// The window's elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let range = self.offset..self.offset + self.len;
        &mut self.array.as_mut_slice()[range]
    }

    /// A read-only copy of the window's current bounds and elements.
    pub fn as_read_only(&self) -> ReadOnlyWindow<'_, T> {
        ReadOnlyWindow::from_parts(self.as_slice(), self.bounds())
    }

    /// Element at window-relative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    /// Mutable element at window-relative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }

    /// Element at window-relative `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable element at window-relative `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The window's last element.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn back(&self) -> &T {
        match self.last() {
            Some(last) => last,
            None => panic!("{}", WindowError::EmptyWindow),
        }
    }

    /// The window's last element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty.
    pub fn back_mut(&mut self) -> &mut T {
        match self.last_mut() {
            Some(last) => last,
            None => panic!("{}", WindowError::EmptyWindow),
        }
    }

    /// The window's last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The window's last element mutably, or `None` if empty.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Iterate over the window's elements in storage order.
    ///
    /// The iterator borrows the window, so no mutation can interleave.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the window's elements in storage order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Ensure the array can hold `new_capacity - len()` more elements
    /// without relocating.
    ///
    /// Never changes the window's length or contents. A `new_capacity` at
    /// or below `len()` is a no-op.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.len {
            return;
        }
        let (offset, len) = (self.offset, self.len);
        let additional = new_capacity - len;
        match self.config.reserve_policy {
            ReservePolicy::Exact => self.array.reserve_exact(additional),
            ReservePolicy::Amortized => self.array.reserve(additional),
        }
        self.reposition(offset, len);
    }

    /// Append `value` as the window's new last element.
    ///
    /// Array elements after the window shift up by one.
    pub fn push(&mut self, value: T) {
        let (offset, len) = (self.offset, self.len);
        self.array.insert(offset + len, value);
        self.reposition(offset, len + 1);
    }

    /// Insert `value` at window-relative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            panic!("{err}");
        }
    }

    /// Insert `value` at window-relative `index`, rejecting `index > len()`.
    ///
    /// On error the value is dropped and the window is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), WindowError> {
        self.check_insert_position(index)?;
        let (offset, len) = (self.offset, self.len);
        self.array.insert(offset + index, value);
        self.reposition(offset, len + 1);
        Ok(())
    }

    /// Insert `count` clones of `value` at window-relative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T)
    where
        T: Clone,
    {
        self.insert_iter(index, iter::repeat_n(value, count));
    }

    /// Insert every item of `iter` at window-relative `index`, in order.
    ///
    /// Returns the number of elements inserted.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        if let Err(err) = self.check_insert_position(index) {
            panic!("{err}");
        }
        let (offset, len) = (self.offset, self.len);
        let before = self.array.len();
        self.array.insert_iter(offset + index, iter);
        let added = self.array.len() - before;
        self.reposition(offset, len + added);
        added
    }

    /// Remove and return the element at window-relative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Remove and return the element at window-relative `index`,
    /// rejecting `index >= len()`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, WindowError> {
        if index >= self.len {
            return Err(WindowError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let (offset, len) = (self.offset, self.len);
        let value = self.array.remove(offset + index);
        self.reposition(offset, len - 1);
        Ok(value)
    }

    /// Remove the window-relative `range` of elements.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past `len()`.
    pub fn remove_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        if let Err(err) = self.try_remove_range(range) {
            panic!("{err}");
        }
    }

    /// Remove the window-relative `range` of elements, rejecting ranges
    /// that are inverted or reach past `len()`.
    pub fn try_remove_range<R>(&mut self, range: R) -> Result<(), WindowError>
    where
        R: RangeBounds<usize>,
    {
        let range = normalize_range(range, self.len)?;
        let (offset, len) = (self.offset, self.len);
        let removed = range.len();
        self.array.remove_range(offset + range.start..offset + range.end);
        self.reposition(offset, len - removed);
        Ok(())
    }

    /// Remove and return the window's last element, or `None` if empty.
    ///
    /// Only the element at `end - 1` is removed; the array element just past
    /// the window is left in place.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let (offset, len) = (self.offset, self.len);
        let value = self.array.remove(offset + len - 1);
        self.reposition(offset, len - 1);
        Some(value)
    }

    /// Shorten the window to `new_len` elements, removing the tail.
    ///
    /// No-op if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            let len = self.len;
            self.remove_range(new_len..len);
        }
    }

    /// Remove every element of the window. The window stays at its offset.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grow or shrink the window to `new_len` elements.
    ///
    /// Growing reserves capacity first, then appends `T::default()` values
    /// at the window's end. Shrinking removes elements from the end.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Grow or shrink the window to `new_len` elements, filling new slots
    /// with values produced by `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.len) {
            Ordering::Greater => {
                self.reserve(new_len);
                let extra = new_len - self.len;
                let at = self.len;
                self.insert_iter(at, iter::repeat_with(f).take(extra));
            }
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => {}
        }
    }

    fn check_insert_position(&self, index: usize) -> Result<(), WindowError> {
        if index > self.len {
            return Err(WindowError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Re-derive the window from a recorded offset and its new length.
    fn reposition(&mut self, offset: usize, len: usize) {
        self.offset = offset;
        self.len = len;
        debug_assert!(
            offset + len <= self.array.len(),
            "window [{}, {}) escapes array of length {}",
            offset,
            offset + len,
            self.array.len(),
        );
    }
}

impl<T: fmt::Debug, A: GrowableArray<T>> fmt::Debug for MutableWindow<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableWindow")
            .field("bounds", &self.bounds())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, A: GrowableArray<T>> Index<usize> for MutableWindow<'_, T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T, A: GrowableArray<T>> IndexMut<usize> for MutableWindow<'_, T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T, A: GrowableArray<T>> Extend<T> for MutableWindow<'_, T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let at = self.len;
        self.insert_iter(at, iter);
    }
}

impl<'w, T, A: GrowableArray<T>> IntoIterator for &'w MutableWindow<'_, T, A> {
    type Item = &'w T;
    type IntoIter = slice::Iter<'w, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'w, T, A: GrowableArray<T>> IntoIterator for &'w mut MutableWindow<'_, T, A> {
    type Item = &'w mut T;
    type IntoIter = slice::IterMut<'w, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
