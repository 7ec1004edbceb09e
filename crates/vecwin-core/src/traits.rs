//! The backing-array seam that windows read and mutate through.

use std::ops::Range;

use smallvec::{Array, SmallVec};

/// A contiguous, dynamically growable sequence owned by the caller.
///
/// Windows never cache addresses into a `GrowableArray`. Any method taking
/// `&mut self` may relocate the storage; implementations must only keep the
/// relative order and the values of elements not touched by the call.
///
/// Indices are offsets from the start of the array. `as_slice()[0]` is
/// always the first element, wherever the storage currently lives.
pub trait GrowableArray<T> {
    /// Number of initialised elements.
    fn len(&self) -> usize;

    /// Whether the array holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the current storage can hold without relocating.
    fn capacity(&self) -> usize;

    /// The full extent of the array.
    fn as_slice(&self) -> &[T];

    /// The full extent of the array, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Insert `value` at `index`, shifting later elements up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    fn insert(&mut self, index: usize, value: T);

    /// Insert every item of `iter` at `index`, in iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>;

    /// Remove and return the element at `index`, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn remove(&mut self, index: usize) -> T;

    /// Remove the elements in `range`, dropping them.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or `range.end > len()`.
    fn remove_range(&mut self, range: Range<usize>);

    /// Make room for at least `additional` more elements, possibly
    /// over-allocating to amortise future growth.
    fn reserve(&mut self, additional: usize);

    /// Make room for at least `additional` more elements without
    /// deliberate over-allocation.
    fn reserve_exact(&mut self, additional: usize);
}

impl<T> GrowableArray<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }

    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }

    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        // An empty replaced range turns splice into a pure insertion.
        self.splice(index..index, iter);
    }

    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn reserve_exact(&mut self, additional: usize) {
        Vec::reserve_exact(self, additional);
    }
}

/// `SmallVec` relocates when it spills from inline to heap storage, so a
/// window over one must survive the move like any other reallocation.
impl<A: Array> GrowableArray<A::Item> for SmallVec<A> {
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn capacity(&self) -> usize {
        SmallVec::capacity(self)
    }

    fn as_slice(&self) -> &[A::Item] {
        SmallVec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        SmallVec::as_mut_slice(self)
    }

    fn insert(&mut self, index: usize, value: A::Item) {
        SmallVec::insert(self, index, value);
    }

    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = A::Item>,
    {
        self.insert_many(index, iter);
    }

    fn remove(&mut self, index: usize) -> A::Item {
        SmallVec::remove(self, index)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }

    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional);
    }

    fn reserve_exact(&mut self, additional: usize) {
        SmallVec::reserve_exact(self, additional);
    }
}
