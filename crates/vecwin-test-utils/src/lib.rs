//! Test utilities and mock backing arrays for vecwin development.
//!
//! Provides [`TrackingVec`], a [`GrowableArray`] that counts how often its
//! storage relocates, and small fixtures in [`fixtures`] for building test
//! arrays.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::ops::Range;

use vecwin_core::GrowableArray;

/// A `Vec`-backed array that records every relocation of its storage.
///
/// A relocation is any mutating call after which the buffer's address
/// differs from before. Zero-capacity buffers have no address, so moving
/// from or to an empty allocation is not counted.
#[derive(Clone, Debug, Default)]
pub struct TrackingVec<T> {
    data: Vec<T>,
    relocations: usize,
}

impl<T> TrackingVec<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            relocations: 0,
        }
    }

    /// Start tracking an existing vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            relocations: 0,
        }
    }

    /// Number of relocations observed since creation or the last reset.
    pub fn relocations(&self) -> usize {
        self.relocations
    }

    pub fn reset_relocations(&mut self) {
        self.relocations = 0;
    }

    /// Current address of the storage, or `None` when nothing is allocated.
    pub fn storage_addr(&self) -> Option<usize> {
        (self.data.capacity() > 0).then(|| self.data.as_ptr() as usize)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn tracked<R>(&mut self, op: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let before = self.storage_addr();
        let out = op(&mut self.data);
        let after = self.storage_addr();
        if before.is_some() && after.is_some() && before != after {
            self.relocations += 1;
        }
        out
    }
}

impl<T> GrowableArray<T> for TrackingVec<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn capacity(&self) -> usize {
        self.data.capacity()
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn insert(&mut self, index: usize, value: T) {
        self.tracked(|v| v.insert(index, value));
    }

    fn insert_iter<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tracked(|v| {
            v.splice(index..index, iter);
        });
    }

    fn remove(&mut self, index: usize) -> T {
        self.tracked(|v| v.remove(index))
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.tracked(|v| {
            v.drain(range);
        });
    }

    fn reserve(&mut self, additional: usize) {
        self.tracked(|v| v.reserve(additional));
    }

    fn reserve_exact(&mut self, additional: usize) {
        self.tracked(|v| v.reserve_exact(additional));
    }
}

impl<T> From<Vec<T>> for TrackingVec<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: PartialEq> PartialEq<[T]> for TrackingVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.data.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for TrackingVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data.as_slice() == other.as_slice()
    }
}
