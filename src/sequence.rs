//! Read-only, random-access views over index-addressed native result sets.
//!
//! The engine exposes argument lists as "count, then element N" and child
//! lists are collected into the same shape, so both surface as a
//! [`Sequence`].

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};

type Producer<'a, T> = Box<dyn Fn(usize) -> Result<T> + 'a>;

/// A fixed-length sequence whose elements are produced on access.
///
/// Nothing is cached; every access calls the producer again, and producer
/// failures are returned unchanged.
pub struct Sequence<'a, T> {
    len: usize,
    producer: Producer<'a, T>,
}

impl<'a, T> Sequence<'a, T> {
    pub fn new(len: usize, producer: impl Fn(usize) -> Result<T> + 'a) -> Self {
        Self {
            len,
            producer: Box::new(producer),
        }
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::new(0, |index| Err(Error::IndexOutOfRange { index, len: 0 }))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        (self.producer)(index)
    }

    /// Access without the bounds check. The caller guarantees `index < len()`;
    /// out-of-range indices reach the producer as-is.
    pub fn get_unchecked(&self, index: usize) -> Result<T> {
        (self.producer)(index)
    }

    pub fn front(&self) -> Result<T> {
        self.at(0)
    }

    pub fn back(&self) -> Result<T> {
        match self.len {
            0 => Err(Error::IndexOutOfRange { index: 0, len: 0 }),
            len => self.at(len - 1),
        }
    }

    /// Forward iterator; call `.rev()` for reverse order.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            seq: self,
            front: 0,
            back: self.len,
        }
    }

    /// Produce every element, stopping at the first failure.
    pub fn try_collect_vec(&self) -> Result<Vec<T>> {
        self.iter().collect()
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").field("len", &self.len).finish_non_exhaustive()
    }
}

/// Iterator over a [`Sequence`]. Independent iterators may run side by side.
pub struct Iter<'s, 'a, T> {
    seq: &'s Sequence<'a, T>,
    front: usize,
    back: usize,
}

impl<T> Iterator for Iter<'_, '_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(self.seq.get_unchecked(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.get_unchecked(self.back))
    }
}

impl<T> ExactSizeIterator for Iter<'_, '_, T> {}

impl<T> FusedIterator for Iter<'_, '_, T> {}

impl<'s, 'a, T> IntoIterator for &'s Sequence<'a, T> {
    type Item = Result<T>;
    type IntoIter = Iter<'s, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
