// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The input of a maximum-subarray solve.
//!
//! A `Sequence` owns its elements and is guaranteed to be non-empty, which
//! moves the "at least one element" precondition out of the solvers and
//! into construction. The stronger precondition, that at least one element
//! is strictly positive, is deliberately *not* enforced here: solvers decide
//! whether to check it, so the degenerate all-non-positive case can still be
//! observed when asked for.

use crate::index::ElementIndex;
use num_traits::{PrimInt, Signed};
use thiserror::Error;

/// The error type for `Sequence` construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The sequence has no elements.
    #[error("a sequence must contain at least one element")]
    Empty,
}

/// An ordered, non-empty sequence of signed integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    values: Vec<T>,
}

impl<T> Sequence<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Sequence` from the given values.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` if `values` is empty.
    pub fn new(values: Vec<T>) -> Result<Self, SequenceError> {
        if values.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { values })
    }

    /// Creates a new `Sequence` by copying the given slice.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` if `values` is empty.
    #[inline]
    pub fn from_slice(values: &[T]) -> Result<Self, SequenceError> {
        Self::new(values.to_vec())
    }

    /// Returns the number of elements. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: ElementIndex) -> T {
        let i = index.get();
        assert!(
            i < self.len(),
            "called `Sequence::get` with element index out of bounds: the len is {} but the index is {}",
            self.len(),
            i
        );

        self.values[i]
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns an iterator over `(ElementIndex, value)` pairs.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ElementIndex, T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (ElementIndex::new(i), v))
    }

    /// Returns `true` if at least one element is strictly positive.
    #[inline]
    pub fn has_positive(&self) -> bool {
        self.first_positive().is_some()
    }

    /// Returns the index of the first strictly positive element, if any.
    #[inline]
    pub fn first_positive(&self) -> Option<ElementIndex> {
        self.values
            .iter()
            .position(|v| v.is_positive())
            .map(ElementIndex::new)
    }

    /// Returns the sum of the elements in `start..=end`, or `None` if the
    /// summation overflows `T`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` is out of bounds.
    pub fn range_sum(&self, start: ElementIndex, end: ElementIndex) -> Option<T> {
        assert!(
            start <= end,
            "called `Sequence::range_sum` with start {} after end {}",
            start.get(),
            end.get()
        );
        assert!(
            end.get() < self.len(),
            "called `Sequence::range_sum` with end index out of bounds: the len is {} but the index is {}",
            self.len(),
            end.get()
        );

        self.values[start.get()..=end.get()]
            .iter()
            .try_fold(T::zero(), |acc, v| acc.checked_add(v))
    }

    /// Consumes the sequence and returns the underlying vector.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T> TryFrom<Vec<T>> for Sequence<T>
where
    T: PrimInt + Signed,
{
    type Error = SequenceError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> std::fmt::Display for Sequence<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ei(i: usize) -> ElementIndex {
        ElementIndex::new(i)
    }

    #[test]
    fn test_empty_is_rejected() {
        let res = Sequence::<i64>::new(Vec::new());
        assert_eq!(res, Err(SequenceError::Empty));
        assert_eq!(Sequence::<i32>::from_slice(&[]), Err(SequenceError::Empty));
    }

    #[test]
    fn test_accessors() {
        let seq = Sequence::new(vec![-4_i64, 2, -6, 5]).unwrap();
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.get(ei(3)), 5);
        assert_eq!(seq.as_slice(), &[-4, 2, -6, 5]);

        let pairs: Vec<(usize, i64)> = seq.iter().map(|(i, v)| (i.get(), v)).collect();
        assert_eq!(pairs, vec![(0, -4), (1, 2), (2, -6), (3, 5)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let seq = Sequence::new(vec![1_i32]).unwrap();
        let _ = seq.get(ei(1));
    }

    #[test]
    fn test_first_positive() {
        let seq = Sequence::new(vec![-1_i64, 0, -3, 7, 2]).unwrap();
        assert_eq!(seq.first_positive(), Some(ei(3)));
        assert!(seq.has_positive());

        let none = Sequence::new(vec![-1_i64, 0, -3]).unwrap();
        assert_eq!(none.first_positive(), None);
        assert!(!none.has_positive());
    }

    #[test]
    fn test_range_sum_inclusive() {
        let seq = Sequence::new(vec![-4_i64, -2, -6, 8, -6, 9]).unwrap();
        assert_eq!(seq.range_sum(ei(3), ei(5)), Some(11));
        assert_eq!(seq.range_sum(ei(0), ei(0)), Some(-4));
        assert_eq!(seq.range_sum(ei(0), ei(5)), Some(-1));
    }

    #[test]
    fn test_range_sum_overflow_is_none() {
        let seq = Sequence::new(vec![i8::MAX, 1]).unwrap();
        assert_eq!(seq.range_sum(ei(0), ei(1)), None);
        assert_eq!(seq.range_sum(ei(0), ei(0)), Some(i8::MAX));
    }

    #[test]
    fn test_display() {
        let seq = Sequence::new(vec![9_i64, -2, 0]).unwrap();
        assert_eq!(format!("{}", seq), "[9, -2, 0]");
    }

    #[test]
    fn test_try_from_and_into_inner() {
        let seq: Sequence<i64> = vec![1, 2, 3].try_into().unwrap();
        assert_eq!(seq.into_inner(), vec![1, 2, 3]);
    }
}
