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

use crate::index::ElementIndex;
use num_traits::{PrimInt, Signed};

/// A contiguous subarray reported by a solver.
///
/// `start` and `end` are inclusive and `start <= end` always holds, so a
/// `Subarray` covers at least one element. A `sum` of zero marks the
/// degenerate result of a scan over input without any positive element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subarray<T> {
    sum: T,
    start: ElementIndex,
    end: ElementIndex,
}

impl<T> Subarray<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `Subarray`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(sum: T, start: ElementIndex, end: ElementIndex) -> Self {
        assert!(
            start <= end,
            "called `Subarray::new` with start {} after end {}",
            start.get(),
            end.get()
        );

        Self { sum, start, end }
    }

    /// The sum of the elements in `start..=end`.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// The inclusive start position.
    #[inline]
    pub fn start(&self) -> ElementIndex {
        self.start
    }

    /// The inclusive end position.
    #[inline]
    pub fn end(&self) -> ElementIndex {
        self.end
    }

    /// The number of elements covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.get() - self.start.get() + 1
    }

    /// Always `false`: a subarray covers at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the sum is zero, i.e. no positive subarray was found.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.sum.is_zero()
    }

    /// The covered positions as a `usize` range.
    #[inline]
    pub fn range(&self) -> std::ops::RangeInclusive<usize> {
        self.start.get()..=self.end.get()
    }

    /// Returns `(sum, start, end)` with plain `usize` positions.
    #[inline]
    pub fn into_triple(self) -> (T, usize, usize) {
        (self.sum, self.start.get(), self.end.get())
    }
}

impl<T> std::fmt::Display for Subarray<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Subarray(sum={}, {}..={})",
            self.sum,
            self.start.get(),
            self.end.get()
        )
    }
}
