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

//! # Strongly Typed Indices
//!
//! Phantom-typed wrappers around `usize` so that positions from different
//! index spaces cannot be mixed up with each other or with plain counts.
//! `TypedIndex<T>` carries a tag `T: TypedIndexTag` that names the index
//! space and compiles down to a transparent `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use maxsub_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct SlotTag;
//! impl TypedIndexTag for SlotTag { const NAME: &'static str = "SlotIndex"; }
//!
//! type SlotIndex = TypedIndex<SlotTag>;
//! let s = SlotIndex::new(3);
//! assert_eq!(s.get(), 3);
//! assert_eq!(s.next().get(), 4);
//! assert_eq!(format!("{}", s), "SlotIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Checks if the index is zero.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }

    /// Returns the index immediately following this one.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the index is `usize::MAX`.
    #[inline(always)]
    pub const fn next(&self) -> Self {
        debug_assert!(
            self.index < usize::MAX,
            "called `TypedIndex::next` on an index at usize::MAX"
        );

        Self::new(self.index + 1)
    }
}

impl<T> Default for TypedIndex<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(index: TypedIndex<T>) -> Self {
        index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIndexTag for TestTag {
        const NAME: &'static str = "TestIndex";
    }

    type TestIndex = TypedIndex<TestTag>;

    #[test]
    fn test_new_get_and_default() {
        assert_eq!(TestIndex::new(7).get(), 7);
        assert!(TestIndex::default().is_zero());
        assert!(!TestIndex::new(1).is_zero());
    }

    #[test]
    fn test_next_advances_by_one() {
        let idx = TestIndex::new(41);
        assert_eq!(idx.next(), TestIndex::new(42));
    }

    #[test]
    fn test_ordering_follows_underlying_value() {
        assert!(TestIndex::new(2) < TestIndex::new(3));
        assert_eq!(TestIndex::new(5).max(TestIndex::new(4)), TestIndex::new(5));
    }

    #[test]
    fn test_display_and_debug_use_tag_name() {
        let idx = TestIndex::new(12);
        assert_eq!(format!("{}", idx), "TestIndex(12)");
        assert_eq!(format!("{:?}", idx), "TestIndex(12)");
    }

    #[test]
    fn test_usize_conversions() {
        let idx: TestIndex = 9usize.into();
        let raw: usize = idx.into();
        assert_eq!(raw, 9);
    }
}
