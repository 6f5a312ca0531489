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

use core::ops::Add;

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`, but takes
/// both operands by value, unlike `num_traits::CheckedAdd`.
///
/// # Examples
///
/// ```rust
/// # use maxsub_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: i8 = 100;
/// assert_eq!(a.checked_add_val(27), Some(127));
/// assert_eq!(a.checked_add_val(28), None); // Overflow occurs
/// assert_eq!((-100_i8).checked_add_val(-29), None); // Underflow occurs
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_add_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }
        )*
    };
}

checked_add_impl_val!(u8, u16, u32, u64, usize, u128);
checked_add_impl_val!(i8, i16, i32, i64, isize, i128);

#[cfg(test)]
mod tests {
    use super::CheckedAddVal;

    #[test]
    fn test_checked_add_in_range() {
        assert_eq!(5_i32.checked_add_val(-7), Some(-2));
        assert_eq!(0_i64.checked_add_val(i64::MAX), Some(i64::MAX));
        assert_eq!(250_u8.checked_add_val(5), Some(255));
    }

    #[test]
    fn test_checked_add_overflow_both_directions() {
        assert_eq!(i64::MAX.checked_add_val(1), None);
        assert_eq!(i64::MIN.checked_add_val(-1), None);
        assert_eq!(u8::MAX.checked_add_val(1), None);
    }

    #[test]
    fn test_checked_add_mixed_signs_never_overflow() {
        assert_eq!(i32::MAX.checked_add_val(i32::MIN), Some(-1));
        assert_eq!(i32::MIN.checked_add_val(i32::MAX), Some(-1));
    }
}
