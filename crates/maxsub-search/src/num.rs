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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the solvers. `SolverNumeric` requires a signed
//! primitive integer with by-value checked addition, so sums either fit the
//! element type or are reported as an overflow, plus the formatting and
//! thread-safety bounds the monitors and the batch solver need.
//!
//! All of `i8`, `i16`, `i32`, `i64`, `i128` and `isize` satisfy it.

use maxsub_core::num::{constants::Zero, ops::checked_arithmetic::CheckedAddVal};
use num_traits::{PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for element types accepted by the solvers.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + Zero
    + CheckedAddVal
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + Zero
        + CheckedAddVal
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + Hash
{
}
