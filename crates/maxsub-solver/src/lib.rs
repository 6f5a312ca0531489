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

//! # Maxsub Solver
//!
//! Algorithms for the maximum-subarray problem: for an array of integers,
//! find a contiguous subarray with the largest sum and report the sum with
//! the inclusive start and end positions.
//!
//! ## Modules
//!
//! - `kadane`: the single-pass linear scan and the `solve` convenience
//!   function.
//! - `brute_force`: an O(n²) enumeration used as a reference.
//! - `batch`: solves many inputs in parallel on scoped threads.
//! - `reference`: the reference inputs and their expected results.
//!
//! ## Usage
//!
//! ```rust
//! use maxsub_solver::kadane::solve;
//!
//! let best = solve(&[-4_i64, -2, -6, 8, -6, 9]).unwrap();
//! assert_eq!(best.into_triple(), (11, 3, 5));
//! ```

pub mod batch;
pub mod brute_force;
pub mod kadane;
pub mod reference;
