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

use maxsub_model::{index::ElementIndex, sequence::SequenceError};
use thiserror::Error;

/// The failure modes of a maximum-subarray solve.
///
/// All of them are detected synchronously. `NoPositiveElement` is raised
/// before the scan starts; `Overflow` aborts the scan at the element whose
/// addition does not fit the element type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The input has no elements.
    #[error("input sequence is empty")]
    Empty,
    /// The input has no strictly positive element, so the result would be
    /// the degenerate empty subarray.
    #[error("input sequence contains no positive element")]
    NoPositiveElement,
    /// A running or candidate sum overflowed the element type.
    #[error("sum overflowed the element type at position {}", .index.get())]
    Overflow { index: ElementIndex },
}

impl From<SequenceError> for SolveError {
    fn from(e: SequenceError) -> Self {
        match e {
            SequenceError::Empty => SolveError::Empty,
        }
    }
}

/// Convenient alias for solver results.
pub type SolveResult<T> = std::result::Result<T, SolveError>;
