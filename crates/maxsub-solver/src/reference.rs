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

//! Reference inputs with known results.
//!
//! Each case lists the array and the `(sum, start, end)` triple a solver
//! must report for it, including the tie-break between equal-sum optima.

/// An input array with its expected `(sum, start, end)` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCase {
    pub values: &'static [i64],
    pub expected: (i64, usize, usize),
}

/// The seven reference arrays run by the command line tool when it is
/// given no input.
pub const REFERENCE_CASES: [ReferenceCase; 7] = [
    ReferenceCase {
        values: &[-4, -2, -6, 5, -6, 9],
        expected: (9, 5, 5),
    },
    ReferenceCase {
        values: &[-4, 2, -6, 5, -6, 4],
        expected: (5, 3, 3),
    },
    ReferenceCase {
        values: &[9, -2, -6, 5, -6, 4],
        expected: (9, 0, 0),
    },
    ReferenceCase {
        values: &[-4, -2, -6, 8, -6, 9],
        expected: (11, 3, 5),
    },
    ReferenceCase {
        values: &[-4, 2, -6, 8, -2, 4, 2, -9, 8],
        expected: (12, 3, 6),
    },
    ReferenceCase {
        values: &[-2, 1, -3, 4, -1, 2, 1, -5, 4],
        expected: (6, 3, 6),
    },
    ReferenceCase {
        values: &[
            -4, 2, -6, 8, -2, 4, 2, -9, 8, -2, 1, -3, 4, -1, 2, 1, -5, 4,
        ],
        expected: (13, 3, 15),
    },
];
