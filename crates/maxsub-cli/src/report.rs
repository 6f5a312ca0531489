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

//! Text rendering of solve results.

use maxsub_model::subarray::Subarray;
use maxsub_search::stats::ScanStatistics;
use num_traits::{PrimInt, Signed};

/// The one-line report printed for every solved array.
pub fn result_line<T>(subarray: &Subarray<T>) -> String
where
    T: PrimInt + Signed + std::fmt::Display,
{
    format!(
        "A maximum subarray value is {} from positions {} to {}",
        subarray.sum(),
        subarray.start().get(),
        subarray.end().get()
    )
}

/// The improvement trail, one indented line per best-so-far subarray.
pub fn trail_lines<T>(trail: &[Subarray<T>]) -> Vec<String>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    trail
        .iter()
        .enumerate()
        .map(|(step, s)| {
            format!(
                "  step {}: sum {} over positions {} to {}",
                step + 1,
                s.sum(),
                s.start().get(),
                s.end().get()
            )
        })
        .collect()
}

/// The statistics block, indented under the result line.
pub fn statistics_block(statistics: &ScanStatistics) -> String {
    statistics
        .to_string()
        .lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
