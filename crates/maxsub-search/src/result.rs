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

use crate::stats::ScanStatistics;
use maxsub_model::subarray::Subarray;
use num_traits::{PrimInt, Signed};

/// The result of a successful solve: the reported subarray and the
/// statistics of the scan that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome<T> {
    subarray: Subarray<T>,
    statistics: ScanStatistics,
}

impl<T> SolveOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(subarray: Subarray<T>, statistics: ScanStatistics) -> Self {
        Self {
            subarray,
            statistics,
        }
    }

    #[inline]
    pub fn subarray(&self) -> &Subarray<T> {
        &self.subarray
    }

    #[inline]
    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_subarray(self) -> Subarray<T> {
        self.subarray
    }

    #[inline]
    pub fn into_parts(self) -> (Subarray<T>, ScanStatistics) {
        (self.subarray, self.statistics)
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolveOutcome({}, scanned={}, resets={}, improvements={})",
            self.subarray,
            self.statistics.elements_scanned,
            self.statistics.resets,
            self.statistics.improvements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ScanStatisticsBuilder;
    use maxsub_model::index::ElementIndex;

    #[test]
    fn test_accessors_and_display() {
        let sub = Subarray::new(9_i64, ElementIndex::new(5), ElementIndex::new(5));
        let stats = ScanStatisticsBuilder::new()
            .elements_scanned(6)
            .resets(3)
            .improvements(2)
            .build();
        let outcome = SolveOutcome::new(sub, stats);

        assert_eq!(outcome.subarray().sum(), 9);
        assert_eq!(outcome.statistics().resets, 3);
        assert_eq!(
            format!("{}", outcome),
            "SolveOutcome(Subarray(sum=9, 5..=5), scanned=6, resets=3, improvements=2)"
        );

        let (s, st) = outcome.into_parts();
        assert_eq!(s, sub);
        assert_eq!(st, stats);
    }
}
