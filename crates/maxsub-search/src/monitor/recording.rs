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

use crate::{monitor::scan_monitor::ScanMonitor, stats::ScanStatistics};
use maxsub_model::{index::ElementIndex, sequence::Sequence, subarray::Subarray};
use num_traits::{PrimInt, Signed};

/// Records the trail of best-so-far subarrays and the reset positions of
/// the most recent scan.
///
/// The last entry of `improvements()` is the reported subarray, and the
/// sums in the trail are strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordingMonitor<T> {
    improvements: Vec<Subarray<T>>,
    resets: Vec<ElementIndex>,
    finished: bool,
}

impl<T> RecordingMonitor<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            improvements: Vec::new(),
            resets: Vec::new(),
            finished: false,
        }
    }

    /// Every best-so-far subarray, in discovery order.
    #[inline]
    pub fn improvements(&self) -> &[Subarray<T>] {
        &self.improvements
    }

    /// Every position at which the running subarray was abandoned.
    #[inline]
    pub fn resets(&self) -> &[ElementIndex] {
        &self.resets
    }

    /// The last recorded best-so-far subarray.
    #[inline]
    pub fn last(&self) -> Option<&Subarray<T>> {
        self.improvements.last()
    }

    /// Returns `true` if the last scan ran to completion.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<T> ScanMonitor<T> for RecordingMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_enter_scan(&mut self, _sequence: &Sequence<T>) {
        self.improvements.clear();
        self.resets.clear();
        self.finished = false;
    }

    fn on_reset(&mut self, index: ElementIndex, _statistics: &ScanStatistics) {
        self.resets.push(index);
    }

    fn on_improvement(&mut self, best: &Subarray<T>, _statistics: &ScanStatistics) {
        debug_assert!(
            self.improvements.last().is_none_or(|prev| prev.sum() < best.sum()),
            "called `RecordingMonitor::on_improvement` with a non-increasing sum"
        );

        self.improvements.push(*best);
    }

    fn on_exit_scan(&mut self, _statistics: &ScanStatistics) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ei(i: usize) -> ElementIndex {
        ElementIndex::new(i)
    }

    #[test]
    fn test_records_events_and_clears_on_enter() {
        let seq = Sequence::new(vec![-1_i64, 2, 3]).unwrap();
        let stats = ScanStatistics::default();
        let mut monitor = RecordingMonitor::new();

        monitor.on_enter_scan(&seq);
        monitor.on_reset(ei(0), &stats);
        monitor.on_improvement(&Subarray::new(2, ei(1), ei(1)), &stats);
        monitor.on_improvement(&Subarray::new(5, ei(1), ei(2)), &stats);
        assert!(!monitor.is_finished());
        monitor.on_exit_scan(&stats);

        assert!(monitor.is_finished());
        assert_eq!(monitor.resets(), &[ei(0)]);
        assert_eq!(monitor.improvements().len(), 2);
        assert_eq!(monitor.last(), Some(&Subarray::new(5, ei(1), ei(2))));

        monitor.on_enter_scan(&seq);
        assert!(monitor.improvements().is_empty());
        assert!(monitor.resets().is_empty());
        assert!(!monitor.is_finished());
    }
}
