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
use maxsub_model::{index::ElementIndex, sequence::Sequence, subarray::Subarray};
use num_traits::{PrimInt, Signed};

/// Observer of a single left-to-right scan.
///
/// Hooks are called in this order: `on_enter_scan` once, then any mix of
/// `on_reset` and `on_improvement` as the scan advances, then
/// `on_exit_scan` once. `on_exit_scan` is not called when the scan aborts
/// with an error.
pub trait ScanMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str;

    /// Called before the first element is visited.
    fn on_enter_scan(&mut self, sequence: &Sequence<T>);

    /// Called when the running subarray is abandoned at `index`.
    fn on_reset(&mut self, index: ElementIndex, statistics: &ScanStatistics);

    /// Called when `best` replaces the best-so-far subarray.
    fn on_improvement(&mut self, best: &Subarray<T>, statistics: &ScanStatistics);

    /// Called after the last element has been visited.
    fn on_exit_scan(&mut self, statistics: &ScanStatistics);
}

impl<T, M> ScanMonitor<T> for &mut M
where
    T: PrimInt + Signed,
    M: ScanMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_scan(&mut self, sequence: &Sequence<T>) {
        (**self).on_enter_scan(sequence)
    }

    #[inline(always)]
    fn on_reset(&mut self, index: ElementIndex, statistics: &ScanStatistics) {
        (**self).on_reset(index, statistics)
    }

    #[inline(always)]
    fn on_improvement(&mut self, best: &Subarray<T>, statistics: &ScanStatistics) {
        (**self).on_improvement(best, statistics)
    }

    #[inline(always)]
    fn on_exit_scan(&mut self, statistics: &ScanStatistics) {
        (**self).on_exit_scan(statistics)
    }
}

impl<T> std::fmt::Debug for dyn ScanMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn ScanMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanMonitor({})", self.name())
    }
}
