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

/// A monitor that does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOpMonitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOpMonitor<T> {
    /// Creates a new `NoOpMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> ScanMonitor<T> for NoOpMonitor<T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn on_enter_scan(&mut self, _sequence: &Sequence<T>) {}

    #[inline(always)]
    fn on_reset(&mut self, _index: ElementIndex, _statistics: &ScanStatistics) {}

    #[inline(always)]
    fn on_improvement(&mut self, _best: &Subarray<T>, _statistics: &ScanStatistics) {}

    #[inline(always)]
    fn on_exit_scan(&mut self, _statistics: &ScanStatistics) {}
}
