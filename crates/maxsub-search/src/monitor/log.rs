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
use std::time::Instant;

/// Emits scan events through `tracing`.
///
/// Entering and leaving a scan is logged at `DEBUG`; resets and
/// improvements, which happen once per element at most, at `TRACE`.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    label: String,
    start_time: Instant,
    best: Option<Subarray<T>>,
}

impl<T> LogMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `LogMonitor` whose events carry the given label, e.g.
    /// the name or position of the input being solved.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start_time: Instant::now(),
            best: None,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T> Default for LogMonitor<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new("scan")
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(label: {})", self.label)
    }
}

impl<T> ScanMonitor<T> for LogMonitor<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_scan(&mut self, sequence: &Sequence<T>) {
        self.start_time = Instant::now();
        self.best = None;
        tracing::debug!(label = %self.label, len = sequence.len(), "scan started");
    }

    fn on_reset(&mut self, index: ElementIndex, statistics: &ScanStatistics) {
        tracing::trace!(
            label = %self.label,
            index = index.get(),
            resets = statistics.resets,
            "running subarray reset"
        );
    }

    fn on_improvement(&mut self, best: &Subarray<T>, statistics: &ScanStatistics) {
        tracing::trace!(
            label = %self.label,
            sum = %best.sum(),
            start = best.start().get(),
            end = best.end().get(),
            improvements = statistics.improvements,
            "best subarray improved"
        );
        self.best = Some(*best);
    }

    fn on_exit_scan(&mut self, statistics: &ScanStatistics) {
        let elapsed = self.start_time.elapsed();
        match &self.best {
            Some(best) => tracing::debug!(
                label = %self.label,
                sum = %best.sum(),
                start = best.start().get(),
                end = best.end().get(),
                scanned = statistics.elements_scanned,
                resets = statistics.resets,
                improvements = statistics.improvements,
                elapsed_us = elapsed.as_micros() as u64,
                "scan finished"
            ),
            None => tracing::debug!(
                label = %self.label,
                scanned = statistics.elements_scanned,
                resets = statistics.resets,
                elapsed_us = elapsed.as_micros() as u64,
                "scan finished without a positive subarray"
            ),
        }
    }
}
