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

/// A composite monitor that forwards every event to all of its monitors,
/// in insertion order.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn ScanMonitor<T> + 'a>>,
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names().join(", "))
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names().join(", "))
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ScanMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ScanMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if there are no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    fn names(&self) -> Vec<&str> {
        self.monitors.iter().map(|m| m.name()).collect()
    }
}

impl<'a, T> ScanMonitor<T> for CompositeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_scan(&mut self, sequence: &Sequence<T>) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_scan(sequence);
        }
    }

    fn on_reset(&mut self, index: ElementIndex, statistics: &ScanStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_reset(index, statistics);
        }
    }

    fn on_improvement(&mut self, best: &Subarray<T>, statistics: &ScanStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_improvement(best, statistics);
        }
    }

    fn on_exit_scan(&mut self, statistics: &ScanStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_scan(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOpMonitor, recording::RecordingMonitor};

    #[test]
    fn test_forwards_to_every_monitor() {
        let seq = Sequence::new(vec![4_i64, -9, 6]).unwrap();
        let stats = ScanStatistics::default();
        let mut first = RecordingMonitor::new();
        let mut second = RecordingMonitor::new();

        {
            let mut composite = CompositeMonitor::with_capacity(2);
            composite.add_monitor(&mut first);
            composite.add_monitor(&mut second);
            assert_eq!(composite.len(), 2);

            composite.on_enter_scan(&seq);
            composite.on_improvement(
                &Subarray::new(4, ElementIndex::new(0), ElementIndex::new(0)),
                &stats,
            );
            composite.on_reset(ElementIndex::new(1), &stats);
            composite.on_exit_scan(&stats);
        }

        for recorded in [&first, &second] {
            assert!(recorded.is_finished());
            assert_eq!(recorded.improvements().len(), 1);
            assert_eq!(recorded.resets(), &[ElementIndex::new(1)]);
        }
    }

    #[test]
    fn test_display_lists_names() {
        let mut composite = CompositeMonitor::<i64>::new();
        assert!(composite.is_empty());
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor_boxed(Box::new(RecordingMonitor::new()));

        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([NoOpMonitor, RecordingMonitor])"
        );
    }
}
