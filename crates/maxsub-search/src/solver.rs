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

use crate::{
    error::SolveResult,
    monitor::{no_op::NoOpMonitor, scan_monitor::ScanMonitor},
    num::SolverNumeric,
    result::SolveOutcome,
};
use maxsub_model::sequence::Sequence;

/// A maximum-subarray algorithm.
///
/// Implementations hold configuration only, so a solver can be cloned into
/// worker threads and every call is independent of the previous ones.
pub trait SubarraySolver<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str;

    /// Solves `sequence`, reporting scan events to `monitor`.
    fn solve_monitored(
        &mut self,
        sequence: &Sequence<T>,
        monitor: &mut dyn ScanMonitor<T>,
    ) -> SolveResult<SolveOutcome<T>>;

    /// Solves `sequence` without observing the scan.
    #[inline]
    fn solve_sequence(&mut self, sequence: &Sequence<T>) -> SolveResult<SolveOutcome<T>> {
        self.solve_monitored(sequence, &mut NoOpMonitor::new())
    }
}

impl<T> std::fmt::Debug for dyn SubarraySolver<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubarraySolver({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SubarraySolver<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubarraySolver({})", self.name())
    }
}
