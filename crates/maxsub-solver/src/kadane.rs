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

//! # Linear-Scan Solver
//!
//! Single left-to-right pass over the input, O(n) time and O(1) extra
//! space. The scan keeps two pieces of state:
//!
//! - the *running* subarray, the best subarray ending at the current
//!   position (its sum floored at zero), and
//! - the *best-so-far* subarray over everything scanned.
//!
//! At position `i` the running sum is extended by `a[i]`. If that candidate
//! is strictly negative the running subarray is abandoned and the next one
//! starts at `i + 1`; a candidate of exactly zero is kept, which preserves
//! the earliest start when prefixes cancel out. Otherwise the running sum
//! becomes the candidate, and it replaces the best-so-far subarray only on
//! a strict improvement. The reported subarray is therefore the first
//! optimum discovered: the one with the smallest end, and for that end the
//! smallest start.
//!
//! Input without a positive element is rejected before scanning unless the
//! guard is turned off, in which case the result is the degenerate
//! `(0, 0, 0)` triple. Sums that leave the range of `T` abort the scan with
//! `SolveError::Overflow`.

use maxsub_model::{index::ElementIndex, sequence::Sequence, subarray::Subarray};
use maxsub_search::{
    error::{SolveError, SolveResult},
    monitor::{no_op::NoOpMonitor, scan_monitor::ScanMonitor},
    num::SolverNumeric,
    result::SolveOutcome,
    solver::SubarraySolver,
    stats::ScanStatistics,
};
use std::time::Instant;

/// Solves `values` with a default `KadaneSolver` and returns the reported
/// subarray.
///
/// # Errors
///
/// - `SolveError::Empty` if `values` is empty.
/// - `SolveError::NoPositiveElement` if no element is strictly positive.
/// - `SolveError::Overflow` if the maximum sum does not fit `T`.
///
/// # Examples
///
/// ```rust
/// use maxsub_solver::kadane::solve;
///
/// let best = solve(&[1_i32, -1, 1]).unwrap();
/// assert_eq!(best.into_triple(), (1, 0, 0));
/// ```
pub fn solve<T>(values: &[T]) -> SolveResult<Subarray<T>>
where
    T: SolverNumeric,
{
    let sequence = Sequence::from_slice(values)?;
    KadaneSolver::new()
        .solve(&sequence)
        .map(SolveOutcome::into_subarray)
}

/// The linear-scan maximum-subarray solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KadaneSolver<T> {
    require_positive: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for KadaneSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KadaneSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a solver that rejects input without a positive element.
    #[inline]
    pub fn new() -> Self {
        KadaneSolverBuilder::new().build()
    }

    /// Returns `true` if input without a positive element is rejected.
    #[inline]
    pub fn requires_positive(&self) -> bool {
        self.require_positive
    }

    /// Solves `sequence` without observing the scan.
    #[inline]
    pub fn solve(&mut self, sequence: &Sequence<T>) -> SolveResult<SolveOutcome<T>> {
        self.solve_with_monitor(sequence, &mut NoOpMonitor::new())
    }

    /// Solves `sequence`, reporting scan events to `monitor`.
    ///
    /// The precondition check runs before `on_enter_scan`, so a rejected
    /// input produces no monitor events at all.
    pub fn solve_with_monitor<M>(
        &mut self,
        sequence: &Sequence<T>,
        monitor: &mut M,
    ) -> SolveResult<SolveOutcome<T>>
    where
        M: ScanMonitor<T> + ?Sized,
    {
        if self.require_positive && !sequence.has_positive() {
            return Err(SolveError::NoPositiveElement);
        }

        let start_time = Instant::now();
        let mut stats = ScanStatistics::default();
        monitor.on_enter_scan(sequence);

        let origin = ElementIndex::new(0);
        let mut running_sum = T::ZERO;
        let mut running_start = origin;
        let mut best = Subarray::new(T::ZERO, origin, origin);

        for (index, value) in sequence.iter() {
            stats.on_element();

            // The running sum is never negative, so only an upward overflow
            // is possible here.
            let candidate = running_sum
                .checked_add_val(value)
                .ok_or(SolveError::Overflow { index })?;

            if candidate < T::ZERO {
                running_sum = T::ZERO;
                running_start = index.next();
                stats.on_reset();
                monitor.on_reset(index, &stats);
                continue;
            }

            running_sum = candidate;
            if running_sum > best.sum() {
                best = Subarray::new(running_sum, running_start, index);
                stats.on_improvement();
                monitor.on_improvement(&best, &stats);
            }
        }

        stats.set_scan_duration(start_time.elapsed());
        monitor.on_exit_scan(&stats);

        Ok(SolveOutcome::new(best, stats))
    }
}

impl<T> SubarraySolver<T> for KadaneSolver<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "KadaneSolver"
    }

    fn solve_monitored(
        &mut self,
        sequence: &Sequence<T>,
        monitor: &mut dyn ScanMonitor<T>,
    ) -> SolveResult<SolveOutcome<T>> {
        self.solve_with_monitor(sequence, monitor)
    }
}

/// Builder for `KadaneSolver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KadaneSolverBuilder<T> {
    require_positive: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for KadaneSolverBuilder<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KadaneSolverBuilder<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            require_positive: true,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Whether input without a strictly positive element is rejected with
    /// `SolveError::NoPositiveElement` (the default) or scanned anyway.
    #[inline]
    pub fn require_positive(mut self, yes: bool) -> Self {
        self.require_positive = yes;
        self
    }

    #[inline]
    pub fn build(self) -> KadaneSolver<T> {
        KadaneSolver {
            require_positive: self.require_positive,
            _phantom: std::marker::PhantomData,
        }
    }
}
