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

//! Exhaustive O(n²) reference solver.
//!
//! Every subarray is visited in order of increasing end and, for a fixed
//! end, increasing start, and the best one is replaced only on a strict
//! improvement. That order is exactly the order in which the linear scan
//! discovers optima, so both solvers agree on the reported subarray and
//! not only on its sum. Sums are accumulated in `i128`. Once a suffix sum
//! falls below `T::MIN` (or below `i128::MIN` for `T = i128`), the walk for
//! that end stops: every start further left extends a subarray already seen
//! at an earlier end by a negative amount, so none of them can be a strict
//! improvement. A sum above `T::MAX` is reported as `SolveError::Overflow`
//! at the end position where it is first seen.
//!
//! Meant as a test oracle and for the command line `--verify` flag, not for
//! large inputs.

use maxsub_model::{index::ElementIndex, sequence::Sequence, subarray::Subarray};
use maxsub_search::{
    error::{SolveError, SolveResult},
    monitor::{no_op::NoOpMonitor, scan_monitor::ScanMonitor},
    num::SolverNumeric,
    result::SolveOutcome,
    solver::SubarraySolver,
    stats::ScanStatistics,
};
use num_traits::NumCast;
use std::time::Instant;

/// The brute-force maximum-subarray solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForceSolver<T> {
    require_positive: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for BruteForceSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BruteForceSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a solver that rejects input without a positive element.
    #[inline]
    pub fn new() -> Self {
        Self {
            require_positive: true,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Whether input without a strictly positive element is rejected.
    #[inline]
    pub fn require_positive(mut self, yes: bool) -> Self {
        self.require_positive = yes;
        self
    }

    #[inline]
    pub fn solve(&mut self, sequence: &Sequence<T>) -> SolveResult<SolveOutcome<T>> {
        self.solve_with_monitor(sequence, &mut NoOpMonitor::new())
    }

    /// Solves `sequence`, reporting every strict improvement to `monitor`.
    /// `elements_scanned` counts element additions, n(n+1)/2 in total.
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

        let values = sequence.as_slice();
        let upper = T::max_value().to_i128();
        let lower = T::min_value().to_i128();

        let mut best_sum: i128 = 0;
        let mut best = Subarray::new(T::ZERO, ElementIndex::new(0), ElementIndex::new(0));

        for end in 0..values.len() {
            let end_index = ElementIndex::new(end);
            let overflow = SolveError::Overflow { index: end_index };

            // Best start for this end; walking leftwards with `>=` lets the
            // smallest start win among equal sums.
            let mut suffix: i128 = 0;
            let mut local: Option<(i128, usize)> = None;
            for start in (0..=end).rev() {
                stats.on_element();
                let value = values[start].to_i128().ok_or(overflow.clone())?;
                let Some(next) = suffix.checked_add(value) else {
                    if value < 0 {
                        break;
                    }
                    return Err(overflow);
                };
                suffix = next;

                if upper.is_some_and(|u| suffix > u) {
                    return Err(overflow);
                }
                if lower.is_some_and(|l| suffix < l) {
                    break;
                }
                if local.is_none_or(|(sum, _)| suffix >= sum) {
                    local = Some((suffix, start));
                }
            }

            let Some((sum, start)) = local else {
                continue;
            };
            if sum > best_sum {
                let typed: T = <T as NumCast>::from(sum).ok_or(overflow)?;
                best_sum = sum;
                best = Subarray::new(typed, ElementIndex::new(start), end_index);
                stats.on_improvement();
                monitor.on_improvement(&best, &stats);
            }
        }

        stats.set_scan_duration(start_time.elapsed());
        monitor.on_exit_scan(&stats);

        Ok(SolveOutcome::new(best, stats))
    }
}

impl<T> SubarraySolver<T> for BruteForceSolver<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "BruteForceSolver"
    }

    fn solve_monitored(
        &mut self,
        sequence: &Sequence<T>,
        monitor: &mut dyn ScanMonitor<T>,
    ) -> SolveResult<SolveOutcome<T>> {
        self.solve_with_monitor(sequence, monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kadane::KadaneSolver, reference::REFERENCE_CASES};
    use maxsub_search::monitor::recording::RecordingMonitor;

    fn seq(values: &[i64]) -> Sequence<i64> {
        Sequence::from_slice(values).unwrap()
    }

    #[test]
    fn test_reference_cases() {
        let mut solver = BruteForceSolver::new();
        for case in REFERENCE_CASES.iter() {
            let outcome = solver.solve(&seq(case.values)).unwrap();
            assert_eq!(
                outcome.subarray().into_triple(),
                case.expected,
                "wrong result for {:?}",
                case.values
            );
        }
    }

    #[test]
    fn test_tie_break_matches_scan_order() {
        let mut solver = BruteForceSolver::new();
        let best = solver.solve(&seq(&[1, -1, 1])).unwrap().into_subarray();
        assert_eq!(best.into_triple(), (1, 0, 0));

        let best = solver.solve(&seq(&[2, -2, 5])).unwrap().into_subarray();
        assert_eq!(best.into_triple(), (5, 0, 2));
    }

    #[test]
    fn test_counts_all_pairs() {
        let mut solver = BruteForceSolver::new();
        let outcome = solver.solve(&seq(&[1, 2, 3, 4])).unwrap();
        assert_eq!(outcome.statistics().elements_scanned, 10);
        assert_eq!(outcome.statistics().resets, 0);
    }

    #[test]
    fn test_no_positive_element() {
        let mut solver = BruteForceSolver::<i64>::new();
        assert_eq!(
            solver.solve(&seq(&[-1, -2])),
            Err(SolveError::NoPositiveElement)
        );

        let mut lenient = BruteForceSolver::<i64>::new().require_positive(false);
        let best = lenient.solve(&seq(&[-1, -2])).unwrap().into_subarray();
        assert_eq!(best.into_triple(), (0, 0, 0));
    }

    #[test]
    fn test_sums_below_min_are_ignored() {
        let mut solver = BruteForceSolver::<i8>::new();
        let input = Sequence::new(vec![-128_i8, -128, 7]).unwrap();
        let best = solver.solve(&input).unwrap().into_subarray();
        assert_eq!(best.into_triple(), (7, 2, 2));
    }

    #[test]
    fn test_wide_sums_below_min_agree_with_scan() {
        let input = Sequence::new(vec![i128::MIN, i128::MIN, 5]).unwrap();
        let brute = BruteForceSolver::new().solve(&input).unwrap().into_subarray();
        let scan = KadaneSolver::new().solve(&input).unwrap().into_subarray();
        assert_eq!(brute, scan);
        assert_eq!(brute.into_triple(), (5, 2, 2));

        let input = Sequence::new(vec![3, i128::MIN, i128::MIN, 2, 4]).unwrap();
        let brute = BruteForceSolver::new().solve(&input).unwrap().into_subarray();
        let scan = KadaneSolver::new().solve(&input).unwrap().into_subarray();
        assert_eq!(brute, scan);
        assert_eq!(brute.into_triple(), (6, 3, 4));
    }

    #[test]
    fn test_wide_sum_above_max_is_overflow() {
        let input = Sequence::new(vec![i128::MAX, -1, 2]).unwrap();
        let expected = Err(SolveError::Overflow {
            index: ElementIndex::new(2),
        });
        assert_eq!(BruteForceSolver::new().solve(&input), expected);
        assert_eq!(KadaneSolver::new().solve(&input), expected);
    }

    #[test]
    fn test_sum_above_max_is_overflow() {
        let mut solver = BruteForceSolver::<i8>::new();
        let input = Sequence::new(vec![100_i8, -1, 1, 100]).unwrap();
        assert_eq!(
            solver.solve(&input),
            Err(SolveError::Overflow {
                index: ElementIndex::new(3)
            })
        );
    }

    #[test]
    fn test_monitor_sees_strictly_increasing_trail() {
        let mut monitor = RecordingMonitor::new();
        BruteForceSolver::new()
            .solve_with_monitor(&seq(&[-4, 2, -6, 8, -2, 4, 2, -9, 8]), &mut monitor)
            .unwrap();

        let sums: Vec<i64> = monitor.improvements().iter().map(|s| s.sum()).collect();
        assert_eq!(sums, vec![2, 8, 10, 12]);
        assert!(monitor.is_finished());
    }
}
