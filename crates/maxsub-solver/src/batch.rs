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

//! # Batch Solver
//!
//! Solves many independent inputs in parallel. The inputs are split into
//! contiguous chunks, one per worker, and every worker runs its own clone of
//! the configured solver on scoped threads that borrow the input slice.
//! Solvers hold configuration only, so workers share no mutable state.
//!
//! Results come back in input order, one per input. A failure on one input
//! is reported in its slot and does not affect the others.
//!
//! ## Usage
//!
//! ```rust
//! use maxsub_model::sequence::Sequence;
//! use maxsub_solver::{batch::BatchSolverBuilder, kadane::KadaneSolver};
//!
//! let inputs = vec![
//!     Sequence::new(vec![9_i64, -2, -6]).unwrap(),
//!     Sequence::new(vec![-1_i64, -2]).unwrap(),
//! ];
//! let batch = BatchSolverBuilder::new(KadaneSolver::new()).threads(2).build();
//! let results = batch.solve(&inputs);
//!
//! assert_eq!(results[0].as_ref().unwrap().subarray().into_triple(), (9, 0, 0));
//! assert!(results[1].is_err());
//! ```

use maxsub_model::sequence::Sequence;
use maxsub_search::{
    error::SolveResult, num::SolverNumeric, result::SolveOutcome, solver::SubarraySolver,
};
use std::num::NonZeroUsize;

/// Runs a solver over many inputs on scoped worker threads.
#[derive(Debug, Clone)]
pub struct BatchSolver<S> {
    solver: S,
    threads: NonZeroUsize,
}

impl<S> BatchSolver<S> {
    /// The configured number of workers.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads.get()
    }

    /// The solver cloned into every worker.
    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Solves every sequence and returns one result per input, in input
    /// order. Fewer workers than configured are spawned when there are
    /// fewer inputs than workers.
    pub fn solve<T>(&self, sequences: &[Sequence<T>]) -> Vec<SolveResult<SolveOutcome<T>>>
    where
        T: SolverNumeric,
        S: SubarraySolver<T> + Clone + Send,
    {
        if sequences.is_empty() {
            return Vec::new();
        }

        let workers = self.threads.get().min(sequences.len());
        let chunk_size = sequences.len().div_ceil(workers);

        tracing::debug!(
            solver = self.solver.name(),
            inputs = sequences.len(),
            workers,
            chunk_size,
            "batch solve started"
        );

        let mut results = Vec::with_capacity(sequences.len());

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);

            for (worker, chunk) in sequences.chunks(chunk_size).enumerate() {
                let mut solver = self.solver.clone();
                let handle = scope.spawn(move || {
                    let _span = tracing::debug_span!("batch_worker", worker).entered();
                    chunk
                        .iter()
                        .map(|sequence| solver.solve_sequence(sequence))
                        .collect::<Vec<_>>()
                });
                handles.push(handle);
            }

            for handle in handles {
                results.extend(handle.join().expect("batch worker thread panicked"));
            }
        });

        debug_assert_eq!(
            results.len(),
            sequences.len(),
            "batch solve lost or duplicated results"
        );

        results
    }
}

/// Builder for `BatchSolver`.
#[derive(Debug, Clone)]
pub struct BatchSolverBuilder<S> {
    solver: S,
    threads: Option<NonZeroUsize>,
}

impl<S> BatchSolverBuilder<S> {
    /// Starts a builder around the solver every worker will clone.
    #[inline]
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            threads: None,
        }
    }

    /// Sets the number of workers. Zero is treated as one.
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(NonZeroUsize::new(threads).unwrap_or(NonZeroUsize::MIN));
        self
    }

    /// Builds the `BatchSolver`. Without an explicit worker count, the
    /// available parallelism of the machine is used.
    #[inline]
    pub fn build(self) -> BatchSolver<S> {
        let threads = self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
        });

        BatchSolver {
            solver: self.solver,
            threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        brute_force::BruteForceSolver,
        kadane::{KadaneSolver, KadaneSolverBuilder},
        reference::REFERENCE_CASES,
    };
    use maxsub_search::error::SolveError;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn reference_inputs() -> Vec<Sequence<i64>> {
        REFERENCE_CASES
            .iter()
            .map(|c| Sequence::from_slice(c.values).unwrap())
            .collect()
    }

    #[test]
    fn test_results_are_in_input_order() {
        let inputs = reference_inputs();
        for threads in [1, 2, 3, 7, 16] {
            let batch = BatchSolverBuilder::new(KadaneSolver::new())
                .threads(threads)
                .build();
            let results = batch.solve(&inputs);

            assert_eq!(results.len(), REFERENCE_CASES.len());
            for (result, case) in results.iter().zip(REFERENCE_CASES.iter()) {
                let outcome = result.as_ref().unwrap();
                assert_eq!(outcome.subarray().into_triple(), case.expected);
            }
        }
    }

    #[test]
    fn test_errors_stay_in_their_slot() {
        let inputs = vec![
            Sequence::new(vec![-1_i64, -2]).unwrap(),
            Sequence::new(vec![5_i64]).unwrap(),
            Sequence::new(vec![0_i64]).unwrap(),
        ];
        let batch = BatchSolverBuilder::new(KadaneSolver::new())
            .threads(2)
            .build();
        let results = batch.solve(&inputs);

        assert_eq!(results[0], Err(SolveError::NoPositiveElement));
        assert_eq!(results[1].as_ref().unwrap().subarray().into_triple(), (5, 0, 0));
        assert_eq!(results[2], Err(SolveError::NoPositiveElement));
    }

    #[test]
    fn test_solver_configuration_reaches_workers() {
        let inputs = vec![Sequence::new(vec![-1_i64, -2]).unwrap()];
        let lenient = KadaneSolverBuilder::new().require_positive(false).build();
        let results = BatchSolverBuilder::new(lenient).threads(4).build().solve(&inputs);

        assert_eq!(results[0].as_ref().unwrap().subarray().into_triple(), (0, 0, 0));
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchSolverBuilder::new(KadaneSolver::<i64>::new()).build();
        assert!(batch.solve::<i64>(&[]).is_empty());
        assert!(batch.threads() >= 1);
    }

    #[test]
    fn test_zero_threads_is_one() {
        let batch = BatchSolverBuilder::new(KadaneSolver::<i64>::new())
            .threads(0)
            .build();
        assert_eq!(batch.threads(), 1);
    }

    #[test]
    fn test_parallel_kadane_matches_sequential_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xBEEF);
        let inputs: Vec<Sequence<i64>> = (0..200)
            .map(|_| {
                let len = rng.random_range(1..=30);
                let mut values: Vec<i64> =
                    (0..len).map(|_| rng.random_range(-50..=50)).collect();
                values[len - 1] = rng.random_range(1..=50);
                Sequence::new(values).unwrap()
            })
            .collect();

        let parallel = BatchSolverBuilder::new(KadaneSolver::new())
            .threads(4)
            .build()
            .solve(&inputs);

        let mut brute = BruteForceSolver::new();
        for (result, input) in parallel.iter().zip(inputs.iter()) {
            let expected = brute.solve(input).unwrap();
            assert_eq!(result.as_ref().unwrap().subarray(), expected.subarray());
        }
    }
}
