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

use anyhow::{Context, Result, bail};
use clap::Parser;
use maxsub_search::{
    monitor::{composite::CompositeMonitor, log::LogMonitor, recording::RecordingMonitor},
    result::SolveOutcome,
};
use maxsub_solver::{
    batch::BatchSolverBuilder,
    brute_force::BruteForceSolver,
    kadane::{KadaneSolver, KadaneSolverBuilder},
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod input;
mod report;

use input::LabeledInput;

#[derive(Parser)]
#[command(name = "maxsub")]
#[command(about = "Find a contiguous subarray with the maximum sum", long_about = None)]
#[command(version)]
struct Cli {
    /// Array to solve, e.g. "-4 2 -6 5" or "[-4, 2, -6, 5]" (repeatable)
    #[arg(short, long = "array", value_name = "INTS", allow_hyphen_values = true)]
    arrays: Vec<String>,

    /// File with one array per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Scan arrays without a positive element instead of rejecting them
    #[arg(long)]
    allow_non_positive: bool,

    /// Cross-check every result against the brute-force solver
    #[arg(long)]
    verify: bool,

    /// Print scan statistics after every result
    #[arg(long)]
    stats: bool,

    /// Print every best-so-far subarray after every result (sequential runs only)
    #[arg(long, conflicts_with = "threads")]
    trace: bool,

    /// Solve the arrays in parallel with this many worker threads
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let inputs = input::collect(&cli.arrays, cli.file.as_deref())?;
    let solver = KadaneSolverBuilder::new()
        .require_positive(!cli.allow_non_positive)
        .build();

    tracing::debug!(
        inputs = inputs.len(),
        threads = ?cli.threads,
        verify = cli.verify,
        "solving"
    );

    match cli.threads {
        Some(threads) => run_batch(&cli, solver, &inputs, threads),
        None => run_sequential(&cli, solver, &inputs),
    }
}

fn run_sequential(cli: &Cli, mut solver: KadaneSolver<i64>, inputs: &[LabeledInput]) -> Result<()> {
    for input in inputs {
        let mut recording = RecordingMonitor::new();
        let outcome = {
            let mut monitor = CompositeMonitor::with_capacity(2);
            monitor.add_monitor(LogMonitor::new(input.label.clone()));
            monitor.add_monitor(&mut recording);
            solver
                .solve_with_monitor(&input.sequence, &mut monitor)
                .with_context(|| format!("failed to solve {} {}", input.label, input.sequence))?
        };

        present(cli, input, &outcome)?;
        if cli.trace {
            for line in report::trail_lines(recording.improvements()) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn run_batch(
    cli: &Cli,
    solver: KadaneSolver<i64>,
    inputs: &[LabeledInput],
    threads: usize,
) -> Result<()> {
    let sequences: Vec<_> = inputs.iter().map(|i| i.sequence.clone()).collect();
    let batch = BatchSolverBuilder::new(solver).threads(threads).build();
    let results = batch.solve(&sequences);

    for (input, result) in inputs.iter().zip(results) {
        let outcome = result
            .with_context(|| format!("failed to solve {} {}", input.label, input.sequence))?;
        present(cli, input, &outcome)?;
    }
    Ok(())
}

fn present(cli: &Cli, input: &LabeledInput, outcome: &SolveOutcome<i64>) -> Result<()> {
    if cli.verify {
        verify(input, outcome, !cli.allow_non_positive)?;
    }

    println!("{}", report::result_line(outcome.subarray()));
    if cli.stats {
        println!("{}", report::statistics_block(outcome.statistics()));
    }
    Ok(())
}

/// Checks `outcome` against the brute-force solver run with the same
/// precondition guard. Any difference is an error.
fn verify(input: &LabeledInput, outcome: &SolveOutcome<i64>, require_positive: bool) -> Result<()> {
    let reference = BruteForceSolver::new()
        .require_positive(require_positive)
        .solve(&input.sequence)
        .with_context(|| format!("brute-force solver failed on {}", input.label))?;

    if reference.subarray() != outcome.subarray() {
        bail!(
            "verification failed for {} {}: scan reported {}, brute force reported {}",
            input.label,
            input.sequence,
            outcome.subarray(),
            reference.subarray()
        );
    }

    tracing::debug!(label = %input.label, "result verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxsub_model::{index::ElementIndex, sequence::Sequence, subarray::Subarray};
    use maxsub_search::stats::ScanStatistics;

    fn labeled(values: &[i64]) -> LabeledInput {
        LabeledInput {
            label: "array #1".to_string(),
            sequence: Sequence::from_slice(values).unwrap(),
        }
    }

    fn scan(input: &LabeledInput, require_positive: bool) -> SolveOutcome<i64> {
        KadaneSolverBuilder::new()
            .require_positive(require_positive)
            .build()
            .solve(&input.sequence)
            .unwrap()
    }

    #[test]
    fn test_verify_accepts_matching_result() {
        let input = labeled(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
        let outcome = scan(&input, true);
        assert!(verify(&input, &outcome, true).is_ok());
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let input = labeled(&[1, -1, 1]);
        // Same sum as the reported optimum, but discovered later.
        let wrong = Subarray::new(1, ElementIndex::new(2), ElementIndex::new(2));
        let outcome = SolveOutcome::new(wrong, ScanStatistics::default());

        let err = verify(&input, &outcome, true).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("verification failed for array #1"));
        assert!(message.contains("Subarray(sum=1, 0..=0)"));
    }

    #[test]
    fn test_verify_non_positive_input() {
        let input = labeled(&[-3, -1, -2]);
        let outcome = scan(&input, false);
        assert_eq!(outcome.subarray().into_triple(), (0, 0, 0));
        assert!(verify(&input, &outcome, false).is_ok());

        let err = verify(&input, &outcome, true).unwrap_err();
        assert!(format!("{:#}", err).contains("brute-force solver failed"));
    }

    #[test]
    fn test_trace_conflicts_with_threads() {
        assert!(Cli::try_parse_from(["maxsub", "--trace"]).is_ok());
        assert!(Cli::try_parse_from(["maxsub", "-j", "2"]).is_ok());

        let err = Cli::try_parse_from(["maxsub", "--trace", "-j", "2"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_array_values_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["maxsub", "-a", "-4 2", "--array", "[-1, 3]"]).unwrap();
        assert_eq!(cli.arrays, vec!["-4 2".to_string(), "[-1, 3]".to_string()]);
    }
}
