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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use maxsub_model::sequence::Sequence;
use maxsub_solver::{
    batch::BatchSolverBuilder, brute_force::BruteForceSolver, kadane::KadaneSolver,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 512, 4_096, 32_768];
const BRUTE_FORCE_MAX_LEN: usize = 4_096;

/// Random values in [-100, 100] with one guaranteed positive element.
fn random_sequence(rng: &mut ChaCha8Rng, len: usize) -> Sequence<i64> {
    let mut values: Vec<i64> = (0..len).map(|_| rng.random_range(-100..=100)).collect();
    let pos = rng.random_range(0..len);
    values[pos] = rng.random_range(1..=100);
    Sequence::new(values).expect("benchmark sequences are non-empty")
}

fn bench_single_solve(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut group = c.benchmark_group("single_solve");

    for len in SIZES {
        let sequence = random_sequence(&mut rng, len);
        group.throughput(Throughput::Elements(len as u64));

        let mut kadane = KadaneSolver::<i64>::new();
        group.bench_with_input(BenchmarkId::new("kadane", len), &sequence, |b, seq| {
            b.iter(|| kadane.solve(black_box(seq)).expect("precondition holds"))
        });

        if len <= BRUTE_FORCE_MAX_LEN {
            let mut brute = BruteForceSolver::<i64>::new();
            group.bench_with_input(BenchmarkId::new("brute_force", len), &sequence, |b, seq| {
                b.iter(|| brute.solve(black_box(seq)).expect("precondition holds"))
            });
        }
    }
    group.finish();
}

fn bench_batch_solve(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let inputs: Vec<Sequence<i64>> = (0..1_024).map(|_| random_sequence(&mut rng, 1_024)).collect();
    let total: u64 = inputs.iter().map(|s| s.len() as u64).sum();

    let mut group = c.benchmark_group("batch_solve");
    group.throughput(Throughput::Elements(total));

    for threads in [1, 2, 4, 8] {
        let batch = BatchSolverBuilder::new(KadaneSolver::<i64>::new())
            .threads(threads)
            .build();
        group.bench_with_input(BenchmarkId::new("kadane", threads), &inputs, |b, inputs| {
            b.iter(|| batch.solve(black_box(inputs)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_solve, bench_batch_solve);
criterion_main!(benches);
